use crate::cli::parser::Commands;
use crate::config::{Backend, Config};
use crate::db::stats;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        info,
        check,
        vacuum,
    } = cmd
    {
        if cfg.backend != Backend::Sqlite {
            return Err(AppError::Config(
                "the db command needs the sqlite backend (use --backend sqlite)".into(),
            ));
        }

        // Opening runs pending migrations
        let db_path = cfg.sqlite_file();
        let mut store = SqliteStore::open(&db_path, &cfg.user_id)?;
        let pool = store.pool_mut();

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(pool, &db_path, &cfg.user_id)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
