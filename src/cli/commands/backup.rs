use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let src = cfg.data_file();
        let dest = match file {
            Some(f) => expand_tilde(f),
            None => BackupLogic::default_destination(&src),
        };

        let written = BackupLogic::backup(&src, &dest, *compress, *force)?;
        if *compress {
            success(format!("Compressed backup created: {}", written.display()));
        } else {
            success(format!("Backup created: {}", written.display()));
        }
    }

    Ok(())
}
