use crate::db::pool::DbPool;
use crate::db::{migrate, queries};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::fmt_points;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &mut DbPool, db_path: &Path, user_id: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path.display(), RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!("{}• User:{} {}", CYAN, RESET, user_id);

    //
    // 2) SCHEMA
    //
    let versions = migrate::applied_versions(&pool.conn)?;
    println!(
        "{}• Schema:{} {}",
        CYAN,
        RESET,
        versions.last().map(String::as_str).unwrap_or("--")
    );

    //
    // 3) TOTAL LOGGED ACTIONS
    //
    let count = queries::count_logged_actions(&pool.conn, user_id)?;
    println!(
        "{}• Logged actions:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 4) DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(date), MAX(date) FROM logged_actions WHERE user_id = ?1",
        [user_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first_date.clone().unwrap_or_else(dash));
    println!("    to:   {}", last_date.clone().unwrap_or_else(dash));

    //
    // 5) SPLIT BY CATEGORY
    //
    let mut stmt = pool.conn.prepare(
        "SELECT type_category, COUNT(*), COALESCE(SUM(type_value), 0)
         FROM logged_actions WHERE user_id = ?1
         GROUP BY type_category ORDER BY type_category DESC",
    )?;
    let rows = stmt.query_map([user_id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, i64>(2)?,
        ))
    })?;
    for r in rows {
        let (category, n, points) = r?;
        println!(
            "{}• {}:{} {} action(s), {} pts",
            CYAN,
            category,
            RESET,
            n,
            fmt_points(points, true)
        );
    }

    //
    // 6) AVERAGE ACTIONS/DAY
    //
    if let (Some(f), Some(l)) = (first_date, last_date) {
        let d1 = parse_date(&f)?;
        let d2 = parse_date(&l)?;
        let days = (d2 - d1).num_days() + 1;

        let avg = count as f64 / days as f64;
        println!("{}• Average actions/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}

fn parse_date(date_str: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
