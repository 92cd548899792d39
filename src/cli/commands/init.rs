use crate::cli::commands::open_tracker;
use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the data directory
///  - the store, seeded with the built-in action types and badges
pub fn handle(cli: &Cli) -> AppResult<()> {
    let data = cli
        .data
        .as_deref()
        .map(|d| expand_tilde(d).to_string_lossy().to_string());
    let cfg = Config::init_all(data, cli.backend, cli.test)?;

    println!("⚙️  Initializing rHabitlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Backend     : {}", cfg.backend.as_str());
    match cfg.backend {
        Backend::Local => println!("📁 Data file   : {}", cfg.data_file().display()),
        Backend::Sqlite => println!(
            "📁 Database    : {} (user '{}')",
            cfg.sqlite_file().display(),
            cfg.user_id
        ),
    }

    let tracker = open_tracker(&cfg)?;
    let state = tracker.state();

    println!(
        "✅ {} action types, {} badges, {} logged actions",
        state.catalog.len(),
        state.badges.len(),
        state.logged_actions.len()
    );
    println!("🎉 rHabitlog initialization completed!");
    Ok(())
}
