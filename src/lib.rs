//! rHabitlog library root.
//! Exposes the CLI parser, the command dispatcher and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Environment variable holding the log filter (e.g. `debug`, `rhabitlog=info`).
pub const LOG_ENV: &str = "RHABITLOG_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Types { .. } => c::types::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Del { .. } => c::del::handle(&cli.command, cfg),
        Commands::List { .. } => c::list::handle(&cli.command, cfg),
        Commands::Status => c::status::handle(cfg),
        Commands::Badges { .. } => c::badges::handle(&cli.command, cfg),
        Commands::Quick { .. } => c::quick::handle(&cli.command, cfg),
        Commands::Settings { .. } => c::settings::handle(&cli.command, cfg),
        Commands::Workout { .. } => c::workout::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
        Commands::Import { .. } => c::import::handle(&cli.command, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
    }
}

/// Load the configuration once and apply the command-line overrides.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load()?;

    if let Some(data) = &cli.data {
        cfg.data_path = utils::path::expand_tilde(data).to_string_lossy().to_string();
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }

    Ok(cfg)
}
