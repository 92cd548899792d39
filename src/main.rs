//! rHabitlog main entrypoint.

use clap::Parser;
use rhabitlog::cli::parser::Cli;
use rhabitlog::ui::messages::{error, warning};
use rhabitlog::{LOG_ENV, dispatch, load_config};
use tracing_subscriber::EnvFilter;

fn init_tracing(fallback_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stderr keeps stdout clean for command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("warn");
            error(e);
            std::process::exit(1);
        }
    };
    init_tracing(&cfg.log_level);

    if let Err(e) = dispatch(&cli, &cfg) {
        error(&e);
        if e.is_persistence() {
            warning("Changes may not have been saved.");
        }
        std::process::exit(1);
    }
}
