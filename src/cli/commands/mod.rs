pub mod backup;
pub mod badges;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod quick;
pub mod settings;
pub mod status;
pub mod types;
pub mod workout;

use crate::config::Config;
use crate::core::Tracker;
use crate::errors::{AppError, AppResult};
use crate::models::{AppState, DayOfWeek, ProgressSnapshot};
use crate::storage::{StateStore, open_store};
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, RESET, color_for_points};
use crate::utils::{date, fmt_points};
use std::io::{self, IsTerminal, Write};

pub(crate) type CliTracker = Tracker<Box<dyn StateStore>>;

/// Open the configured store and load (or seed) the state.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<CliTracker> {
    Tracker::open(open_store(cfg)?, date::today())
}

/// Resolve an action type given by numeric id or by (case-insensitive) name.
pub(crate) fn resolve_type_ref(state: &AppState, reference: &str) -> AppResult<u32> {
    let reference = reference.trim();
    if let Ok(id) = reference.parse::<u32>() {
        return state
            .catalog
            .resolve(id)
            .map(|t| t.id)
            .ok_or_else(|| AppError::NotFound(format!("action type #{id}")));
    }

    state
        .catalog
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(reference))
        .map(|t| t.id)
        .ok_or_else(|| AppError::NotFound(format!("action type '{reference}'")))
}

pub(crate) fn parse_day(s: &str) -> AppResult<DayOfWeek> {
    DayOfWeek::from_code(s).ok_or_else(|| {
        AppError::Validation(format!("unknown weekday '{s}' (use monday..sunday or mon..sun)"))
    })
}

/// One-line progress recap printed after a mutation.
pub(crate) fn print_recap(p: &ProgressSnapshot) {
    println!(
        "{}Balance:{} {} · {}Net:{} {}{}{} · {}Progress:{} {:.1}% · {}Streak:{} {} day(s)",
        CYAN,
        RESET,
        fmt_points(p.current_balance, false),
        CYAN,
        RESET,
        color_for_points(p.net_gain),
        fmt_points(p.net_gain, true),
        RESET,
        CYAN,
        RESET,
        p.progress_percent,
        CYAN,
        RESET,
        p.current_streak
    );
}

/// Ask a yes/no confirmation from the user. Non-interactive input declines.
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    if !io::stdin().is_terminal() {
        return false;
    }
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
