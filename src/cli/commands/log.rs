use crate::cli::commands::{open_tracker, print_recap, resolve_type_ref};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{badges_unlocked, success};
use crate::utils::{date, fmt_points};

/// Handle the `log` command: collect (type, date, note), log, report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        action,
        date: date_arg,
        note,
    } = cmd
    {
        let mut tracker = open_tracker(cfg)?;

        let type_id = resolve_type_ref(tracker.state(), action)?;
        let day = match date_arg {
            Some(d) => date::parse_date_relative(d, tracker.today())?,
            None => tracker.today(),
        };

        let outcome = tracker.log_action(type_id, day, note.as_deref())?;
        let entry = &outcome.value;

        success(format!(
            "Logged '{}' ({}) for {} (#{})",
            entry.snapshot.name,
            fmt_points(entry.value(), true),
            entry.date_str(),
            entry.id
        ));
        print_recap(tracker.progress());
        badges_unlocked(&outcome.newly_earned);
    }

    Ok(())
}
