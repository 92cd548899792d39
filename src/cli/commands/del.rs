use crate::cli::commands::{ask_confirmation, open_tracker, print_recap};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::action_log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::{badges_unlocked, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut tracker = open_tracker(cfg)?;

        let Some(entry) = LogLogic::find(tracker.state(), *id) else {
            info(format!("No logged action #{id}; nothing to delete."));
            return Ok(());
        };

        if !*yes {
            let prompt = format!(
                "Delete '{}' logged on {} (#{})? This action is irreversible.",
                entry.snapshot.name,
                entry.date_str(),
                entry.id
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let outcome = tracker.delete_logged_action(*id)?;
        if let Some(removed) = &outcome.value {
            success(format!(
                "Deleted '{}' for {} (#{})",
                removed.snapshot.name,
                removed.date_str(),
                removed.id
            ));
            print_recap(tracker.progress());
            badges_unlocked(&outcome.newly_earned);
        }
    }

    Ok(())
}
