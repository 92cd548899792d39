use crate::cli::commands::{open_tracker, print_recap, resolve_type_ref};
use crate::cli::parser::{Commands, QuickAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{badges_unlocked, info, success};
use crate::utils::fmt_points;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Quick { action } = cmd else {
        return Ok(());
    };

    let mut tracker = open_tracker(cfg)?;

    match action {
        QuickAction::List => {
            let state = tracker.state();
            if state.settings.quick_actions.is_empty() {
                info("No quick actions. Add one with `rhabitlog quick add <ID>`.");
                return Ok(());
            }
            let today = tracker.today();
            for (pos, id) in state.settings.quick_actions.iter().enumerate() {
                if let Some(t) = state.catalog.resolve(*id) {
                    let mark = if tracker.can_log(*id, today) { " " } else { "✔" };
                    println!(
                        "@{:<2} {} #{:<3} {:<24} {}",
                        pos + 1,
                        mark,
                        t.id,
                        t.name,
                        fmt_points(t.value, true)
                    );
                }
            }
        }

        QuickAction::Add { id } => {
            tracker.add_quick_action(*id)?;
            success(format!("Action type #{id} added to quick actions."));
        }

        QuickAction::Remove { id } => {
            tracker.remove_quick_action(*id)?;
            success(format!("Action type #{id} removed from quick actions."));
        }

        QuickAction::Log { action, note } => {
            let id = match action.strip_prefix('@') {
                Some(pos) => {
                    let idx: usize = pos
                        .parse()
                        .map_err(|_| AppError::Validation(format!("invalid position '{action}'")))?;
                    idx.checked_sub(1)
                        .and_then(|i| tracker.state().settings.quick_actions.get(i).copied())
                        .ok_or_else(|| AppError::NotFound(format!("quick action {action}")))?
                }
                None => resolve_type_ref(tracker.state(), action)?,
            };

            let outcome = tracker.quick_log(id, note.as_deref())?;
            success(format!(
                "Logged '{}' ({}) for today (#{})",
                outcome.value.snapshot.name,
                fmt_points(outcome.value.value(), true),
                outcome.value.id
            ));
            print_recap(tracker.progress());
            badges_unlocked(&outcome.newly_earned);
        }
    }

    Ok(())
}
