use crate::cli::commands::{ask_confirmation, open_tracker, print_recap};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ImportLogic;
use crate::ui::messages::{badges_unlocked, info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        let path = expand_tilde(file);

        // Validate before touching anything
        let state = ImportLogic::read(&path)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Import {} logged actions from {}? All current data will be replaced.",
                state.logged_actions.len(),
                path.display()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut tracker = open_tracker(cfg)?;
        let outcome = tracker.replace_state(state)?;

        success(format!(
            "Imported {} action types and {} logged actions.",
            tracker.state().catalog.len(),
            tracker.state().logged_actions.len()
        ));
        print_recap(tracker.progress());
        badges_unlocked(&outcome.newly_earned);
    }

    Ok(())
}
