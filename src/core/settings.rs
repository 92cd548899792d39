use crate::errors::{AppError, AppResult};
use crate::models::{AppState, Theme};
use crate::utils::time::parse_time;

pub struct SettingsLogic;

impl SettingsLogic {
    pub fn set_goal(state: &mut AppState, goal: i64) -> AppResult<()> {
        if goal <= 0 {
            return Err(AppError::Validation(format!(
                "goal must be a positive integer, got {goal}"
            )));
        }
        state.settings.goal = goal;
        Ok(())
    }

    pub fn set_reminder(state: &mut AppState, time: &str) -> AppResult<()> {
        let t = parse_time(time)
            .ok_or_else(|| AppError::Validation(format!("invalid reminder time '{time}' (HH:MM)")))?;
        state.settings.reminder_time = t.format("%H:%M").to_string();
        Ok(())
    }

    pub fn set_theme(state: &mut AppState, theme: Theme) {
        state.settings.theme = theme;
    }

    /// Append to the quick-access list. The type must exist and not be listed yet.
    pub fn add_quick_action(state: &mut AppState, id: u32) -> AppResult<()> {
        if state.catalog.resolve(id).is_none() {
            return Err(AppError::NotFound(format!("action type #{id}")));
        }
        if state.settings.quick_actions.contains(&id) {
            return Err(AppError::Duplicate(format!(
                "action type #{id} is already a quick action"
            )));
        }
        state.settings.quick_actions.push(id);
        Ok(())
    }

    pub fn remove_quick_action(state: &mut AppState, id: u32) -> AppResult<()> {
        let before = state.settings.quick_actions.len();
        state.settings.quick_actions.retain(|q| *q != id);
        if state.settings.quick_actions.len() == before {
            return Err(AppError::NotFound(format!(
                "action type #{id} is not a quick action"
            )));
        }
        Ok(())
    }
}
