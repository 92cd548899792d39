use crate::errors::{AppError, AppResult};
use crate::models::{AppState, LoggedAction};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Append / delete operations and queries over the action log.
pub struct LogLogic;

impl LogLogic {
    /// True when `action_type_id` has not been logged on `date` yet.
    pub fn can_log(state: &AppState, action_type_id: u32, date: NaiveDate) -> bool {
        !state
            .logged_actions
            .iter()
            .any(|a| a.action_type_id == action_type_id && a.date == date)
    }

    pub fn log(
        state: &mut AppState,
        action_type_id: u32,
        date: NaiveDate,
        note: Option<&str>,
    ) -> AppResult<LoggedAction> {
        let action_type = state
            .catalog
            .resolve(action_type_id)
            .ok_or_else(|| AppError::NotFound(format!("action type #{action_type_id}")))?
            .clone();

        if !Self::can_log(state, action_type_id, date) {
            return Err(AppError::Duplicate(format!(
                "'{}' is already logged for {}",
                action_type.name, date
            )));
        }

        let id = state.sequences.next_logged_action_id;
        state.sequences.next_logged_action_id += 1;

        let entry = LoggedAction::new(id, &action_type, date, note);
        state.logged_actions.push(entry.clone());

        info!(id, action = %action_type.name, date = %date, value = entry.value(), "action logged");
        Ok(entry)
    }

    /// Remove an entry. Unknown ids are ignored and yield None.
    pub fn delete(state: &mut AppState, id: u64) -> Option<LoggedAction> {
        match state.logged_actions.iter().position(|a| a.id == id) {
            Some(idx) => {
                let removed = state.logged_actions.remove(idx);
                info!(id, date = %removed.date, "logged action deleted");
                Some(removed)
            }
            None => {
                debug!(id, "delete of unknown logged action ignored");
                None
            }
        }
    }

    pub fn find(state: &AppState, id: u64) -> Option<&LoggedAction> {
        state.logged_actions.iter().find(|a| a.id == id)
    }

    /// Most recent first: calendar date, then creation time.
    pub fn recent(state: &AppState, limit: usize) -> Vec<&LoggedAction> {
        let mut out: Vec<&LoggedAction> = state.logged_actions.iter().collect();
        out.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| b.id.cmp(&a.id))
        });
        out.truncate(limit);
        out
    }

    pub fn on_date(state: &AppState, date: NaiveDate) -> Vec<&LoggedAction> {
        let mut out: Vec<&LoggedAction> = state
            .logged_actions
            .iter()
            .filter(|a| a.date == date)
            .collect();
        out.sort_by_key(|a| a.id);
        out
    }

    /// Entries in `[start, end]`, oldest first. `None` bounds are open.
    pub fn between(
        state: &AppState,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Vec<&LoggedAction> {
        let mut out: Vec<&LoggedAction> = state
            .logged_actions
            .iter()
            .filter(|a| start.is_none_or(|s| a.date >= s) && end.is_none_or(|e| a.date <= e))
            .collect();
        out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        out
    }
}
