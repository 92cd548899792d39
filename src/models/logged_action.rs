use super::action_type::{ActionSnapshot, ActionType};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedAction {
    pub id: u64,
    pub action_type_id: u32, // ⇔ action_types.id (may no longer exist)
    pub snapshot: ActionSnapshot,
    pub date: NaiveDate, // ⇔ logged_actions.date (TEXT "YYYY-MM-DD")
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Local>,
}

impl LoggedAction {
    /// Build a new entry for `action_type`, capturing its snapshot now.
    /// Blank notes are dropped.
    pub fn new(id: u64, action_type: &ActionType, date: NaiveDate, note: Option<&str>) -> Self {
        let note = note
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Self {
            id,
            action_type_id: action_type.id,
            snapshot: action_type.snapshot(),
            date,
            note,
            created_at: Local::now(),
        }
    }

    /// Canonical local calendar-day key.
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn value(&self) -> i64 {
        self.snapshot.value
    }

    pub fn is_positive(&self) -> bool {
        self.snapshot.value > 0
    }

    pub fn is_negative(&self) -> bool {
        self.snapshot.value < 0
    }
}
