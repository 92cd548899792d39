use crate::models::LoggedAction;
use serde::Serialize;

/// Flat row for the CSV history export.
#[derive(Serialize, Clone, Debug)]
pub struct LoggedActionRow {
    pub id: u64,
    pub date: String,
    pub action: String,
    pub category: String,
    pub points: i64,
    pub note: String,
    pub created_at: String,
}

impl From<&LoggedAction> for LoggedActionRow {
    fn from(a: &LoggedAction) -> Self {
        Self {
            id: a.id,
            date: a.date_str(),
            action: a.snapshot.name.clone(),
            category: a.snapshot.category.as_str().to_string(),
            points: a.value(),
            note: a.note.clone().unwrap_or_default(),
            created_at: a.created_at.to_rfc3339(),
        }
    }
}
