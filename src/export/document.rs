//! Versioned full-state export document.
//!
//! The document carries every section of [`AppState`] plus a small header.
//! Import validates the raw JSON shape before deserializing so a malformed
//! file is rejected with a message naming what is wrong.

use crate::errors::{AppError, AppResult};
use crate::models::{AppState, Badge, Catalog, CustomWorkouts, LoggedAction, UserSettings, WorkoutProgress};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

pub const FORMAT_VERSION: u32 = 1;
pub const APP_NAME: &str = "rhabitlog";

/// Top-level sections an import must contain.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "format_version",
    "settings",
    "action_types",
    "logged_actions",
    "badges",
    "workout_progress",
    "custom_workouts",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub format_version: u32,
    #[serde(default = "Local::now")]
    pub exported_at: DateTime<Local>,
    #[serde(default)]
    pub app: String,
    pub settings: UserSettings,
    pub action_types: Catalog,
    pub logged_actions: Vec<LoggedAction>,
    pub badges: Vec<Badge>,
    pub workout_progress: WorkoutProgress,
    pub custom_workouts: CustomWorkouts,
}

impl ExportDocument {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            exported_at: Local::now(),
            app: format!("{APP_NAME} {}", env!("CARGO_PKG_VERSION")),
            settings: state.settings.clone(),
            action_types: state.catalog.clone(),
            logged_actions: state.logged_actions.clone(),
            badges: state.badges.clone(),
            workout_progress: state.workout_progress.clone(),
            custom_workouts: state.custom_workouts.clone(),
        }
    }

    /// Rebuild an application state. Id sequences are derived from the data.
    pub fn into_state(self) -> AppState {
        let mut state = AppState {
            settings: self.settings,
            catalog: self.action_types,
            logged_actions: self.logged_actions,
            badges: self.badges,
            workout_progress: self.workout_progress,
            custom_workouts: self.custom_workouts,
            ..AppState::empty()
        };
        state.normalize_sequences();
        state
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and parse an import document.
    pub fn parse(text: &str) -> AppResult<Self> {
        let raw: Value = serde_json::from_str(text)
            .map_err(|e| AppError::Import(format!("not valid JSON: {e}")))?;

        let Some(obj) = raw.as_object() else {
            return Err(AppError::Import("document must be a JSON object".into()));
        };

        let missing: Vec<&str> = REQUIRED_SECTIONS
            .iter()
            .copied()
            .filter(|k| !obj.contains_key(*k))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Import(format!(
                "missing section(s): {}",
                missing.join(", ")
            )));
        }

        match obj.get("format_version").and_then(Value::as_u64) {
            Some(v) if v == u64::from(FORMAT_VERSION) => {}
            Some(v) => {
                return Err(AppError::Import(format!(
                    "unsupported format_version {v} (expected {FORMAT_VERSION})"
                )));
            }
            None => {
                return Err(AppError::Import(
                    "format_version must be a non-negative integer".into(),
                ));
            }
        }

        let doc: Self = serde_json::from_value(raw)
            .map_err(|e| AppError::Import(format!("malformed section: {e}")))?;
        doc.check_integrity()?;
        Ok(doc)
    }

    /// Reject content the tracker itself could never have produced.
    fn check_integrity(&self) -> AppResult<()> {
        let mut type_ids = HashSet::new();
        for t in self.action_types.iter() {
            if !type_ids.insert(t.id) {
                return Err(AppError::Import(format!("duplicate action type id #{}", t.id)));
            }
        }

        let mut entry_ids = HashSet::new();
        let mut pairs = HashSet::new();
        for a in &self.logged_actions {
            if !entry_ids.insert(a.id) {
                return Err(AppError::Import(format!("duplicate logged action id #{}", a.id)));
            }
            if !pairs.insert((a.action_type_id, a.date)) {
                return Err(AppError::Import(format!(
                    "action type #{} is logged more than once on {}",
                    a.action_type_id,
                    a.date_str()
                )));
            }
        }

        let mut quick = HashSet::new();
        for id in &self.settings.quick_actions {
            if !quick.insert(*id) {
                return Err(AppError::Import(format!("quick action #{id} is listed twice")));
            }
            if !type_ids.contains(id) {
                return Err(AppError::Import(format!(
                    "quick action #{id} refers to an unknown action type"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_object() {
        let err = ExportDocument::parse("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn names_missing_sections() {
        let err = ExportDocument::parse(r#"{"format_version": 1, "settings": {}}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("action_types"));
        assert!(msg.contains("custom_workouts"));
        assert!(!msg.contains("settings,"));
    }

    #[test]
    fn rejects_future_version() {
        let mut doc = serde_json::to_value(ExportDocument::from_state(&AppState::default())).unwrap();
        doc["format_version"] = Value::from(99);
        let err = ExportDocument::parse(&doc.to_string()).unwrap_err();
        assert!(err.to_string().contains("unsupported format_version 99"));
    }

    fn exported_with_one_entry() -> Value {
        let mut state = AppState::default();
        let t = state.catalog.positive[0].clone();
        let day = chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        state.logged_actions.push(LoggedAction::new(1, &t, day, None));
        serde_json::to_value(ExportDocument::from_state(&state)).unwrap()
    }

    #[test]
    fn rejects_same_type_twice_on_one_day() {
        let mut doc = exported_with_one_entry();
        let mut copy = doc["logged_actions"][0].clone();
        copy["id"] = Value::from(99);
        doc["logged_actions"].as_array_mut().unwrap().push(copy);

        let err = ExportDocument::parse(&doc.to_string()).unwrap_err();
        assert!(matches!(err, AppError::Import(_)));
        assert!(err.to_string().contains("logged more than once"));
    }

    #[test]
    fn rejects_duplicate_entry_ids() {
        let mut doc = exported_with_one_entry();
        let mut copy = doc["logged_actions"][0].clone();
        copy["date"] = Value::from("2025-05-02");
        doc["logged_actions"].as_array_mut().unwrap().push(copy);

        let err = ExportDocument::parse(&doc.to_string()).unwrap_err();
        assert!(err.to_string().contains("duplicate logged action id #1"));
    }

    #[test]
    fn rejects_bad_quick_actions() {
        let mut doc = exported_with_one_entry();
        doc["settings"]["quick_actions"] = serde_json::json!([4242]);
        let err = ExportDocument::parse(&doc.to_string()).unwrap_err();
        assert!(err.to_string().contains("unknown action type"));

        doc["settings"]["quick_actions"] = serde_json::json!([1, 1]);
        let err = ExportDocument::parse(&doc.to_string()).unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn sequences_follow_imported_ids() {
        let mut state = AppState::default();
        let t = state.catalog.positive[0].clone();
        state
            .logged_actions
            .push(LoggedAction::new(41, &t, Local::now().date_naive(), None));

        let json = ExportDocument::from_state(&state).to_json().unwrap();
        let back = ExportDocument::parse(&json).unwrap().into_state();
        assert_eq!(back.logged_actions.len(), 1);
        assert!(back.sequences.next_logged_action_id > 41);
        assert!(back.sequences.next_action_type_id > back.catalog.iter().map(|t| t.id).max().unwrap());
    }
}
