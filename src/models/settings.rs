use serde::{Deserialize, Serialize};

pub const DEFAULT_GOAL: i64 = 20_000;
pub const DEFAULT_REMINDER: &str = "20:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// The "debt" to erase: net gain needed to reach 100%.
    #[serde(default = "default_goal")]
    pub goal: i64,
    #[serde(default = "default_reminder")]
    pub reminder_time: String,
    #[serde(default)]
    pub theme: Theme,
    /// Ordered, duplicate-free list of action type ids.
    #[serde(default)]
    pub quick_actions: Vec<u32>,
}

fn default_goal() -> i64 {
    DEFAULT_GOAL
}
fn default_reminder() -> String {
    DEFAULT_REMINDER.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            goal: default_goal(),
            reminder_time: default_reminder(),
            theme: Theme::default(),
            quick_actions: Vec::new(),
        }
    }
}
