use serde::{Deserialize, Serialize};

/// What a badge requirement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    /// Total number of logged actions.
    Milestone,
    /// Current streak in days.
    Streak,
    /// Fraction of the goal covered by net gain (e.g. 0.25).
    Savings,
    /// Number of logged actions with a positive value.
    Actions,
}

impl BadgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::Milestone => "milestone",
            BadgeKind::Streak => "streak",
            BadgeKind::Savings => "savings",
            BadgeKind::Actions => "actions",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "milestone" => Some(BadgeKind::Milestone),
            "streak" => Some(BadgeKind::Streak),
            "savings" => Some(BadgeKind::Savings),
            "actions" => Some(BadgeKind::Actions),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: BadgeKind,
    pub requirement: f64,
    /// Once true it stays true.
    #[serde(default)]
    pub earned: bool,
}

impl Badge {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        kind: BadgeKind,
        requirement: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            kind,
            requirement,
            earned: false,
        }
    }

    /// Human readable requirement ("7 days", "25%", ...).
    pub fn requirement_label(&self) -> String {
        match self.kind {
            BadgeKind::Milestone => format!("{} actions logged", self.requirement),
            BadgeKind::Streak => format!("{}-day streak", self.requirement),
            BadgeKind::Savings => format!("{:.0}% of goal", self.requirement * 100.0),
            BadgeKind::Actions => format!("{} positive actions", self.requirement),
        }
    }
}
