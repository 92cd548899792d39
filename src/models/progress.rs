use serde::Serialize;

/// Aggregates derived from the full action log. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub total_earned: i64,
    pub total_lost: i64,
    pub net_gain: i64,
    pub current_balance: i64,
    pub progress_percent: f64,
    pub current_streak: u32,
    pub today_action_count: usize,
}

/// Per calendar day totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub earned: i64,
    pub lost: i64,
    pub count: usize,
}

impl DayTotal {
    pub fn net(&self) -> i64 {
        self.earned - self.lost
    }
}
