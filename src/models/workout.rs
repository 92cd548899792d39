use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weekday key of workout state. Ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }

    /// Accepts full names and three-letter codes, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|d| d.as_str() == c || (c.len() == 3 && d.as_str().starts_with(&c)))
    }

    pub fn of_date(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(w: Weekday) -> Self {
        match w {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: String, // "12", "8-10", "30s"
    #[serde(default)]
    pub benefit: String,
}

impl Exercise {
    pub fn new(name: &str, sets: u32, reps: &str, benefit: &str) -> Self {
        Self {
            name: name.to_string(),
            sets,
            reps: reps.to_string(),
            benefit: benefit.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub exercises: Vec<Exercise>,
}

/// Where the active routine of a weekday comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineSource {
    None,
    BuiltIn,
    Custom,
}

/// weekday → exercise index → completed
pub type WorkoutProgress = BTreeMap<DayOfWeek, BTreeMap<usize, bool>>;

/// weekday → user-authored routine overriding the built-in one
pub type CustomWorkouts = BTreeMap<DayOfWeek, Routine>;
