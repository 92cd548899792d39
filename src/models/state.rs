use super::action_type::{ActionType, Category};
use super::badge::Badge;
use super::logged_action::LoggedAction;
use super::settings::UserSettings;
use super::workout::{CustomWorkouts, WorkoutProgress};
use crate::core::seed;
use serde::{Deserialize, Serialize};

/// Action types split by sign, as the catalog is presented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub positive: Vec<ActionType>,
    #[serde(default)]
    pub negative: Vec<ActionType>,
}

impl Catalog {
    pub fn bucket(&self, category: Category) -> &Vec<ActionType> {
        match category {
            Category::Positive => &self.positive,
            Category::Negative => &self.negative,
        }
    }

    pub fn bucket_mut(&mut self, category: Category) -> &mut Vec<ActionType> {
        match category {
            Category::Positive => &mut self.positive,
            Category::Negative => &mut self.negative,
        }
    }

    /// Positives first, then negatives, each in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionType> {
        self.positive.iter().chain(self.negative.iter())
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Id counters. Ids are never reused, even after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences {
    pub next_action_type_id: u32,
    pub next_logged_action_id: u64,
}

impl Default for Sequences {
    fn default() -> Self {
        Self {
            next_action_type_id: 1,
            next_logged_action_id: 1,
        }
    }
}

/// The whole application state: the single value every component works on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub logged_actions: Vec<LoggedAction>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub workout_progress: WorkoutProgress,
    #[serde(default)]
    pub custom_workouts: CustomWorkouts,
    #[serde(default)]
    pub sequences: Sequences,
}

impl AppState {
    /// State with no data at all (no built-ins). Mostly useful to storage code.
    pub fn empty() -> Self {
        Self {
            settings: UserSettings::default(),
            catalog: Catalog::default(),
            logged_actions: Vec::new(),
            badges: Vec::new(),
            workout_progress: WorkoutProgress::new(),
            custom_workouts: CustomWorkouts::new(),
            sequences: Sequences::default(),
        }
    }

    /// Bring counters in line with the data, e.g. after an import or a load
    /// from a store that does not persist them.
    pub fn normalize_sequences(&mut self) {
        let max_type = self.catalog.iter().map(|t| t.id).max().unwrap_or(0);
        let max_logged = self.logged_actions.iter().map(|a| a.id).max().unwrap_or(0);

        self.sequences.next_action_type_id = self.sequences.next_action_type_id.max(max_type + 1);
        self.sequences.next_logged_action_id =
            self.sequences.next_logged_action_id.max(max_logged + 1);
    }
}

impl Default for AppState {
    /// Seeded state: built-in action types and badge definitions.
    fn default() -> Self {
        let mut state = Self::empty();
        seed::apply(&mut state);
        state
    }
}
