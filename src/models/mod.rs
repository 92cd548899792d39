pub mod action_type;
pub mod badge;
pub mod logged_action;
pub mod progress;
pub mod settings;
pub mod state;
pub mod workout;

pub use action_type::{ActionSnapshot, ActionType, Category};
pub use badge::{Badge, BadgeKind};
pub use logged_action::LoggedAction;
pub use progress::{DayTotal, ProgressSnapshot};
pub use settings::{Theme, UserSettings};
pub use state::{AppState, Catalog, Sequences};
pub use workout::{CustomWorkouts, DayOfWeek, Exercise, Routine, RoutineSource, WorkoutProgress};
