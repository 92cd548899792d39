pub mod action_log;
pub mod backup;
pub mod badges;
pub mod catalog;
pub mod progress;
pub mod seed;
pub mod settings;
pub mod tracker;
pub mod workout;

pub use tracker::{Outcome, Tracker};
