//! Application state container.
//!
//! [`Tracker`] owns the single [`AppState`] and the persistence collaborator.
//! Every mutation goes through one of its methods, which apply the change,
//! recompute progress and badges, and persist before returning. When the
//! store fails the in-memory change is kept and the error is returned.

use crate::core::action_log::LogLogic;
use crate::core::badges::{BadgeContext, BadgeEngine};
use crate::core::catalog::CatalogLogic;
use crate::core::progress::ProgressEngine;
use crate::core::seed;
use crate::core::settings::SettingsLogic;
use crate::core::workout::WorkoutLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{
    ActionType, AppState, Badge, Category, DayOfWeek, LoggedAction, ProgressSnapshot, Routine,
    Theme,
};
use crate::storage::StateStore;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Result of a mutation together with the badges it unlocked.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub value: T,
    pub newly_earned: Vec<Badge>,
}

impl<T> Outcome<T> {
    fn new(value: T, newly_earned: Vec<Badge>) -> Self {
        Self {
            value,
            newly_earned,
        }
    }
}

pub struct Tracker<S: StateStore> {
    state: AppState,
    store: S,
    today: NaiveDate,
    progress: ProgressSnapshot,
}

impl<S: StateStore> Tracker<S> {
    /// Load the persisted state, or seed and store the default one.
    pub fn open(mut store: S, today: NaiveDate) -> AppResult<Self> {
        let (state, fresh, topped_up) = match store.load_state()? {
            Some(mut state) => {
                let added = seed::ensure_badges(&mut state);
                (state, false, added > 0)
            }
            None => (AppState::default(), true, false),
        };

        let mut tracker = Self {
            state,
            store,
            today,
            progress: ProgressSnapshot::default(),
        };

        // Badges unlocked by data written elsewhere (e.g. an older version)
        let caught_up = tracker.recompute();

        if fresh {
            info!(store = tracker.store.name(), "no saved state, seeding defaults");
            tracker.store.save_state(&tracker.state)?;
        } else if topped_up {
            info!(store = tracker.store.name(), "missing badge definitions restored");
            tracker.store.save_state(&tracker.state)?;
        } else if !caught_up.is_empty() {
            tracker.store.save_badges(&tracker.state)?;
        }

        Ok(tracker)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn progress(&self) -> &ProgressSnapshot {
        &self.progress
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Recompute progress and badges. Returns the badges that flipped to earned.
    fn recompute(&mut self) -> Vec<Badge> {
        let goal = self.state.settings.goal;
        self.progress = ProgressEngine::compute(&self.state.logged_actions, goal, self.today);

        let ctx = BadgeContext::new(&self.state.logged_actions, &self.progress, goal);
        let newly = BadgeEngine::evaluate(&mut self.state.badges, &ctx);

        debug!(
            net = self.progress.net_gain,
            streak = self.progress.current_streak,
            unlocked = newly.len(),
            "progress recomputed"
        );
        newly
    }

    /// Run a store write, then the badge write when badges flipped.
    fn persist<F>(&mut self, newly_earned: &[Badge], write: F) -> AppResult<()>
    where
        F: FnOnce(&mut S, &AppState) -> AppResult<()>,
    {
        let mut result = write(&mut self.store, &self.state);
        if result.is_ok() && !newly_earned.is_empty() {
            result = self.store.save_badges(&self.state);
        }

        result.map_err(|e| {
            warn!(store = self.store.name(), error = %e, "state change not persisted");
            match e {
                AppError::Persistence(_) => e,
                other => AppError::Persistence(other.to_string()),
            }
        })
    }

    // ---------------------------
    // Action catalog
    // ---------------------------

    pub fn create_action_type(
        &mut self,
        category: Category,
        name: &str,
        raw_value: i64,
    ) -> AppResult<ActionType> {
        let created = CatalogLogic::create(&mut self.state, category, name, raw_value)?;
        self.recompute();
        self.persist(&[], |store, state| store.insert_action_type(state, &created))?;
        Ok(created)
    }

    pub fn edit_action_type(
        &mut self,
        id: u32,
        new_name: &str,
        new_raw_value: i64,
    ) -> AppResult<ActionType> {
        let edited = CatalogLogic::edit(&mut self.state, id, new_name, new_raw_value)?;
        self.recompute();
        self.persist(&[], |store, state| store.save_state(state))?;
        Ok(edited)
    }

    pub fn delete_action_type(&mut self, id: u32) -> AppResult<ActionType> {
        let removed = CatalogLogic::delete(&mut self.state, id)?;
        self.recompute();
        self.persist(&[], |store, state| store.save_state(state))?;
        Ok(removed)
    }

    // ---------------------------
    // Action log
    // ---------------------------

    pub fn can_log(&self, action_type_id: u32, date: NaiveDate) -> bool {
        LogLogic::can_log(&self.state, action_type_id, date)
    }

    pub fn log_action(
        &mut self,
        action_type_id: u32,
        date: NaiveDate,
        note: Option<&str>,
    ) -> AppResult<Outcome<LoggedAction>> {
        let entry = LogLogic::log(&mut self.state, action_type_id, date, note)?;
        let newly = self.recompute();
        self.persist(&newly, |store, state| store.insert_logged_action(state, &entry))?;
        Ok(Outcome::new(entry, newly))
    }

    /// Remove a logged action. Unknown ids are a no-op and persist nothing.
    /// Removing a negative entry raises the net gain and can unlock badges.
    pub fn delete_logged_action(&mut self, id: u64) -> AppResult<Outcome<Option<LoggedAction>>> {
        let Some(removed) = LogLogic::delete(&mut self.state, id) else {
            return Ok(Outcome::new(None, Vec::new()));
        };
        let newly = self.recompute();
        self.persist(&newly, |store, state| store.delete_logged_action(state, id))?;
        Ok(Outcome::new(Some(removed), newly))
    }

    /// Log a quick action for today. The type must be on the quick-access list.
    pub fn quick_log(
        &mut self,
        action_type_id: u32,
        note: Option<&str>,
    ) -> AppResult<Outcome<LoggedAction>> {
        if !self.state.settings.quick_actions.contains(&action_type_id) {
            return Err(AppError::NotFound(format!(
                "action type #{action_type_id} is not a quick action"
            )));
        }
        self.log_action(action_type_id, self.today, note)
    }

    // ---------------------------
    // Settings
    // ---------------------------

    /// A new goal moves the savings ratio, so badges are re-evaluated.
    pub fn set_goal(&mut self, goal: i64) -> AppResult<Outcome<()>> {
        SettingsLogic::set_goal(&mut self.state, goal)?;
        let newly = self.recompute();
        self.persist(&newly, |store, state| store.upsert_settings(state))?;
        Ok(Outcome::new((), newly))
    }

    // Reminder, theme, quick list and workouts feed no derived value, so the
    // methods below persist without a recompute.

    pub fn set_reminder(&mut self, time: &str) -> AppResult<()> {
        SettingsLogic::set_reminder(&mut self.state, time)?;
        self.persist(&[], |store, state| store.upsert_settings(state))
    }

    pub fn set_theme(&mut self, theme: Theme) -> AppResult<()> {
        SettingsLogic::set_theme(&mut self.state, theme);
        self.persist(&[], |store, state| store.upsert_settings(state))
    }

    pub fn add_quick_action(&mut self, action_type_id: u32) -> AppResult<()> {
        SettingsLogic::add_quick_action(&mut self.state, action_type_id)?;
        self.persist(&[], |store, state| store.upsert_settings(state))
    }

    pub fn remove_quick_action(&mut self, action_type_id: u32) -> AppResult<()> {
        SettingsLogic::remove_quick_action(&mut self.state, action_type_id)?;
        self.persist(&[], |store, state| store.upsert_settings(state))
    }

    // ---------------------------
    // Workouts
    // ---------------------------

    pub fn set_custom_workout(&mut self, day: DayOfWeek, routine: Routine) -> AppResult<()> {
        WorkoutLogic::set_custom(&mut self.state, day, routine)?;
        self.persist(&[], |store, state| store.save_state(state))
    }

    pub fn delete_custom_workout(&mut self, day: DayOfWeek) -> AppResult<Routine> {
        let removed = WorkoutLogic::delete_custom(&mut self.state, day)?;
        self.persist(&[], |store, state| store.save_state(state))?;
        Ok(removed)
    }

    /// Flip one exercise's completion flag. Returns the new flag.
    pub fn toggle_exercise(&mut self, day: DayOfWeek, index: usize) -> AppResult<bool> {
        let done = WorkoutLogic::toggle(&mut self.state, day, index)?;
        self.persist(&[], |store, state| store.save_state(state))?;
        Ok(done)
    }

    pub fn reset_workout_day(&mut self, day: DayOfWeek) -> AppResult<()> {
        WorkoutLogic::reset_day(&mut self.state, day);
        self.persist(&[], |store, state| store.save_state(state))
    }

    // ---------------------------
    // Import
    // ---------------------------

    /// Replace the whole state (import). Badges are re-evaluated against the
    /// imported log so earned flags never lag behind the data.
    pub fn replace_state(&mut self, mut state: AppState) -> AppResult<Outcome<()>> {
        state.normalize_sequences();
        seed::ensure_badges(&mut state);
        self.state = state;
        let newly = self.recompute();
        self.persist(&[], |store, state| store.save_state(state))?;

        info!(
            actions = self.state.logged_actions.len(),
            types = self.state.catalog.len(),
            "state replaced"
        );
        Ok(Outcome::new((), newly))
    }
}
