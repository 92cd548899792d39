//! Persistence collaborators.
//!
//! Every backend implements [`StateStore`]. The per-entity hooks default to
//! rewriting the whole state, which is what a blob store does anyway; row
//! oriented backends override them with targeted writes.

pub mod local;
pub mod memory;

use crate::config::{Backend, Config};
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::{ActionType, AppState, LoggedAction};
use std::fmt::Display;

pub use local::LocalStore;
pub use memory::MemoryStore;

pub trait StateStore {
    /// Short backend label for messages and logs.
    fn name(&self) -> &'static str;

    /// Load the persisted state, or None when nothing has been stored yet.
    fn load_state(&mut self) -> AppResult<Option<AppState>>;

    fn save_state(&mut self, state: &AppState) -> AppResult<()>;

    fn insert_logged_action(&mut self, state: &AppState, _action: &LoggedAction) -> AppResult<()> {
        self.save_state(state)
    }

    fn delete_logged_action(&mut self, state: &AppState, _id: u64) -> AppResult<()> {
        self.save_state(state)
    }

    fn insert_action_type(&mut self, state: &AppState, _action_type: &ActionType) -> AppResult<()> {
        self.save_state(state)
    }

    fn upsert_settings(&mut self, state: &AppState) -> AppResult<()> {
        self.save_state(state)
    }

    fn save_badges(&mut self, state: &AppState) -> AppResult<()> {
        self.save_state(state)
    }
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn load_state(&mut self) -> AppResult<Option<AppState>> {
        (**self).load_state()
    }
    fn save_state(&mut self, state: &AppState) -> AppResult<()> {
        (**self).save_state(state)
    }
    fn insert_logged_action(&mut self, state: &AppState, action: &LoggedAction) -> AppResult<()> {
        (**self).insert_logged_action(state, action)
    }
    fn delete_logged_action(&mut self, state: &AppState, id: u64) -> AppResult<()> {
        (**self).delete_logged_action(state, id)
    }
    fn insert_action_type(&mut self, state: &AppState, action_type: &ActionType) -> AppResult<()> {
        (**self).insert_action_type(state, action_type)
    }
    fn upsert_settings(&mut self, state: &AppState) -> AppResult<()> {
        (**self).upsert_settings(state)
    }
    fn save_badges(&mut self, state: &AppState) -> AppResult<()> {
        (**self).save_badges(state)
    }
}

/// Wrap a backend failure as a persistence error.
pub(crate) fn persistence_err<E: Display>(context: &str, e: E) -> AppError {
    AppError::Persistence(format!("{context}: {e}"))
}

/// Open the store selected by the configuration.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn StateStore>> {
    match cfg.backend {
        Backend::Local => Ok(Box::new(LocalStore::in_dir(cfg.data_dir())?)),
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(
            &cfg.sqlite_file(),
            &cfg.user_id,
        )?)),
    }
}
