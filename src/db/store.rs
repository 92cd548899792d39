//! SQLite-backed store with per-entity CRUD, scoped to one user id.

use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{ActionType, AppState, Catalog, Category, LoggedAction};
use crate::storage::{StateStore, persistence_err};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct SqliteStore {
    pool: DbPool,
    user_id: String,
    path: Option<PathBuf>,
}

impl SqliteStore {
    pub fn open(path: &Path, user_id: &str) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| persistence_err("create database directory", e))?;
        }
        let pool = DbPool::new(path).map_err(|e| persistence_err("open database", e))?;
        run_pending_migrations(&pool.conn).map_err(|e| persistence_err("migrate database", e))?;

        Ok(Self {
            pool,
            user_id: user_id.to_string(),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn in_memory(user_id: &str) -> AppResult<Self> {
        let pool = DbPool::in_memory().map_err(|e| persistence_err("open database", e))?;
        run_pending_migrations(&pool.conn).map_err(|e| persistence_err("migrate database", e))?;
        Ok(Self {
            pool,
            user_id: user_id.to_string(),
            path: None,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    fn position_of(state: &AppState, action_type: &ActionType) -> usize {
        state
            .catalog
            .iter()
            .position(|t| t.id == action_type.id)
            .unwrap_or_else(|| state.catalog.len())
    }
}

impl StateStore for SqliteStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn load_state(&mut self) -> AppResult<Option<AppState>> {
        let conn = &self.pool.conn;
        let user = self.user_id.as_str();

        let Some((settings, sequences)) =
            queries::load_settings(conn, user).map_err(|e| persistence_err("load settings", e))?
        else {
            return Ok(None);
        };

        let mut catalog = Catalog::default();
        for t in queries::load_action_types(conn, user)
            .map_err(|e| persistence_err("load action types", e))?
        {
            let bucket = match t.category {
                Category::Positive => &mut catalog.positive,
                Category::Negative => &mut catalog.negative,
            };
            bucket.push(t);
        }

        let mut state = AppState {
            settings,
            catalog,
            logged_actions: queries::load_logged_actions(conn, user)
                .map_err(|e| persistence_err("load logged actions", e))?,
            badges: queries::load_badges(conn, user)
                .map_err(|e| persistence_err("load badges", e))?,
            workout_progress: queries::load_workout_progress(conn, user)
                .map_err(|e| persistence_err("load workout progress", e))?,
            custom_workouts: queries::load_custom_workouts(conn, user)
                .map_err(|e| persistence_err("load custom workouts", e))?,
            sequences,
        };
        state.normalize_sequences();

        debug!(user, actions = state.logged_actions.len(), "state loaded from sqlite");
        Ok(Some(state))
    }

    /// Full resync inside one transaction.
    fn save_state(&mut self, state: &AppState) -> AppResult<()> {
        let user = self.user_id.clone();

        self.pool
            .with_conn(|conn| {
                let tx = conn.transaction()?;

                queries::clear_user(&tx, &user)?;
                queries::upsert_settings(&tx, &user, &state.settings, &state.sequences)?;

                for (pos, t) in state.catalog.iter().enumerate() {
                    queries::insert_action_type(&tx, &user, t, pos)?;
                }
                for a in &state.logged_actions {
                    queries::insert_logged_action(&tx, &user, a)?;
                }
                for (pos, b) in state.badges.iter().enumerate() {
                    queries::insert_badge(&tx, &user, b, pos)?;
                }
                queries::insert_workout_progress(&tx, &user, &state.workout_progress)?;
                for (day, routine) in &state.custom_workouts {
                    queries::insert_custom_workout(&tx, &user, *day, routine)?;
                }

                tx.commit()
            })
            .map_err(|e| persistence_err("save state", e))?;

        debug!(user = %self.user_id, "state synced to sqlite");
        Ok(())
    }

    fn insert_logged_action(&mut self, state: &AppState, action: &LoggedAction) -> AppResult<()> {
        let user = self.user_id.clone();
        self.pool
            .with_conn(|conn| {
                let tx = conn.transaction()?;
                queries::insert_logged_action(&tx, &user, action)?;
                queries::upsert_settings(&tx, &user, &state.settings, &state.sequences)?;
                tx.commit()
            })
            .map_err(|e| persistence_err("insert logged action", e))
    }

    fn delete_logged_action(&mut self, _state: &AppState, id: u64) -> AppResult<()> {
        queries::delete_logged_action(&self.pool.conn, &self.user_id, id)
            .map_err(|e| persistence_err("delete logged action", e))?;
        Ok(())
    }

    fn insert_action_type(&mut self, state: &AppState, action_type: &ActionType) -> AppResult<()> {
        let user = self.user_id.clone();
        let pos = Self::position_of(state, action_type);
        self.pool
            .with_conn(|conn| {
                let tx = conn.transaction()?;
                queries::insert_action_type(&tx, &user, action_type, pos)?;
                queries::upsert_settings(&tx, &user, &state.settings, &state.sequences)?;
                tx.commit()
            })
            .map_err(|e| persistence_err("insert action type", e))
    }

    fn upsert_settings(&mut self, state: &AppState) -> AppResult<()> {
        queries::upsert_settings(
            &self.pool.conn,
            &self.user_id,
            &state.settings,
            &state.sequences,
        )
        .map_err(|e| persistence_err("upsert settings", e))
    }

    fn save_badges(&mut self, state: &AppState) -> AppResult<()> {
        for b in &state.badges {
            queries::update_badge_earned(&self.pool.conn, &self.user_id, b)
                .map_err(|e| persistence_err("update badge", e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_database_loads_nothing() {
        let mut store = SqliteStore::in_memory("local").unwrap();
        assert!(store.load_state().unwrap().is_none());
    }

    #[test]
    fn row_hooks_match_full_sync() {
        let mut store = SqliteStore::in_memory("local").unwrap();
        let mut state = AppState::default();
        store.save_state(&state).unwrap();

        let t = state.catalog.positive[0].clone();
        let day = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let entry = LoggedAction::new(state.sequences.next_logged_action_id, &t, day, Some("x"));
        state.sequences.next_logged_action_id += 1;
        state.logged_actions.push(entry.clone());
        store.insert_logged_action(&state, &entry).unwrap();

        state.settings.goal = 5000;
        store.upsert_settings(&state).unwrap();

        let loaded = store.load_state().unwrap().unwrap();
        assert_eq!(loaded.settings.goal, 5000);
        assert_eq!(loaded.logged_actions.len(), 1);
        assert_eq!(loaded.logged_actions[0].snapshot, entry.snapshot);
        assert_eq!(loaded.sequences, state.sequences);

        store.delete_logged_action(&state, entry.id).unwrap();
        assert!(store.load_state().unwrap().unwrap().logged_actions.is_empty());
    }
}
