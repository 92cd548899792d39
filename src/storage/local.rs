//! Local blob store: the whole state serialized as a single JSON document
//! stored under a fixed key inside the data directory.

use super::{StateStore, persistence_err};
use crate::errors::AppResult;
use crate::models::AppState;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STATE_KEY: &str = "rhabitlog-state";

pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Store at `<dir>/rhabitlog-state.json`, creating `dir` if needed.
    pub fn in_dir(dir: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&dir).map_err(|e| persistence_err("create data directory", e))?;
        Ok(Self {
            path: Self::file_in(&dir),
        })
    }

    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(format!("{STATE_KEY}.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for LocalStore {
    fn name(&self) -> &'static str {
        "local"
    }

    fn load_state(&mut self) -> AppResult<Option<AppState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| persistence_err("read state file", e))?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let mut state: AppState =
            serde_json::from_str(&content).map_err(|e| persistence_err("parse state file", e))?;
        state.normalize_sequences();

        debug!(path = %self.path.display(), actions = state.logged_actions.len(), "state loaded");
        Ok(Some(state))
    }

    fn save_state(&mut self, state: &AppState) -> AppResult<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| persistence_err("serialize state", e))?;

        // write-then-rename: readers only ever see a complete blob
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| persistence_err("write state file", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| persistence_err("replace state file", e))?;

        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}
