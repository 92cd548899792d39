use super::StateStore;
use crate::errors::{AppError, AppResult};
use crate::models::AppState;

/// In-process store. Keeps the last saved state; can be told to fail writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub saved: Option<AppState>,
    pub saves: usize,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl StateStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load_state(&mut self) -> AppResult<Option<AppState>> {
        Ok(self.saved.clone())
    }

    fn save_state(&mut self, state: &AppState) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Persistence("memory store is read-only".into()));
        }
        self.saved = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}
