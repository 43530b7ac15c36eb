//! In-memory SeedRepository implementation for tests and local runs.

use std::sync::RwLock;

use hits_core::GameSeedState;

use crate::repository::{RepositoryError, Result, SeedRepository};

/// In-memory implementation of SeedRepository.
pub struct InMemorySeedRepo {
    snapshot: RwLock<Option<GameSeedState>>,
}

impl InMemorySeedRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
        }
    }

    /// Create with an already saved snapshot.
    pub fn with_state(state: GameSeedState) -> Self {
        Self {
            snapshot: RwLock::new(Some(state)),
        }
    }
}

impl Default for InMemorySeedRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedRepository for InMemorySeedRepo {
    fn save(&self, state: &GameSeedState) -> Result<()> {
        let mut snapshot = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *snapshot = Some(state.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<GameSeedState>> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(snapshot.clone())
    }

    fn exists(&self) -> bool {
        self.snapshot
            .read()
            .map(|snapshot| snapshot.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut snapshot = self
            .snapshot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *snapshot = None;
        Ok(())
    }
}
