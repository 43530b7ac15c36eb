//! Repository contracts for saving and loading the seed ledger.

use hits_core::GameSeedState;

use super::Result;

/// Repository for seed state persistence.
///
/// Holds one snapshot of the whole seed map. Saving replaces the previous
/// snapshot; there is no history.
pub trait SeedRepository: Send + Sync {
    /// Save a seed map snapshot, replacing any previous one.
    fn save(&self, state: &GameSeedState) -> Result<()>;

    /// Load the saved snapshot, `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<GameSeedState>>;

    /// Check if a snapshot exists.
    fn exists(&self) -> bool;

    /// Delete the saved snapshot.
    fn delete(&self) -> Result<()>;

    /// Load the saved snapshot or start from an empty seed map.
    fn load_or_default(&self) -> Result<GameSeedState> {
        Ok(self.load()?.unwrap_or_default())
    }
}
