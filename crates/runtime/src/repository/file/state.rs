//! File-based SeedRepository implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use hits_core::GameSeedState;

use crate::repository::{RepositoryError, Result, SeedRepository};

/// File-based implementation of SeedRepository.
///
/// # File Format
///
/// The seed map is stored as `seeds.bin` in bincode format. Each save writes
/// its own uniquely named temp file in the same directory and renames it over
/// the previous snapshot, so a crash mid-save leaves the old snapshot intact
/// and concurrent saves never share a temp file.
pub struct FileSeedRepository {
    base_dir: PathBuf,
}

impl FileSeedRepository {
    pub const FILE_NAME: &'static str = "seeds.bin";

    /// Create a new file-based seed repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.base_dir.join(Self::FILE_NAME)
    }
}

impl SeedRepository for FileSeedRepository {
    fn save(&self, state: &GameSeedState) -> Result<()> {
        let path = self.path();

        let bytes =
            bincode::serialize(state).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let mut temp = NamedTempFile::new_in(&self.base_dir).map_err(RepositoryError::Io)?;
        temp.write_all(&bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        temp.persist(&path).map_err(|e| RepositoryError::Io(e.error))?;

        tracing::debug!("Saved {} seeds to {}", state.len(), path.display());

        Ok(())
    }

    fn load(&self) -> Result<Option<GameSeedState>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state: GameSeedState = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded {} seeds from {}", state.len(), path.display());

        Ok(Some(state))
    }

    fn exists(&self) -> bool {
        self.path().exists()
    }

    fn delete(&self) -> Result<()> {
        let path = self.path();

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted seed snapshot {}", path.display());
        }

        Ok(())
    }
}
