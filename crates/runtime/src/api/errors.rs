//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the resolver core, the seed ledger and repositories
//! so clients can bubble them up with consistent context.
use hits_core::{CoreError, ErrorSeverity, HitsError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Hits(#[from] HitsError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("seed ledger lock was poisoned")]
    LockPoisoned,
}

impl CoreError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Hits(err) => err.severity(),
            Self::Repository(err) => err.severity(),
            Self::LockPoisoned => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Hits(err) => err.error_code(),
            Self::Repository(err) => err.error_code(),
            Self::LockPoisoned => "RUNTIME_LOCK_POISONED",
        }
    }
}
