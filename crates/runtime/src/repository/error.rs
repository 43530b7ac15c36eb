//! Error types raised by repository implementations.

use hits_core::{CoreError, ErrorSeverity};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("seed repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CoreError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Recoverable,
            Self::LockPoisoned | Self::Serialization(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPO_LOCK_POISONED",
            Self::Io(_) => "REPO_IO",
            Self::Serialization(_) => "REPO_SERIALIZATION",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
