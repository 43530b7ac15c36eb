//! Error taxonomy for hits-core.
//!
//! The core performs no I/O, so every error is a caller mistake rather than a
//! transient condition. Nothing here is retryable.
//!
//! # Design Principles
//!
//! - **Fail fast**: invalid ranges are rejected before any value is derived
//! - **Explicit policy**: `SeedNotInitialized` only exists under
//!   [`SeedPolicy::Strict`](crate::SeedPolicy::Strict)
//! - **Severity Classification**: errors are categorized for callers that log
//!   or count them

use crate::types::GameId;

/// Severity level of an error, used for categorization and handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition that may succeed on retry.
    ///
    /// Never raised by the core itself; storage layers built on it use this
    /// for I/O failures.
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: inverted range, unseeded game under strict policy
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for errors raised by this crate and the crates built on it.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by the range generator and value decomposer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitsError {
    /// `lo > hi` was passed to the range generator.
    #[error("invalid range: lower bound {lo} exceeds upper bound {hi}")]
    InvalidRange { lo: u64, hi: u64 },

    /// The game has no accumulated seed and the resolver runs with the
    /// strict seed policy.
    #[error("seed for {0} has not been initialized")]
    SeedNotInitialized(GameId),
}

impl CoreError for HitsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidRange { .. } | Self::SeedNotInitialized(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "HITS_INVALID_RANGE",
            Self::SeedNotInitialized(_) => "HITS_SEED_NOT_INITIALIZED",
        }
    }
}

pub type Result<T> = core::result::Result<T, HitsError>;
