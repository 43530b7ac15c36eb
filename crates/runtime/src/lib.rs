//! Settlement runtime for deterministic hit-value resolution.
//!
//! This crate hosts the seed map of every game behind a lock so concurrent
//! settlement triggers can share it, and persists it between runs.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the settlement runtime, its builder and configuration
//! - [`api`] exposes the request/result and error types clients handle
//! - [`ledger`] owns the shared seed map and serializes updates
//! - [`repository`] provides seed map persistence
pub mod api;
pub mod ledger;
pub mod repository;
pub mod runtime;

pub use api::{Result, RuntimeError, Settlement, SettlementRequest};
pub use ledger::SeedLedger;
pub use repository::{
    FileSeedRepository, InMemorySeedRepo, RepositoryError, SeedRepository,
};
pub use runtime::{OracleKind, Runtime, RuntimeBuilder, RuntimeConfig};
