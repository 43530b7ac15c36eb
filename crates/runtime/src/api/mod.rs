//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the ledger and repositories can stay focused on state handling.

pub mod errors;
pub mod settlement;

pub use errors::{Result, RuntimeError};
pub use settlement::{Settlement, SettlementRequest};
