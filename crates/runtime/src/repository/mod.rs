//! Repository layer for the seed ledger.
//!
//! Repositories persist the seed map between runs:
//! - [`InMemorySeedRepo`] for tests and local runs
//! - [`FileSeedRepository`] for a bincode snapshot on disk

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSeedRepository;
pub use memory::InMemorySeedRepo;
pub use traits::SeedRepository;
