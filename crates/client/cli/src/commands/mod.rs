//! Command implementations for the hits CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod args;
mod resolve;
mod roll;
mod seed;
mod values;

pub use resolve::Resolve;
pub use roll::Roll;
pub use seed::{ShowRoot, ShowSeed};
pub use values::Values;
