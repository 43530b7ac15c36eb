//! Deterministic hit-value resolution shared by settlement runtimes and tools.
//!
//! `hits-core` turns a per-game evolving seed into the seven values used to
//! resolve simultaneous fight actions: low and hard punch/kick/thunder in six
//! disjoint 100-wide bands, plus an unbanded slash value.
//!
//! The crate is organized in three stages:
//! - [`seed`] accumulates caller inputs into per-game seeds ([`SeedAccumulator`])
//! - [`rng`] maps `(seed, salt)` onto bounded integers ([`RngOracle`])
//! - [`hits`] decomposes a seed into [`ResolvedHitValues`] ([`HitResolver`])
//!
//! All APIs are pure over explicit state: seed storage is passed in through
//! [`SeedStore`] and nothing reads clocks, globals or the network.
//!
//! Builds without `std` (disable default features); the seed map then uses
//! `alloc`.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod config;
pub mod error;
pub mod hits;
pub mod rng;
pub mod seed;
pub mod types;

pub use config::{ResolverConfig, SeedPolicy};
pub use error::{CoreError, ErrorSeverity, HitsError, Result};
pub use hits::{HitKind, HitResolver, HitTriple, ResolvedHitValues};
pub use rng::{PcgRng, RngOracle, Sha256Rng, mix64};
pub use seed::{GameSeedState, SeedAccumulator, SeedStore, current_seed};
pub use types::{GameId, Seed};
