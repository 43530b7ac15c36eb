//! Settlement request and result types exchanged with settlement triggers.
use serde::{Deserialize, Serialize};

use hits_core::{GameId, ResolvedHitValues, Seed};

/// One resolution event: fold `input` into the game's seed, then decompose
/// the new seed with `salt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRequest {
    pub game_id: GameId,
    pub input: u64,
    pub salt: u64,
}

impl SettlementRequest {
    pub const fn new(game_id: GameId, input: u64, salt: u64) -> Self {
        Self {
            game_id,
            input,
            salt,
        }
    }
}

/// Outcome of a settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub game_id: GameId,
    /// Seed produced by this settlement's update; `values` derive from it.
    pub seed: Seed,
    pub values: ResolvedHitValues,
}
