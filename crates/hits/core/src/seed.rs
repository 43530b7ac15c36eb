//! Seed accumulation and the per-game seed map.
//!
//! A game's seed evolves by folding caller-supplied inputs into the previous
//! seed through [`RngOracle::combine`]. The map itself is plain data behind
//! the [`SeedStore`] trait so callers decide where it lives (owned value,
//! behind a lock, restored from disk).

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::rng::RngOracle;
use crate::types::{GameId, Seed};

/// Storage seam for per-game seeds.
pub trait SeedStore {
    /// Load the current seed of a game, or `None` if never accumulated.
    fn load(&self, game: GameId) -> Option<Seed>;

    /// Store a seed, overwriting any previous value.
    fn store(&mut self, game: GameId, seed: Seed);
}

/// Mapping from game identifier to current seed.
///
/// Entries are created on first accumulation, overwritten on every later
/// one and never removed. Ordered so iteration and encoding are stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSeedState {
    seeds: BTreeMap<GameId, Seed>,
}

impl GameSeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GameId, Seed)> + '_ {
        self.seeds.iter().map(|(game, seed)| (*game, *seed))
    }

    /// SHA-256 commitment over the seed map.
    ///
    /// Each entry contributes `game || seed` as little-endian `u64`s, in game
    /// order. Two states have the same root iff they hold the same seeds for
    /// the same games, independent of insertion order.
    pub fn state_root(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for (game, seed) in &self.seeds {
            hasher.update(game.0.to_le_bytes());
            hasher.update(seed.0.to_le_bytes());
        }
        hasher.finalize().into()
    }
}

impl SeedStore for GameSeedState {
    fn load(&self, game: GameId) -> Option<Seed> {
        self.seeds.get(&game).copied()
    }

    fn store(&mut self, game: GameId, seed: Seed) {
        self.seeds.insert(game, seed);
    }
}

impl FromIterator<(GameId, Seed)> for GameSeedState {
    fn from_iter<I: IntoIterator<Item = (GameId, Seed)>>(iter: I) -> Self {
        Self {
            seeds: iter.into_iter().collect(),
        }
    }
}

/// Folds inputs into per-game seeds.
#[derive(Clone, Copy, Debug)]
pub struct SeedAccumulator<'a, R: RngOracle + ?Sized> {
    rng: &'a R,
}

impl<'a, R: RngOracle + ?Sized> SeedAccumulator<'a, R> {
    pub fn new(rng: &'a R) -> Self {
        Self { rng }
    }

    /// Combine `input` with the game's previous seed (or [`Seed::ZERO`]),
    /// store the result and return it.
    pub fn update_seed<S: SeedStore + ?Sized>(
        &self,
        store: &mut S,
        game: GameId,
        input: u64,
    ) -> Seed {
        let previous = store.load(game).unwrap_or(Seed::ZERO);
        let next = self.rng.combine(previous, input);
        store.store(game, next);
        next
    }
}

/// Current seed of a game, [`Seed::ZERO`] if never accumulated.
pub fn current_seed<S: SeedStore + ?Sized>(store: &S, game: GameId) -> Seed {
    store.load(game).unwrap_or(Seed::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgRng, Sha256Rng};

    #[test]
    fn unset_game_reads_as_zero() {
        let state = GameSeedState::new();
        assert_eq!(current_seed(&state, GameId(1)), Seed::ZERO);
        assert_eq!(state.load(GameId(1)), None);
    }

    #[test]
    fn update_overwrites_previous_seed() {
        let mut state = GameSeedState::new();
        let acc = SeedAccumulator::new(&PcgRng);

        let first = acc.update_seed(&mut state, GameId(2), 35);
        assert_eq!(current_seed(&state, GameId(2)), first);

        let second = acc.update_seed(&mut state, GameId(2), 35);
        assert_ne!(first, second);
        assert_eq!(current_seed(&state, GameId(2)), second);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn games_evolve_independently() {
        let mut state = GameSeedState::new();
        let acc = SeedAccumulator::new(&Sha256Rng);

        let a = acc.update_seed(&mut state, GameId(2), 35);
        let b = acc.update_seed(&mut state, GameId(16), 902);
        assert_ne!(a, b);
        assert_eq!(current_seed(&state, GameId(2)), a);
        assert_eq!(current_seed(&state, GameId(16)), b);
    }

    #[test]
    fn chained_updates_differ_from_single_updates() {
        let acc = SeedAccumulator::new(&PcgRng);
        for a in 0..300u64 {
            for b in [1u64, 7, 902, 4390, u64::MAX] {
                let mut chained = GameSeedState::new();
                acc.update_seed(&mut chained, GameId(0), a);
                let both = acc.update_seed(&mut chained, GameId(0), b);

                let mut only_a = GameSeedState::new();
                let single_a = acc.update_seed(&mut only_a, GameId(0), a);
                let mut only_b = GameSeedState::new();
                let single_b = acc.update_seed(&mut only_b, GameId(0), b);

                assert_ne!(both, single_a, "collision for inputs ({a}, {b})");
                assert_ne!(both, single_b, "collision for inputs ({a}, {b})");
            }
        }
    }

    #[test]
    fn state_root_ignores_insertion_order() {
        let forward: GameSeedState = [(GameId(1), Seed(10)), (GameId(2), Seed(20))]
            .into_iter()
            .collect();
        let mut backward = GameSeedState::new();
        backward.store(GameId(2), Seed(20));
        backward.store(GameId(1), Seed(10));

        assert_eq!(forward.state_root(), backward.state_root());

        backward.store(GameId(1), Seed(11));
        assert_ne!(forward.state_root(), backward.state_root());
    }

    #[test]
    fn empty_state_root_is_empty_digest() {
        assert_eq!(
            hex::encode(GameSeedState::new().state_root()),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
