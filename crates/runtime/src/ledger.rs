//! Thread-safe seed ledger.
//!
//! The ledger owns the seed map for every game and is the only writer. All
//! updates take the write lock, so concurrent `update_seed` calls for one game
//! are serialized and the last write wins. Reads run under the read lock and
//! see a consistent snapshot.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use hits_core::{
    GameId, GameSeedState, HitResolver, HitTriple, ResolvedHitValues, ResolverConfig, RngOracle,
    Seed, SeedAccumulator, SeedStore, current_seed,
};

use crate::api::{Result, RuntimeError, Settlement, SettlementRequest};

/// Seed map shared by concurrent settlement callers.
pub struct SeedLedger {
    seeds: RwLock<GameSeedState>,
    rng: Box<dyn RngOracle>,
    resolver: ResolverConfig,
}

impl SeedLedger {
    /// Create an empty ledger.
    pub fn new(rng: Box<dyn RngOracle>, resolver: ResolverConfig) -> Self {
        Self::with_state(rng, resolver, GameSeedState::new())
    }

    /// Create a ledger starting from a restored seed map.
    pub fn with_state(
        rng: Box<dyn RngOracle>,
        resolver: ResolverConfig,
        seeds: GameSeedState,
    ) -> Self {
        Self {
            seeds: RwLock::new(seeds),
            rng,
            resolver,
        }
    }

    pub fn resolver_config(&self) -> &ResolverConfig {
        &self.resolver
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, GameSeedState>> {
        self.seeds.read().map_err(|_| RuntimeError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, GameSeedState>> {
        self.seeds.write().map_err(|_| RuntimeError::LockPoisoned)
    }

    fn resolver(&self) -> HitResolver<'_, dyn RngOracle> {
        HitResolver::new(self.rng.as_ref(), self.resolver.clone())
    }

    /// Fold `input` into the game's seed and return the new seed.
    pub fn update_seed(&self, game: GameId, input: u64) -> Result<Seed> {
        let mut seeds = self.write()?;
        let seed = SeedAccumulator::new(self.rng.as_ref()).update_seed(&mut *seeds, game, input);
        tracing::debug!("Updated seed of {} with input {} -> {}", game, input, seed);
        Ok(seed)
    }

    /// Current seed of a game, [`Seed::ZERO`] if never accumulated.
    pub fn current_seed(&self, game: GameId) -> Result<Seed> {
        Ok(current_seed(&*self.read()?, game))
    }

    /// Current seed of a game, `None` if never accumulated.
    pub fn seed_of(&self, game: GameId) -> Result<Option<Seed>> {
        Ok(self.read()?.load(game))
    }

    pub fn assign_low_values(&self, game: GameId, salt: u64) -> Result<HitTriple> {
        let seeds = self.read()?;
        Ok(self.resolver().assign_low_values(&*seeds, game, salt)?)
    }

    pub fn assign_high_values(&self, game: GameId, salt: u64) -> Result<HitTriple> {
        let seeds = self.read()?;
        Ok(self.resolver().assign_high_values(&*seeds, game, salt)?)
    }

    pub fn assign_slash_value(&self, game: GameId, salt: u64) -> Result<u64> {
        let seeds = self.read()?;
        Ok(self.resolver().assign_slash_value(&*seeds, game, salt)?)
    }

    pub fn finalize_hit_type_values(&self, game: GameId, salt: u64) -> Result<ResolvedHitValues> {
        let seeds = self.read()?;
        Ok(self
            .resolver()
            .finalize_hit_type_values(&*seeds, game, salt)?)
    }

    /// Update the seed and decompose it under one write lock.
    ///
    /// The returned values always derive from the seed this call produced,
    /// even when other callers settle the same game concurrently.
    pub fn settle(&self, request: &SettlementRequest) -> Result<Settlement> {
        let mut seeds = self.write()?;
        let seed = SeedAccumulator::new(self.rng.as_ref()).update_seed(
            &mut *seeds,
            request.game_id,
            request.input,
        );
        let values = self.resolver().resolve_seed(seed, request.salt)?;
        Ok(Settlement {
            game_id: request.game_id,
            seed,
            values,
        })
    }

    /// Settle against a copy of the seed map and commit it only if `save`
    /// accepts it.
    ///
    /// Runs under the write lock, so saves are serialized in settlement
    /// order. When `save` fails the ledger is left untouched and the error is
    /// returned; retrying the same request then yields the same seed.
    pub fn settle_with_save<F>(&self, request: &SettlementRequest, save: F) -> Result<Settlement>
    where
        F: FnOnce(&GameSeedState) -> Result<()>,
    {
        let mut seeds = self.write()?;
        let mut next = seeds.clone();
        let seed = SeedAccumulator::new(self.rng.as_ref()).update_seed(
            &mut next,
            request.game_id,
            request.input,
        );
        let values = self.resolver().resolve_seed(seed, request.salt)?;

        save(&next)?;
        *seeds = next;

        Ok(Settlement {
            game_id: request.game_id,
            seed,
            values,
        })
    }

    /// Hand the current seed map to `save` without releasing the lock.
    ///
    /// Holds the read lock, so no settlement commits while the map is saved.
    pub fn save_with<F>(&self, save: F) -> Result<()>
    where
        F: FnOnce(&GameSeedState) -> Result<()>,
    {
        let seeds = self.read()?;
        save(&*seeds)
    }

    /// Copy of the whole seed map.
    pub fn snapshot(&self) -> Result<GameSeedState> {
        Ok(self.read()?.clone())
    }

    /// Replace the whole seed map.
    pub fn restore(&self, state: GameSeedState) -> Result<()> {
        let mut seeds = self.write()?;
        tracing::debug!("Restoring ledger with {} seeds", state.len());
        *seeds = state;
        Ok(())
    }

    /// SHA-256 commitment over the current seed map.
    pub fn state_root(&self) -> Result<[u8; 32]> {
        Ok(self.read()?.state_root())
    }
}

#[cfg(test)]
mod tests {
    use hits_core::{HitKind, HitsError, PcgRng, SeedPolicy};

    use super::*;

    fn ledger(policy: SeedPolicy) -> SeedLedger {
        SeedLedger::new(
            Box::new(PcgRng),
            ResolverConfig::default().with_seed_policy(policy),
        )
    }

    #[test]
    fn settle_matches_separate_update_and_finalize() {
        let settled = ledger(SeedPolicy::ZeroDefault);
        let stepwise = ledger(SeedPolicy::ZeroDefault);

        let settlement = settled
            .settle(&SettlementRequest::new(GameId(95), 4390, 213))
            .unwrap();

        let seed = stepwise.update_seed(GameId(95), 4390).unwrap();
        let values = stepwise.finalize_hit_type_values(GameId(95), 213).unwrap();

        assert_eq!(settlement.seed, seed);
        assert_eq!(settlement.values, values);
        for kind in HitKind::BANDED {
            assert_eq!(HitKind::classify(values.value(kind)), Some(kind));
        }
    }

    #[test]
    fn strict_ledger_rejects_unseeded_games() {
        let ledger = ledger(SeedPolicy::Strict);
        let err = ledger.assign_slash_value(GameId(3), 1).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Hits(HitsError::SeedNotInitialized(GameId(3)))
        ));

        ledger.update_seed(GameId(3), 1).unwrap();
        assert!(ledger.assign_slash_value(GameId(3), 1).is_ok());
    }

    #[test]
    fn rejected_save_leaves_the_ledger_untouched() {
        let durable = ledger(SeedPolicy::ZeroDefault);
        let first = durable.update_seed(GameId(16), 35).unwrap();
        let request = SettlementRequest::new(GameId(16), 902, 799);

        let err = durable
            .settle_with_save(&request, |_| Err(RuntimeError::LockPoisoned))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::LockPoisoned));
        assert_eq!(durable.seed_of(GameId(16)).unwrap(), Some(first));

        let mut saved = None;
        let settlement = durable
            .settle_with_save(&request, |state| {
                saved = Some(state.clone());
                Ok(())
            })
            .unwrap();
        assert_eq!(saved.unwrap(), durable.snapshot().unwrap());
        assert_eq!(durable.seed_of(GameId(16)).unwrap(), Some(settlement.seed));

        let replay = ledger(SeedPolicy::ZeroDefault);
        replay.update_seed(GameId(16), 35).unwrap();
        assert_eq!(replay.settle(&request).unwrap(), settlement);
    }

    #[test]
    fn restore_replaces_the_seed_map() {
        let source = ledger(SeedPolicy::ZeroDefault);
        source.update_seed(GameId(2), 35).unwrap();
        source.update_seed(GameId(16), 902).unwrap();

        let target = ledger(SeedPolicy::ZeroDefault);
        target.update_seed(GameId(99), 1).unwrap();
        target.restore(source.snapshot().unwrap()).unwrap();

        assert_eq!(target.seed_of(GameId(99)).unwrap(), None);
        assert_eq!(target.current_seed(GameId(99)).unwrap(), Seed::ZERO);
        assert_eq!(target.state_root().unwrap(), source.state_root().unwrap());
    }
}
