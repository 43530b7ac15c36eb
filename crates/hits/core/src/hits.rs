//! Hit-value decomposition.
//!
//! A game's current seed is split into seven values, one per [`HitKind`].
//! The six punch/kick/thunder values land in disjoint 100-wide bands laid
//! out by [`ResolverConfig::band`]; the slash value is unbanded.
//!
//! Every slot draws from the range generator with its own derived salt, so
//! the decomposition of one `(game, salt)` pair never reuses a generator
//! input. Decomposition only reads the seed store.

use crate::config::{ResolverConfig, SeedPolicy};
use crate::error::{HitsError, Result};
use crate::rng::{RngOracle, mix64};
use crate::seed::SeedStore;
use crate::types::{GameId, Seed};

/// One of the seven resolved hit slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HitKind {
    LowPunch,
    LowKick,
    LowThunder,
    HardPunch,
    HardKick,
    HardThunder,
    Slash,
}

impl HitKind {
    pub const LOW_TIER: [Self; 3] = [Self::LowPunch, Self::LowKick, Self::LowThunder];
    pub const HARD_TIER: [Self; 3] = [Self::HardPunch, Self::HardKick, Self::HardThunder];

    /// Slots with a fixed band, in band order.
    pub const BANDED: [Self; ResolverConfig::BAND_COUNT] = [
        Self::LowPunch,
        Self::LowKick,
        Self::LowThunder,
        Self::HardPunch,
        Self::HardKick,
        Self::HardThunder,
    ];

    /// Position of this slot's band, `None` for slash.
    pub const fn band_index(self) -> Option<usize> {
        match self {
            Self::LowPunch => Some(0),
            Self::LowKick => Some(1),
            Self::LowThunder => Some(2),
            Self::HardPunch => Some(3),
            Self::HardKick => Some(4),
            Self::HardThunder => Some(5),
            Self::Slash => None,
        }
    }

    /// Inclusive bounds of this slot's band, `None` for slash.
    pub const fn band(self) -> Option<(u64, u64)> {
        match self.band_index() {
            Some(index) => Some(ResolverConfig::band(index)),
            None => None,
        }
    }

    /// Slot whose band contains `value`.
    ///
    /// Returns `None` for values outside `[1, 600]`; slash has no band and is
    /// never returned.
    pub fn classify(value: u64) -> Option<Self> {
        if value < ResolverConfig::BAND_ORIGIN {
            return None;
        }
        let index = ((value - ResolverConfig::BAND_ORIGIN) / ResolverConfig::BAND_WIDTH) as usize;
        Self::BANDED.get(index).copied()
    }

    /// Generator salt for this slot derived from a caller salt.
    ///
    /// Distinct slots always get distinct salts for the same caller salt.
    #[inline]
    pub const fn salt(self, base: u64) -> u64 {
        let lane = self as u64 + 1;
        mix64(base ^ lane.wrapping_mul(0xd6e8feb86659fd93))
    }
}

/// Punch, kick and thunder values of one intensity tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitTriple {
    pub punch: u64,
    pub kick: u64,
    pub thunder: u64,
}

impl HitTriple {
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.punch, self.kick, self.thunder)
    }
}

/// All seven values resolved for one `(game, salt)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedHitValues {
    pub low: HitTriple,
    pub hard: HitTriple,
    pub slash: u64,
}

impl ResolvedHitValues {
    pub const fn new(low: HitTriple, hard: HitTriple, slash: u64) -> Self {
        Self { low, hard, slash }
    }

    /// Value of a single slot.
    pub const fn value(&self, kind: HitKind) -> u64 {
        match kind {
            HitKind::LowPunch => self.low.punch,
            HitKind::LowKick => self.low.kick,
            HitKind::LowThunder => self.low.thunder,
            HitKind::HardPunch => self.hard.punch,
            HitKind::HardKick => self.hard.kick,
            HitKind::HardThunder => self.hard.thunder,
            HitKind::Slash => self.slash,
        }
    }

    /// `(lowPunch, lowKick, lowThunder, hardPunch, hardKick, hardThunder, slash)`.
    pub const fn as_tuple(&self) -> (u64, u64, u64, u64, u64, u64, u64) {
        (
            self.low.punch,
            self.low.kick,
            self.low.thunder,
            self.hard.punch,
            self.hard.kick,
            self.hard.thunder,
            self.slash,
        )
    }
}

/// Decomposes game seeds into hit values.
#[derive(Clone, Debug)]
pub struct HitResolver<'a, R: RngOracle + ?Sized> {
    rng: &'a R,
    config: ResolverConfig,
}

impl<'a, R: RngOracle + ?Sized> HitResolver<'a, R> {
    pub fn new(rng: &'a R, config: ResolverConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Seed the decomposition runs against, honouring the seed policy.
    pub fn seed_for<S: SeedStore + ?Sized>(&self, store: &S, game: GameId) -> Result<Seed> {
        match (store.load(game), self.config.seed_policy) {
            (Some(seed), _) => Ok(seed),
            (None, SeedPolicy::ZeroDefault) => Ok(Seed::ZERO),
            (None, SeedPolicy::Strict) => Err(HitsError::SeedNotInitialized(game)),
        }
    }

    /// Low punch in `[1,100]`, low kick in `[101,200]`, low thunder in `[201,300]`.
    pub fn assign_low_values<S: SeedStore + ?Sized>(
        &self,
        store: &S,
        game: GameId,
        salt: u64,
    ) -> Result<HitTriple> {
        let seed = self.seed_for(store, game)?;
        self.triple_from_seed(seed, salt, HitKind::LOW_TIER)
    }

    /// Hard punch in `[301,400]`, hard kick in `[401,500]`, hard thunder in `[501,600]`.
    pub fn assign_high_values<S: SeedStore + ?Sized>(
        &self,
        store: &S,
        game: GameId,
        salt: u64,
    ) -> Result<HitTriple> {
        let seed = self.seed_for(store, game)?;
        self.triple_from_seed(seed, salt, HitKind::HARD_TIER)
    }

    /// Slash value in `[0, slash_bound]`.
    pub fn assign_slash_value<S: SeedStore + ?Sized>(
        &self,
        store: &S,
        game: GameId,
        salt: u64,
    ) -> Result<u64> {
        let seed = self.seed_for(store, game)?;
        self.slash_from_seed(seed, salt)
    }

    /// All seven values; identical to calling the three grouped operations.
    pub fn finalize_hit_type_values<S: SeedStore + ?Sized>(
        &self,
        store: &S,
        game: GameId,
        salt: u64,
    ) -> Result<ResolvedHitValues> {
        let seed = self.seed_for(store, game)?;
        self.resolve_seed(seed, salt)
    }

    /// Decompose an explicit seed without consulting a store.
    pub fn resolve_seed(&self, seed: Seed, salt: u64) -> Result<ResolvedHitValues> {
        let low = self.triple_from_seed(seed, salt, HitKind::LOW_TIER)?;
        let hard = self.triple_from_seed(seed, salt, HitKind::HARD_TIER)?;
        let slash = self.slash_from_seed(seed, salt)?;
        Ok(ResolvedHitValues::new(low, hard, slash))
    }

    fn slot(&self, seed: Seed, salt: u64, kind: HitKind) -> Result<u64> {
        match kind.band() {
            Some((lo, hi)) => self.rng.bounded(seed, kind.salt(salt), lo, hi),
            None => self.slash_from_seed(seed, salt),
        }
    }

    fn triple_from_seed(&self, seed: Seed, salt: u64, kinds: [HitKind; 3]) -> Result<HitTriple> {
        let [punch, kick, thunder] = kinds;
        Ok(HitTriple {
            punch: self.slot(seed, salt, punch)?,
            kick: self.slot(seed, salt, kick)?,
            thunder: self.slot(seed, salt, thunder)?,
        })
    }

    fn slash_from_seed(&self, seed: Seed, salt: u64) -> Result<u64> {
        self.rng
            .bounded(seed, HitKind::Slash.salt(salt), 0, self.config.slash_bound)
    }
}
