/// How the value decomposer treats a game without an accumulated seed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SeedPolicy {
    /// Unset seeds resolve as [`Seed::ZERO`](crate::Seed::ZERO).
    #[default]
    ZeroDefault,
    /// Unset seeds fail with [`HitsError::SeedNotInitialized`](crate::HitsError::SeedNotInitialized).
    Strict,
}

/// Resolver configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolverConfig {
    pub seed_policy: SeedPolicy,
    /// Inclusive upper bound of the slash value.
    pub slash_bound: u64,
}

impl ResolverConfig {
    // ===== band layout =====
    /// Width of every bounded hit band.
    pub const BAND_WIDTH: u64 = 100;
    /// Number of bounded hit bands (low and hard tiers).
    pub const BAND_COUNT: usize = 6;
    /// First value of the lowest band.
    pub const BAND_ORIGIN: u64 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SLASH_BOUND: u64 = u64::MAX;

    pub fn new() -> Self {
        Self {
            seed_policy: SeedPolicy::default(),
            slash_bound: Self::DEFAULT_SLASH_BOUND,
        }
    }

    #[must_use]
    pub fn with_seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    #[must_use]
    pub fn with_slash_bound(mut self, slash_bound: u64) -> Self {
        self.slash_bound = slash_bound;
        self
    }

    /// Inclusive `(lo, hi)` bounds of the band at `index` (0-based).
    pub const fn band(index: usize) -> (u64, u64) {
        let lo = Self::BAND_ORIGIN + index as u64 * Self::BAND_WIDTH;
        (lo, lo + Self::BAND_WIDTH - 1)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
