//! RNG oracles for deterministic hit-value derivation.
//!
//! An [`RngOracle`] owns two mixing operations:
//!
//! - [`RngOracle::combine`] folds a fresh input into a game's previous seed
//!   (the seed accumulator step)
//! - [`RngOracle::next_u64`] derives a raw value from a `(seed, salt)` pair
//!   (the range generator step)
//!
//! Everything else (bounded ranges, percent rolls) is built on those two in
//! the provided trait methods.
//!
//! # Determinism
//!
//! All oracles must be pure: the same `(seed, salt)` always yields the same
//! value and no oracle reads clocks or ambient state.
//!
//! These oracles are NOT a source of secure randomness. Seeds are derived
//! from caller-supplied inputs and anyone who knows them can predict every
//! hit value.

use sha2::{Digest, Sha256};

use crate::error::{HitsError, Result};
use crate::types::Seed;

/// Salt lane reserved for [`RngOracle::roll_percent`].
const PERCENT_SALT: u64 = 0x7065_7263_656e_7400;

/// Salt lane reserved for [`RngOracle::roll_upto`].
const UPTO_SALT: u64 = 0x7570_746f_0000_0000;

/// RNG oracle for deterministic seed mixing and bounded value generation.
pub trait RngOracle: Send + Sync {
    /// Derive a raw 64-bit value from a seed and a salt.
    ///
    /// Distinct salts must produce uncorrelated outputs for the same seed.
    fn next_u64(&self, seed: Seed, salt: u64) -> u64;

    /// Combine a game's previous seed with a fresh input.
    ///
    /// Small changes in `input` must produce large changes in the result and
    /// the operation must not be commutative across successive inputs.
    fn combine(&self, previous: Seed, input: u64) -> Seed;

    /// Generate a value in `[lo, hi]` inclusive.
    ///
    /// Returns `lo` without consulting the generator when `lo == hi`, and
    /// [`HitsError::InvalidRange`] when `lo > hi`.
    fn bounded(&self, seed: Seed, salt: u64, lo: u64, hi: u64) -> Result<u64> {
        if lo > hi {
            return Err(HitsError::InvalidRange { lo, hi });
        }
        if lo == hi {
            return Ok(lo);
        }
        Ok(lo + scale_inclusive(self.next_u64(seed, salt), hi - lo))
    }

    /// Roll a value in `[0, 99]`.
    fn roll_percent(&self, seed: Seed) -> u64 {
        scale_inclusive(self.next_u64(seed, PERCENT_SALT), 99)
    }

    /// Roll a value in `[0, size]`.
    fn roll_upto(&self, seed: Seed, size: u64) -> u64 {
        scale_inclusive(self.next_u64(seed, UPTO_SALT), size)
    }
}

/// Map a raw 64-bit value onto `[0, max]` with a widening multiply.
///
/// The multiply-shift keeps the high bits of the raw value, which carry the
/// most entropy for both oracles, and has no modulo overflow when the range
/// spans the whole `u64` domain.
#[inline]
fn scale_inclusive(raw: u64, max: u64) -> u64 {
    match max.checked_add(1) {
        Some(width) => ((u128::from(raw) * u128::from(width)) >> 64) as u64,
        None => raw,
    }
}

/// 64-bit finalizer (MurmurHash3 `fmix64`).
///
/// Bijective on `u64`, so distinct inputs never collide.
#[inline]
pub const fn mix64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ceb9fe1a85ec53);
    x ^= x >> 33;
    x
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR output permutation over a 64-bit LCG state. The
/// `(seed, salt)` pair is avalanche-mixed into the starting state, then two
/// generator steps are concatenated into one 64-bit output.
///
/// # Properties
///
/// - **Deterministic**: Same `(seed, salt)` always produces same output
/// - **Fast**: Two multiplies per mix, two LCG steps per value
/// - **Good quality**: Passes statistical tests (PractRand, TestU01)
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Starting generator state for a `(seed, salt)` pair.
    #[inline]
    fn initial_state(seed: Seed, salt: u64) -> u64 {
        mix64(seed.0 ^ mix64(salt.wrapping_mul(0x9e3779b97f4a7c15)))
    }
}

impl RngOracle for PcgRng {
    fn next_u64(&self, seed: Seed, salt: u64) -> u64 {
        let first = Self::pcg_step(Self::initial_state(seed, salt));
        let second = Self::pcg_step(first);
        (u64::from(Self::pcg_output(first)) << 32) | u64::from(Self::pcg_output(second))
    }

    fn combine(&self, previous: Seed, input: u64) -> Seed {
        // Asymmetric in (previous, input); combine(ZERO, 0) != ZERO.
        let mut hash = previous.0.rotate_left(23);
        hash ^= input.wrapping_mul(0x517cc1b727220a95);
        hash ^= 0x85ebca6b_c2b2ae35;
        Seed(mix64(hash))
    }
}

/// Hash-based oracle using SHA-256 with domain separation tags.
///
/// Slower than [`PcgRng`] but mirrors keyed-hash randomness schemes used by
/// on-chain resolvers, which makes it the choice when values must be
/// reproduced by an external verifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Rng;

impl Sha256Rng {
    const RANGE_TAG: &'static [u8] = b"hits/range/v1";
    const SEED_TAG: &'static [u8] = b"hits/seed/v1";

    fn digest_u64(tag: &[u8], a: u64, b: u64) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(tag);
        hasher.update(a.to_be_bytes());
        hasher.update(b.to_be_bytes());
        let digest = hasher.finalize();

        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(head)
    }
}

impl RngOracle for Sha256Rng {
    fn next_u64(&self, seed: Seed, salt: u64) -> u64 {
        Self::digest_u64(Self::RANGE_TAG, seed.0, salt)
    }

    fn combine(&self, previous: Seed, input: u64) -> Seed {
        Seed(Self::digest_u64(Self::SEED_TAG, previous.0, input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracles() -> [&'static dyn RngOracle; 2] {
        [&PcgRng, &Sha256Rng]
    }

    #[test]
    fn bounded_stays_in_range() {
        for rng in oracles() {
            for salt in 0..2_000u64 {
                let v = rng.bounded(Seed(0xdead_beef), salt, 17, 42).unwrap();
                assert!((17..=42).contains(&v), "{v} outside [17, 42]");
            }
        }
    }

    #[test]
    fn degenerate_range_returns_lo() {
        for rng in oracles() {
            assert_eq!(rng.bounded(Seed(9), 1, 77, 77).unwrap(), 77);
            assert_eq!(rng.bounded(Seed(9), 2, 0, 0).unwrap(), 0);
            assert_eq!(rng.bounded(Seed(9), 3, u64::MAX, u64::MAX).unwrap(), u64::MAX);
        }
    }

    #[test]
    fn inverted_range_fails() {
        for rng in oracles() {
            assert_eq!(
                rng.bounded(Seed(1), 1, 10, 9),
                Err(HitsError::InvalidRange { lo: 10, hi: 9 })
            );
        }
    }

    #[test]
    fn full_domain_does_not_overflow() {
        let raw = PcgRng.next_u64(Seed(3), 4);
        assert_eq!(PcgRng.bounded(Seed(3), 4, 0, u64::MAX).unwrap(), raw);
        assert_eq!(PcgRng.roll_upto(Seed(3), u64::MAX), PcgRng.next_u64(Seed(3), UPTO_SALT));
    }

    #[test]
    fn bounded_is_deterministic() {
        for rng in oracles() {
            let a = rng.bounded(Seed(12345), 6, 1, 1_000_000).unwrap();
            let b = rng.bounded(Seed(12345), 6, 1, 1_000_000).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn bounded_covers_range_roughly_uniformly() {
        const BUCKETS: usize = 10;
        const SAMPLES: u64 = 20_000;
        for rng in oracles() {
            let mut counts = [0u32; BUCKETS];
            for salt in 0..SAMPLES {
                let v = rng.bounded(Seed(0x5eed), salt, 0, BUCKETS as u64 - 1).unwrap();
                counts[v as usize] += 1;
            }
            // Expected 2000 per bucket; allow generous slack.
            for (bucket, count) in counts.iter().enumerate() {
                assert!(
                    (1_600..=2_400).contains(count),
                    "bucket {bucket} has {count} hits"
                );
            }
        }
    }

    #[test]
    fn neighbouring_salts_are_not_linear_offsets() {
        for rng in oracles() {
            let values: Vec<u64> = (0..64)
                .map(|salt| rng.bounded(Seed(42), salt, 0, 999).unwrap())
                .collect();
            let first_delta = values[1].wrapping_sub(values[0]);
            let linear = values
                .windows(2)
                .all(|w| w[1].wrapping_sub(w[0]) == first_delta);
            assert!(!linear, "outputs look like linear offsets: {values:?}");
        }
    }

    #[test]
    fn percent_and_upto_rolls_stay_bounded() {
        for rng in oracles() {
            for seed in 0..500u64 {
                assert!(rng.roll_percent(Seed(seed)) <= 99);
                assert!(rng.roll_upto(Seed(seed), 1) <= 1);
            }
            assert_eq!(rng.roll_upto(Seed(298), 0), 0);
        }
    }

    #[test]
    fn roll_upto_reaches_both_ends_of_a_coin_flip() {
        let mut seen = [false; 2];
        for seed in 0..200u64 {
            seen[PcgRng.roll_upto(Seed(seed), 1) as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn combine_is_order_sensitive() {
        for rng in oracles() {
            let ab = rng.combine(rng.combine(Seed::ZERO, 35), 902);
            let ba = rng.combine(rng.combine(Seed::ZERO, 902), 35);
            assert_ne!(ab, ba);
            assert_ne!(rng.combine(Seed::ZERO, 0), Seed::ZERO);
        }
    }
}
