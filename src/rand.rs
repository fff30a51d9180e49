//! smcRand: a counter-based PRNG built on the same mixing primitive as the
//! hash engine.
//!
//! There's no hashing here, just a 64-bit counter that gets incremented by a
//! secret constant and mixed before every output. That makes it cheap (one
//! multiply per call) and trivially seekable -- the state *is* the counter.

use crate::primitives::mix;
use crate::secret::DEFAULT_SECRET;

/// Advance `state` by one step and return the next pseudo-random `u64`.
///
/// `state` is incremented by the secret's first entry *before* it's mixed,
/// so `smc_rand(&mut 0)` never returns the same value as the initial state
/// itself -- the first call always reflects at least one step forward.
#[inline]
pub fn smc_rand(state: &mut u64) -> u64 {
    *state = state.wrapping_add(DEFAULT_SECRET.get(0));
    mix(*state, *state ^ DEFAULT_SECRET.get(1))
}

/// A `smc_rand`-backed generator with a fixed starting counter.
///
/// `SmcRand` is deterministic and has no cryptographic properties: it is
/// meant for simulations, sampling, and other places that want a fast,
/// reproducible stream of numbers, not for anything security-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmcRand {
    state: u64,
}

impl SmcRand {
    /// Build a generator whose counter starts at `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// The generator's current counter value.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Draw the next `u64` from the stream.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        smc_rand(&mut self.state)
    }

    /// Draw the next `u32` from the stream, taking the upper half of a
    /// 64-bit draw (the better-mixed half, same convention as
    /// [`rand_core::RngCore::next_u32`]'s default `next_u64`-derived impl).
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Fill `dest` with pseudo-random bytes, one `u64` draw at a time.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let remainder = chunks.into_remainder();
        if !remainder.is_empty() {
            let word = self.next_u64().to_le_bytes();
            remainder.copy_from_slice(&word[..remainder.len()]);
        }
    }
}

impl Default for SmcRand {
    /// A generator seeded from the default secret's own first entry, so
    /// `SmcRand::default()` is deterministic without leaning on any
    /// caller-supplied seed.
    fn default() -> Self {
        Self::new(DEFAULT_SECRET.get(0))
    }
}

impl Iterator for SmcRand {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_u64())
    }
}

#[cfg(feature = "rand_core")]
mod rand_core_impl {
    use super::SmcRand;
    use rand_core::{impls, Error, RngCore, SeedableRng};

    impl RngCore for SmcRand {
        #[inline]
        fn next_u32(&mut self) -> u32 {
            SmcRand::next_u32(self)
        }

        #[inline]
        fn next_u64(&mut self) -> u64 {
            SmcRand::next_u64(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            impls::fill_bytes_via_next(self, dest);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl SeedableRng for SmcRand {
        type Seed = [u8; 8];

        fn from_seed(seed: Self::Seed) -> Self {
            Self::new(u64::from_le_bytes(seed))
        }

        fn seed_from_u64(seed: u64) -> Self {
            Self::new(seed)
        }
    }
}
