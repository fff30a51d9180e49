//! A [`core::hash::Hasher`] adapter so smcHash can back a `HashMap`/`HashSet`.
//!
//! smcHash's dispatch (short path vs. bulk loop vs. tail ladder) depends on
//! the *total* length of the input, which isn't known until all of it has
//! arrived. That makes a faithful streaming implementation impossible
//! without re-deriving a different, incremental algorithm -- which is a
//! different hash, not this one. `SmcHasher` instead buffers every `write*`
//! call and only runs `smchash` once, in `finish`. It's the right adapter
//! for "give me a `BuildHasher` for a hash map", not for hashing a stream
//! whose length you don't know in advance.

use std::hash::{BuildHasher, Hasher};

use crate::hash::smchash_seeded;
use crate::secret::DEFAULT_SECRET;

/// A [`Hasher`] that buffers its input and hashes it with smcHash on
/// [`finish`](Hasher::finish).
///
/// Unlike `SipHash` (the standard library's default) or most streaming
/// hashers, calling `finish` does not destroy any internal state you could
/// keep writing into -- but it does mean every `finish` call re-hashes the
/// full buffer. That's the right trade for one-shot map/set lookups, and
/// the wrong one for incrementally hashing a long-lived stream.
#[derive(Clone, Debug)]
pub struct SmcHasher {
    seed: u64,
    buffer: Vec<u8>,
}

impl SmcHasher {
    /// Build a hasher keyed with `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, buffer: Vec::new() }
    }
}

impl Default for SmcHasher {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SECRET.get(0))
    }
}

impl Hasher for SmcHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        smchash_seeded(&self.buffer, self.seed)
    }
}

/// A [`BuildHasher`] that hands out [`SmcHasher`]s sharing one fixed seed.
///
/// Every hasher built from the same `SmcHasherBuilder` uses the same seed,
/// which is what a `HashMap` needs (it rebuilds hashers per bucket probe and
/// expects them to agree on a key's hash across calls).
#[derive(Clone, Debug)]
pub struct SmcHasherBuilder {
    seed: u64,
}

impl SmcHasherBuilder {
    /// Build a builder whose hashers are keyed with `seed`.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for SmcHasherBuilder {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SECRET.get(0))
    }
}

impl BuildHasher for SmcHasherBuilder {
    type Hasher = SmcHasher;

    fn build_hasher(&self) -> SmcHasher {
        SmcHasher::with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_finish_matches_smchash_seeded() {
        let mut hasher = SmcHasher::with_seed(42);
        hasher.write(b"Hello, World!");
        assert_eq!(hasher.finish(), smchash_seeded(b"Hello, World!", 42));
    }

    #[test]
    fn test_split_writes_match_one_write_of_the_concatenation() {
        let mut split = SmcHasher::with_seed(1);
        split.write(b"Hello, ");
        split.write(b"World!");

        let mut whole = SmcHasher::with_seed(1);
        whole.write(b"Hello, World!");

        assert_eq!(split.finish(), whole.finish());
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut hasher = SmcHasher::default();
        hasher.write(b"idempotent");
        let first = hasher.finish();
        let second = hasher.finish();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_hasher_shares_seed_across_instances() {
        let builder = SmcHasherBuilder::with_seed(7);
        let mut a = builder.build_hasher();
        let mut b = builder.build_hasher();
        a.write(b"same key");
        b.write(b"same key");
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn test_hash_map_round_trips_with_the_custom_builder() {
        use std::collections::HashMap;

        let mut map: HashMap<&str, i32, SmcHasherBuilder> =
            HashMap::with_hasher(SmcHasherBuilder::default());
        map.insert("one", 1);
        map.insert("two", 2);
        assert_eq!(map.get("one"), Some(&1));
        assert_eq!(map.get("two"), Some(&2));
        assert_eq!(map.get("three"), None);
    }
}
