//! The secret schedule: nine keying constants shared by the hash engine and
//! the PRNG.

use core::fmt;

/// Number of `u64` entries in a secret.
pub const SECRET_LEN: usize = 9;

/// The canonical secret, fixed for interoperability across implementations.
///
/// Every entry is odd, has popcount 32, and the pairwise Hamming distance
/// between any two entries is at least 32. Those invariants aren't enforced
/// on the canonical table (they're true by construction), but they are
/// checked on custom secrets in debug builds -- see [`Secret::new`].
pub const DEFAULT_SECRET: Secret = Secret([
    0x9ad1_e8e2_aa5a_5c4b,
    0xaaaa_d233_5647_d21b,
    0xb8ac_35e2_69d1_b495,
    0xa98d_653c_b2b4_c959,
    0x71a5_b853_b43c_a68b,
    0x2b55_934d_c35c_9655,
    0x746a_e48e_d4d4_1e4d,
    0xa3d8_c38e_78aa_a6a9,
    0x1bca_69c5_6565_8bc3,
]);

/// A 9-entry table of `u64` keying constants used throughout smcHash and
/// smcRand.
///
/// Changing the secret changes every digest it produces -- secrets are
/// keying material, not a version number, and aren't meant to be rotated
/// casually. Use [`DEFAULT_SECRET`] (or `Secret::default()`) unless you have
/// a specific reason to key the hash differently from the reference
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Secret(pub(crate) [u64; SECRET_LEN]);

impl Secret {
    /// Build a secret from nine `u64` constants.
    ///
    /// In debug builds, panics if any entry is even, has popcount other
    /// than 32, or sits within Hamming distance 31 of another entry. These
    /// are the invariants the algorithm's statistical guarantees assume;
    /// they are not checked in release builds, matching how the reference
    /// implementation treats them as documentation rather than a runtime
    /// contract.
    #[must_use]
    pub const fn new(entries: [u64; SECRET_LEN]) -> Self {
        let secret = Self(entries);
        #[cfg(debug_assertions)]
        secret.debug_check_invariants();
        secret
    }

    /// Build a secret from a slice, checking it has exactly
    /// [`SECRET_LEN`] entries.
    pub fn try_from_slice(entries: &[u64]) -> Result<Self, SecretLengthError> {
        let array: [u64; SECRET_LEN] =
            entries
                .try_into()
                .map_err(|_| SecretLengthError { actual: entries.len() })?;
        Ok(Self::new(array))
    }

    /// Borrow the nine entries as a plain array.
    #[must_use]
    pub const fn as_array(&self) -> &[u64; SECRET_LEN] {
        &self.0
    }

    #[inline(always)]
    pub(crate) const fn get(&self, index: usize) -> u64 {
        self.0[index]
    }

    #[cfg(debug_assertions)]
    const fn debug_check_invariants(&self) {
        let mut i = 0;
        while i < SECRET_LEN {
            assert!(self.0[i] & 1 == 1, "smchash secret entry must be odd");
            assert!(
                self.0[i].count_ones() == 32,
                "smchash secret entry must have popcount 32"
            );
            let mut j = i + 1;
            while j < SECRET_LEN {
                assert!(
                    (self.0[i] ^ self.0[j]).count_ones() >= 32,
                    "smchash secret entries must be pairwise Hamming distance >= 32 apart"
                );
                j += 1;
            }
            i += 1;
        }
    }
}

impl Default for Secret {
    fn default() -> Self {
        DEFAULT_SECRET
    }
}

impl From<[u64; SECRET_LEN]> for Secret {
    fn from(entries: [u64; SECRET_LEN]) -> Self {
        Self::new(entries)
    }
}

/// A caller-supplied secret didn't have exactly [`SECRET_LEN`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("smchash secret must have exactly {SECRET_LEN} entries, got {actual}")]
pub struct SecretLengthError {
    actual: usize,
}

impl SecretLengthError {
    /// The length the caller actually supplied.
    #[must_use]
    pub const fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_secret_matches_canonical_values() {
        assert_eq!(DEFAULT_SECRET.get(0), 0x9ad1_e8e2_aa5a_5c4b);
        assert_eq!(DEFAULT_SECRET.get(8), 0x1bca_69c5_6565_8bc3);
        assert_eq!(Secret::default(), DEFAULT_SECRET);
    }

    #[test]
    fn test_canonical_entries_satisfy_invariants() {
        for i in 0..SECRET_LEN {
            let entry = DEFAULT_SECRET.get(i);
            assert_eq!(entry & 1, 1, "entry {i} must be odd");
            assert_eq!(entry.count_ones(), 32, "entry {i} must have popcount 32");
            for j in (i + 1)..SECRET_LEN {
                let other = DEFAULT_SECRET.get(j);
                assert!(
                    (entry ^ other).count_ones() >= 32,
                    "entries {i} and {j} too close"
                );
            }
        }
    }

    #[test]
    fn test_try_from_slice_rejects_wrong_length() {
        let err = Secret::try_from_slice(&[1, 2, 3]).unwrap_err();
        assert_eq!(err.actual(), 3);
    }

    #[test]
    fn test_try_from_slice_accepts_nine_entries() {
        let entries = *DEFAULT_SECRET.as_array();
        let secret = Secret::try_from_slice(&entries).unwrap();
        assert_eq!(secret, DEFAULT_SECRET);
    }
}
