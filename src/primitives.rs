//! Widening-multiply mixing primitives.
//!
//! Every bit of diffusion in smcHash and smcRand comes from these two
//! functions. Both reduce to a single 64×64→128 multiply plus a handful of
//! XORs; on every tier-1 target that's one `mul`/`umulh` pair, not a
//! schoolbook 32-bit decomposition.

/// 64×64→128 widening multiply, returned as `(lo, hi)`.
#[inline(always)]
pub const fn mul128(a: u64, b: u64) -> (u64, u64) {
    let full = (a as u128).wrapping_mul(b as u128);
    (full as u64, (full >> 64) as u64)
}

/// Multiply `a` and `b`, fold the 128-bit product to 64 bits by XOR'ing the
/// high and low halves.
///
/// This is the sole source of non-linearity in the hash engine and the
/// PRNG: the middle bits of the product (the top of `lo`, the bottom of
/// `hi`) move the most for small input changes, so XOR'ing the halves
/// spreads that sensitivity across the whole 64-bit output.
#[inline(always)]
pub const fn mix(a: u64, b: u64) -> u64 {
    let (lo, hi) = mul128(a, b);
    lo ^ hi
}

/// Multiply `a` and `b`, returning `(lo ^ hi, hi)`.
///
/// Used only by the finalizer, which needs both the mixed value and the
/// raw high half to fold against a second secret.
#[inline(always)]
pub const fn mum(a: u64, b: u64) -> (u64, u64) {
    let (lo, hi) = mul128(a, b);
    (lo ^ hi, hi)
}
