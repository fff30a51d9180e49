//! The smcHash engine: length dispatch, short path, bulk loop, tail ladder,
//! and finalizer.
//!
//! Every length class below is bit-exact with the reference implementation.
//! The comparisons in the tail ladder (`> 64`, `> 32`, `> 16`) are strict,
//! not `>=` -- an input of length exactly 32 skips the 32-byte drain
//! entirely and finalizes on the overlapping tail read alone. Changing any
//! of these to `>=` changes every digest at that length boundary.

use crate::primitives::{mix, mum};
use crate::secret::{Secret, DEFAULT_SECRET};

/// Hash `data` with the canonical secret and the canonical seed
/// (`DEFAULT_SECRET`'s first entry).
#[inline]
#[must_use]
pub fn smchash(data: &[u8]) -> u64 {
    smchash_seeded(data, DEFAULT_SECRET.get(0))
}

/// Hash `data` with the canonical secret and a caller-supplied seed.
#[inline]
#[must_use]
pub fn smchash_seeded(data: &[u8], seed: u64) -> u64 {
    smchash_with_secret(data, seed, &DEFAULT_SECRET)
}

/// Hash `data` with a caller-supplied seed and secret.
///
/// The canonical secret defines the reference digests; any other secret
/// produces a self-consistent but otherwise unrelated hash family.
#[must_use]
pub fn smchash_with_secret(data: &[u8], seed: u64, secret: &Secret) -> u64 {
    let len = data.len();
    if len <= 16 {
        short_path(data, seed, secret)
    } else {
        long_path(data, seed, secret)
    }
}

/// Read a little-endian `u64` starting at `offset`. `data` must have at
/// least `offset + 8` bytes.
#[inline(always)]
fn read_u64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
}

/// Read a little-endian `u32` starting at `offset`, zero-extended to
/// `u64`. `data` must have at least `offset + 4` bytes.
#[inline(always)]
fn read_u32(data: &[u8], offset: usize) -> u64 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap()) as u64
}

/// `data.len() <= 16`.
#[inline]
fn short_path(data: &[u8], mut seed: u64, secret: &Secret) -> u64 {
    let len = data.len();
    seed ^= mix(seed ^ secret.get(0), secret.get(1) ^ len as u64);

    let (a, b) = match len {
        0 => (0, 0),
        1..=3 => {
            let a = ((data[0] as u64) << 56) | ((data[len >> 1] as u64) << 32) | data[len - 1] as u64;
            (a, 0)
        }
        4..=7 => (read_u32(data, 0), read_u32(data, len - 4)),
        _ => (read_u64(data, 0), read_u64(data, len - 8)),
    };

    finalize(a, b, seed, len as u64, secret)
}

/// `data.len() > 16`.
#[inline]
fn long_path(data: &[u8], mut seed: u64, secret: &Secret) -> u64 {
    let len = data.len();
    seed ^= mix(seed ^ secret.get(2), secret.get(1));

    let mut remaining = len;
    let mut off = 0usize;

    if remaining > 128 {
        seed = bulk_loop(data, &mut off, &mut remaining, seed, secret);
    }

    if remaining > 64 {
        for k in 0..4 {
            seed = mix(
                read_u64(data, off + 16 * k) ^ secret.get(k),
                read_u64(data, off + 16 * k + 8) ^ seed,
            );
        }
        off += 64;
        remaining -= 64;
    }

    if remaining > 32 {
        for k in 0..2 {
            seed = mix(
                read_u64(data, off + 16 * k) ^ secret.get(k),
                read_u64(data, off + 16 * k + 8) ^ seed,
            );
        }
        off += 32;
        remaining -= 32;
    }

    if remaining > 16 {
        seed = mix(read_u64(data, off) ^ secret.get(0), read_u64(data, off + 8) ^ seed);
    }

    let a = read_u64(data, len - 16) ^ len as u64;
    let b = read_u64(data, len - 8);
    finalize(a, b, seed, len as u64, secret)
}

/// Eight-lane, 128-bytes-per-iteration bulk mixer. Only entered when
/// `len > 128`. Advances `off`/`remaining` past every full 128-byte block
/// consumed and returns the folded seed.
#[inline]
fn bulk_loop(data: &[u8], off: &mut usize, remaining: &mut usize, seed: u64, secret: &Secret) -> u64 {
    let mut lanes = [seed; 8];

    while *remaining > 128 {
        for (k, lane) in lanes.iter_mut().enumerate() {
            let w0 = read_u64(data, *off + 16 * k);
            let w1 = read_u64(data, *off + 16 * k + 8);
            *lane = mix(w0 ^ secret.get(k), w1 ^ *lane);
        }
        *off += 128;
        *remaining -= 128;
    }

    // Fold order taken straight from the reference implementation; any
    // associatively-equivalent order is permitted, but this one is fixed
    // for bit-exact reproducibility.
    let mut folded = lanes[0] ^ lanes[1] ^ lanes[4] ^ lanes[5];
    let rest = lanes[2] ^ lanes[3] ^ lanes[6] ^ lanes[7];
    folded ^= rest;
    folded
}

/// The `mum`-then-`mix` finalizer shared by both length-dispatch paths.
/// `len` is always the *original* input length, not a remaining-byte
/// counter.
#[inline(always)]
fn finalize(a: u64, b: u64, seed: u64, len: u64, secret: &Secret) -> u64 {
    let a = a ^ secret.get(1);
    let b = b ^ seed;
    let (a, b) = mum(a, b);
    mix(a ^ secret.get(8), b ^ secret.get(1) ^ len)
}
