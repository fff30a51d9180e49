//! smcHash: a fast, high-quality non-cryptographic 64-bit hash function,
//! plus smcRand, a counter-based PRNG sharing its mixing core.
//!
//! ```
//! let digest = smchash::smchash(b"Hello, World!");
//! assert_eq!(digest, 0x25bb_0982_c5c0_de6e);
//! ```
//!
//! Both primitives are built from the same widening 64x64->128 multiply
//! (see [`primitives`]): the hash engine dispatches on input length to a
//! short path, a bulk loop, and a tail ladder of decreasing chunk sizes
//! ([`hash`]); the PRNG increments a counter and mixes it ([`rand`]). Every
//! keyed operation draws from a shared, fixed [`Secret`] schedule.
//!
//! This crate works under `no_std` by disabling the default `std` feature;
//! `std` is on by default and enables [`SmcHasher`], a [`core::hash::Hasher`]
//! adapter for `HashMap`/`HashSet`. Enable `rand_core` to implement
//! [`rand_core::RngCore`]/[`rand_core::SeedableRng`] for [`SmcRand`], or
//! `serde` to (de)serialize [`Secret`] and [`SmcRand`].
//!
//! # Non-goals
//!
//! This crate does not implement a cryptographic hash, a streaming/
//! incremental API, or a command-line tool -- see the crate's design notes
//! for the reasoning.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod hash;
#[cfg(feature = "std")]
pub mod hasher;
pub mod primitives;
pub mod rand;
pub mod secret;

pub use hash::{smchash, smchash_seeded, smchash_with_secret};
#[cfg(feature = "std")]
pub use hasher::{SmcHasher, SmcHasherBuilder};
pub use rand::{smc_rand, SmcRand};
pub use secret::{Secret, SecretLengthError, DEFAULT_SECRET, SECRET_LEN};
