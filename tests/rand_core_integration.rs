//! Confirms `SmcRand` behaves like any other `rand_core`-based generator
//! from the perspective of the broader `rand` ecosystem.

#![cfg(feature = "rand_core")]

use rand::Rng;
use rand_core::SeedableRng;
use smchash::SmcRand;

#[test]
fn smc_rand_works_with_the_rand_rng_extension_trait() {
    let mut rng = SmcRand::seed_from_u64(2026);
    let value: u32 = rng.gen_range(0..100);
    assert!(value < 100);
}

#[test]
fn seed_from_u64_is_deterministic() {
    let mut a = SmcRand::seed_from_u64(42);
    let mut b = SmcRand::seed_from_u64(42);
    for _ in 0..32 {
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
