//! Randomness helpers
//!
//! Animations draw from any [`RngCore`], so tests can hand in a scripted
//! sequence and assert the exact values chosen. Production code uses a
//! seeded xoshiro generator.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

/// Seed used when the configuration does not provide one
pub const DEFAULT_SEED: u64 = 0x9C63_EA21_046B_F751;

/// Default generator for firmware builds
pub type DefaultRng = Xoshiro128StarStar;

/// Create the default generator from a seed
pub fn seeded(seed: u64) -> DefaultRng {
    Xoshiro128StarStar::seed_from_u64(seed)
}

/// Value in `[0, bound)`; a zero bound yields 0
pub fn below<R: RngCore + ?Sized>(rng: &mut R, bound: u32) -> u32 {
    if bound == 0 {
        return 0;
    }
    rng.next_u32() % bound
}

/// Value in `[low, high]`; an empty range yields `low`
pub fn inclusive<R: RngCore + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high <= low {
        return low;
    }
    let span = (high - low) as u32 + 1;
    low + below(rng, span) as i32
}

/// Either -1 or +1 with equal odds
pub fn sign<R: RngCore + ?Sized>(rng: &mut R) -> i32 {
    if rng.next_u32() & 0b1 == 0 {
        1
    } else {
        -1
    }
}
