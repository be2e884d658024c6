//! Owned generators derived from a caller's generator.
//!
//! A component that needs its own random stream takes exactly one 64-bit
//! draw from the upstream generator and seeds a private Xoshiro256++ with it.
//! Output is then reproducible as long as components are constructed in the
//! same order against the same upstream state.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Seed a new generator from one draw of `upstream`.
pub fn derive_rng<R: RngCore + ?Sized>(upstream: &mut R) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(upstream.next_u64())
}
