//! Random test vectors in [0, P)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator when `seed` is given, otherwise seeded from the OS.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `n` values drawn uniformly from `[0, modulus)`. `modulus` must be non-zero.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, n: usize, modulus: u64) -> Vec<u64> {
    (0..n).map(|_| rng.gen_range(0..modulus)).collect()
}
