//! Benchmark workloads for the contig container.
//!
//! Provides deterministic, seed-driven inputs so benchmark runs are
//! reproducible across machines:
//!
//! - [`random_values`]: a buffer of pseudo-random `u64` payloads
//! - [`random_positions`]: valid insertion positions for a vector that
//!   grows by one element per step

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate `n` pseudo-random values from a seeded ChaCha8 RNG.
pub fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random()).collect()
}

/// Generate `n` insertion positions, where position `i` is valid for a
/// vector of length `i` (so a fresh vector can absorb them in order).
pub fn random_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|len| rng.random_range(0..=len)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_workload() {
        assert_eq!(random_values(100, 7), random_values(100, 7));
        assert_eq!(random_positions(100, 7), random_positions(100, 7));
    }

    #[test]
    fn positions_are_valid_for_growing_vector() {
        for (len, pos) in random_positions(200, 42).into_iter().enumerate() {
            assert!(pos <= len);
        }
    }
}
