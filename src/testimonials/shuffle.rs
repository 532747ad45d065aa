//! Permutation strategies for testimonial ordering.
//!
//! The shuffle is injected as a strategy so tests can substitute a
//! deterministic order and assert exact slices.

use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};

// ---------------------------------------------------------------------------
// ShuffleStrategy
// ---------------------------------------------------------------------------

/// Produces a permutation of `0..len` used to reorder a catalog.
pub trait ShuffleStrategy {
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

// ---------------------------------------------------------------------------
// FairShuffle -- Fisher-Yates over an owned RNG
// ---------------------------------------------------------------------------

/// Fisher-Yates shuffle: every permutation of the catalog is equally likely.
pub struct FairShuffle<R: Rng> {
    rng: R,
}

impl FairShuffle<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl Default for FairShuffle<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl FairShuffle<StdRng> {
    /// Seeded variant for reproducible orderings in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> FairShuffle<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ShuffleStrategy for FairShuffle<R> {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        for i in (1..len).rev() {
            let j = self.rng.gen_range(0..=i);
            indices.swap(i, j);
        }
        indices
    }
}

// ---------------------------------------------------------------------------
// CatalogOrder -- The identity permutation
// ---------------------------------------------------------------------------

/// Keeps catalog order. Useful for deterministic tests and previews.
pub struct CatalogOrder;

impl ShuffleStrategy for CatalogOrder {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}
