//! Seeded permutation of flattened pixel positions.
//!
//! The permutation is the identity sequence `[0, 1, .., n)` shuffled in place
//! by Fisher-Yates, drawing from a ChaCha20 stream seeded with the key value.
//! Encoding and decoding regenerate the same sequence from the same key and
//! pixel count, so the stream must be reproducible everywhere: ranges are drawn
//! as `u64` so that 32-bit and 64-bit targets consume the stream identically.

use crate::key::Key;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A bijection over `[0, len)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Generate the permutation for `key` over `len` positions
    pub fn generate(key: Key, len: usize) -> Self {
        let mut indices: Vec<usize> = (0..len).collect();
        let mut rng = ChaCha20Rng::seed_from_u64(u64::from(key.value()));

        for i in (1..len).rev() {
            let j = rng.random_range(0..=i as u64) as usize;
            indices.swap(i, j);
        }

        Self { indices }
    }

    /// The inverse bijection: `inverse[self[i]] == i`
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0usize; self.indices.len()];
        for (i, &p) in self.indices.iter().enumerate() {
            inverse[p] = i;
        }
        Self { indices: inverse }
    }

    /// Gather `items` so that `output[i] == items[self[i]]`
    ///
    /// `items` must have exactly `self.len()` elements.
    pub fn gather<T: Copy>(&self, items: &[T]) -> Vec<T> {
        debug_assert_eq!(items.len(), self.indices.len());
        self.indices.iter().map(|&src| items[src]).collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}
