//! Uniform random sampling without replacement

use crate::io::error::{BingoError, Result};
use rand::rngs::StdRng;
use rand::{SeedableRng, seq::index};

/// Random source for picking which images appear on a canvas
pub struct ImageSampler {
    rng: StdRng,
}

impl ImageSampler {
    /// Create a deterministic sampler for reproducible runs
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a sampler seeded from the operating system
    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a seeded sampler when a seed is given, otherwise an entropy-seeded one
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_entropy, Self::new)
    }

    /// Draw `amount` distinct elements of `pool`, each subset equally likely
    ///
    /// The order of the returned elements is random as well.
    ///
    /// # Errors
    ///
    /// Returns an error if `pool` has fewer than `amount` elements
    pub fn sample<'a, T>(&mut self, pool: &'a [T], amount: usize) -> Result<Vec<&'a T>> {
        if pool.len() < amount {
            return Err(BingoError::InsufficientImages {
                found: pool.len(),
                required: amount,
            });
        }

        Ok(index::sample(&mut self.rng, pool.len(), amount)
            .into_iter()
            .filter_map(|i| pool.get(i))
            .collect())
    }
}
