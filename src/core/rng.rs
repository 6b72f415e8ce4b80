//! Seeded shuffling.
//!
//! A seed fixes the deal: the same seed always gets the same card order.
//!
//! ```
//! use prospector::core::GameRng;
//!
//! let mut left: Vec<u32> = (0..52).collect();
//! let mut right = left.clone();
//! GameRng::new(42).shuffle(&mut left);
//! GameRng::new(42).shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// ChaCha8 stream tied to the seed that produced it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Stream derived from this seed and a label.
    ///
    /// Depends only on the seed, never on how far `self` has advanced.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.inner);
    }
}
