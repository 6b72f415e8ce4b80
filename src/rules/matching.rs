//! Rank adjacency, the only match rule of the game.

use crate::core::card::{Card, Rank};
use crate::core::config::GameConfig;

/// Decides whether two cards may follow each other.
///
/// Ranks match when they differ by exactly one. With `wrap` enabled,
/// King and Ace also match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchEngine {
    wrap: bool,
}

impl MatchEngine {
    #[must_use]
    pub const fn new(wrap: bool) -> Self {
        Self { wrap }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.rank_wrap)
    }

    /// Symmetric, total, and never true for equal ranks.
    #[must_use]
    pub fn ranks_adjacent(&self, a: Rank, b: Rank) -> bool {
        let diff = a.value().abs_diff(b.value());
        diff == 1 || (self.wrap && diff == Rank::COUNT - 1)
    }

    #[must_use]
    pub fn is_adjacent(&self, a: &Card, b: &Card) -> bool {
        self.ranks_adjacent(a.rank(), b.rank())
    }
}
