//! Match rule.
//!
//! The controller consults `MatchEngine` before accepting a mine card;
//! the rule never looks at suits or positions.

pub mod matching;

pub use matching::MatchEngine;
