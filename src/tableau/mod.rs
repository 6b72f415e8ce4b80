//! Tableau state: piles, occlusion, and reachability.
//!
//! ## Key Types
//!
//! - `PileStacks`: Draw pile, mine, target, and discard membership
//! - `OcclusionGraph`: Face-up state derived from `hiddenby` edges
//! - `TopCardIndex`: Reachable mine card per column

pub mod piles;
pub mod occlusion;
pub mod top_card;

pub use piles::PileStacks;
pub use occlusion::OcclusionGraph;
pub use top_card::{TopCard, TopCardIndex};
