//! Core engine types: cards, deck, RNG, configuration, errors.
//!
//! Nothing here knows about the tableau layout beyond the `SlotId` a mine
//! card remembers.

pub mod card;
pub mod deck;
pub mod rng;
pub mod config;
pub mod error;

pub use card::{Card, CardId, CardState, PlayingCard, Rank, Suit};
pub use deck::{shuffled_deck, standard_deck, STANDARD_DECK_SIZE};
pub use rng::GameRng;
pub use config::{FaceUpPolicy, GameConfig};
pub use error::{GameError, Location, SchemaError};
