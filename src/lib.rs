//! # prospector
//!
//! Rules engine for Prospector, a tableau card game: a deck is dealt onto
//! a data-described layout, and the player repeatedly exposes a target card
//! and removes rank-adjacent cards from the tableau (the "mine").
//!
//! ## Design Principles
//!
//! 1. **Layout as Data**: Slot positions, columns, and occlusion come from a
//!    layout document, never from code.
//!
//! 2. **One Session Object**: `GameController` owns every card and pile.
//!    No globals; input is delivered to it explicitly.
//!
//! 3. **Recompute, Don't Patch**: The top-card index and face-up flags are
//!    rebuilt from mine membership after every change.
//!
//! 4. **Rendering at Arm's Length**: The engine emits presentation events;
//!    a renderer applies them after each transition completes.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, RNG, configuration, errors
//! - `layout`: Layout schema and document parser
//! - `tableau`: Piles, occlusion graph, top-card index
//! - `rules`: Rank adjacency match rule
//! - `presentation`: Rendering collaborator interface
//! - `game`: Session controller and selection messages

pub mod core;
pub mod layout;
pub mod tableau;
pub mod rules;
pub mod presentation;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CardState, PlayingCard, Rank, Suit,
    GameRng, shuffled_deck, standard_deck,
    FaceUpPolicy, GameConfig,
    GameError, SchemaError,
};

pub use crate::layout::{Column, LayoutSchema, SlotDefinition, SlotId, TRI_PEAKS_LAYOUT};

pub use crate::tableau::{OcclusionGraph, PileStacks, TopCard, TopCardIndex};

pub use crate::rules::MatchEngine;

pub use crate::presentation::{Placement, PresentationEvent, Presenter, SortingLayer};

pub use crate::game::{GameController, GameStatus, RejectReason, Selection, SelectionOutcome};
