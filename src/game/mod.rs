//! Game session: the controller and its input/output messages.
//!
//! ## Key Types
//!
//! - `GameController`: Owns all session state; the only entry point for moves
//! - `Selection`: Input message (a card or the draw pile was clicked)
//! - `SelectionOutcome`: What the move did, or why it was rejected
//! - `GameStatus`: In progress, cleared, or stalled

pub mod controller;
pub mod selection;

pub use controller::GameController;
pub use selection::{GameStatus, RejectReason, Selection, SelectionOutcome};
