//! Error types.
//!
//! - `SchemaError`: malformed or inconsistent layout document
//! - `GameError`: failures of controller operations
//!
//! Rejected player moves are not errors; see `game::SelectionOutcome`.

use thiserror::Error;

use super::card::{CardId, CardState, PlayingCard};
use crate::layout::SlotId;

/// Where in a layout document a problem was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Multiplier,
    /// Index into the `slots` array.
    Record(usize),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Multiplier => f.write_str("multiplier"),
            Location::Record(index) => write!(f, "record {index}"),
        }
    }
}

/// A layout document could not be turned into a `LayoutSchema`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SchemaError {
    #[error("layout document is not valid JSON: {0}")]
    InvalidDocument(String),

    #[error("layout document has no multiplier record")]
    MissingMultiplier,

    #[error("{at}: missing required attribute `{attribute}`")]
    MissingAttribute { at: Location, attribute: &'static str },

    #[error("{at}: attribute `{attribute}` is not a valid number: {value:?}")]
    InvalidNumber {
        at: Location,
        attribute: &'static str,
        value: String,
    },

    #[error("{at}: attribute `{attribute}` must be 0 or 1, got {value:?}")]
    InvalidFlag {
        at: Location,
        attribute: &'static str,
        value: String,
    },

    #[error("{at}: unknown slot type {kind:?}")]
    UnknownType { at: Location, kind: String },

    #[error("{at}: layer {layer} is out of range (0..{max})")]
    LayerOutOfRange { at: Location, layer: i64, max: usize },

    #[error("layer {0} has no name")]
    UnnamedLayer(u8),

    #[error("duplicate slot id {0}")]
    DuplicateSlotId(SlotId),

    #[error("slot {slot} is hidden by unknown slot {occluder}")]
    UnknownOccluder { slot: SlotId, occluder: SlotId },

    #[error("slot {0} is hidden by itself")]
    SelfOcclusion(SlotId),

    #[error("occlusion cycle through slot {0}")]
    OcclusionCycle(SlotId),

    #[error("layout has no {0} record")]
    MissingPile(&'static str),

    #[error("layout has more than one {0} record")]
    DuplicatePile(&'static str),
}

/// Errors from `GameController` operations.
///
/// A failing operation leaves the session exactly as it was.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("deck has {available} cards but the layout needs {needed}")]
    DeckExhausted { needed: usize, available: usize },

    #[error("deck contains {0} more than once")]
    DuplicateCard(PlayingCard),

    #[error("draw pile is empty")]
    EmptyPile,

    #[error("{card} cannot move from {from} to {to}")]
    InvalidTransition {
        card: CardId,
        from: CardState,
        to: CardState,
    },

    #[error("{0} is not part of this session")]
    UnknownCard(CardId),
}
