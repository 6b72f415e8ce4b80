//! Input messages and their results.

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;

/// A "card selected" message from the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// The player clicked this card.
    Card(CardId),
    /// The player clicked the draw pile itself (it may be empty).
    DrawPile,
}

/// Why a mine card was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Another card in the same column is on top of it.
    NotTopCard,
    /// The card is still covered.
    FaceDown,
    /// Its rank is not next to the target's.
    NotAdjacent,
    /// There is no target to match against.
    NoTarget,
}

/// What a selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// Nothing happens for this card (current target, discard).
    Ignored,
    /// A card was drawn and became the target.
    Drew {
        card: CardId,
        previous_target: Option<CardId>,
    },
    /// A mine card matched and became the target.
    Matched {
        card: CardId,
        previous_target: CardId,
    },
    /// The mine card cannot be taken right now. No state changed.
    Rejected(RejectReason),
}

impl SelectionOutcome {
    /// Did the selection change the session?
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, SelectionOutcome::Drew { .. } | SelectionOutcome::Matched { .. })
    }
}

/// Progress of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A draw or a match is still possible.
    InProgress,
    /// Every mine card has been taken.
    Cleared,
    /// The draw pile is empty and no mine card matches the target.
    Stalled,
}
