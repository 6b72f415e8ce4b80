//! The four disjoint card collections of a session.
//!
//! - draw pile: ordered, front is the next card drawn
//! - mine: tableau cards keyed by the slot they occupy
//! - target: at most one exposed card
//! - discard: append-only history, oldest first
//!
//! `PileStacks` only tracks membership. The per-card `state` and
//! `face_up` flags are kept in step by the controller.

use im::{OrdMap, Vector};

use crate::core::card::CardId;
use crate::layout::SlotId;

/// Card membership of every pile.
///
/// Uses `im` persistent collections so a whole session clones in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PileStacks {
    draw: Vector<CardId>,
    mine: OrdMap<SlotId, CardId>,
    target: Option<CardId>,
    discard: Vector<CardId>,
}

impl PileStacks {
    /// Piles with every card in the draw pile, in the given order.
    #[must_use]
    pub fn with_draw_pile(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            draw: cards.into_iter().collect(),
            ..Self::default()
        }
    }

    // === Draw pile ===

    /// Remove and return the front of the draw pile.
    pub fn pop_draw(&mut self) -> Option<CardId> {
        self.draw.pop_front()
    }

    /// Draw pile, front first.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<CardId> {
        &self.draw
    }

    // === Mine ===

    /// Place a card into a slot. Returns the card it displaced, if any.
    pub fn insert_mine(&mut self, slot: SlotId, card: CardId) -> Option<CardId> {
        self.mine.insert(slot, card)
    }

    /// Remove the card in `slot` from the mine.
    pub fn remove_mine(&mut self, slot: SlotId) -> Option<CardId> {
        self.mine.remove(&slot)
    }

    /// Card currently occupying `slot`.
    #[must_use]
    pub fn mine_card(&self, slot: SlotId) -> Option<CardId> {
        self.mine.get(&slot).copied()
    }

    /// Mine cards keyed by slot, ascending slot id.
    #[must_use]
    pub fn mine(&self) -> &OrdMap<SlotId, CardId> {
        &self.mine
    }

    // === Target ===

    #[must_use]
    pub fn target(&self) -> Option<CardId> {
        self.target
    }

    /// Replace the target, returning the previous one.
    pub fn replace_target(&mut self, card: CardId) -> Option<CardId> {
        self.target.replace(card)
    }

    // === Discard ===

    /// Append to the discard history.
    pub fn push_discard(&mut self, card: CardId) {
        self.discard.push_back(card);
    }

    /// Most recently discarded card.
    #[must_use]
    pub fn peek_discard(&self) -> Option<CardId> {
        self.discard.last().copied()
    }

    /// Discard history, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardId> {
        &self.discard
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.mine.len() + usize::from(self.target.is_some()) + self.discard.len()
    }

    /// Every card id in every pile (draw, mine, target, discard).
    pub fn all_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.draw
            .iter()
            .copied()
            .chain(self.mine.values().copied())
            .chain(self.target)
            .chain(self.discard.iter().copied())
    }
}
