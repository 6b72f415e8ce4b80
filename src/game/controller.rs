//! The game session: deal, draw, match, and the card state machine.
//!
//! `GameController` owns every card and every pile. Input arrives as
//! `on_card_selected` / `on_draw_pile_selected` calls; each call runs to
//! completion (piles, top-card index, and face-up flags all updated)
//! before it returns. Visual changes are queued and handed out with
//! `flush_events` afterwards.
//!
//! ## Card lifecycle
//!
//! ```text
//! DrawPile -> Mine -> Target -> Discard
//! DrawPile ---------> Target -> Discard
//! ```
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use prospector::core::{GameConfig, GameRng, shuffled_deck};
//! use prospector::game::{GameController, GameStatus};
//! use prospector::layout::{LayoutSchema, TRI_PEAKS_LAYOUT};
//!
//! let schema = Arc::new(LayoutSchema::parse(TRI_PEAKS_LAYOUT).unwrap());
//! let deck = shuffled_deck(&GameRng::new(42));
//! let mut game = GameController::deal(schema, deck, GameConfig::default()).unwrap();
//!
//! assert_eq!(game.mine().len(), 28);
//! assert_eq!(game.draw_pile().len(), 23);
//! assert_eq!(game.status(), GameStatus::InProgress);
//!
//! let mut rendered = Vec::new();
//! game.flush_events(&mut rendered);
//! assert!(!rendered.is_empty());
//! ```

use std::sync::Arc;

use im::{OrdMap, Vector};
use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

use super::selection::{GameStatus, RejectReason, Selection, SelectionOutcome};
use crate::core::card::{Card, CardId, CardState, PlayingCard};
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::rng::GameRng;
use crate::core::deck::shuffled_deck;
use crate::layout::{Column, LayoutSchema, SlotId};
use crate::presentation::{placement, Placement, PresentationEvent, Presenter};
use crate::rules::MatchEngine;
use crate::tableau::{OcclusionGraph, PileStacks, TopCardIndex};

/// One game session.
///
/// Cheap to clone: cards and piles live in `im` collections and the
/// schema is shared.
#[derive(Clone, Debug)]
pub struct GameController {
    config: GameConfig,
    schema: Arc<LayoutSchema>,
    occlusion: OcclusionGraph,
    matcher: MatchEngine,

    /// Indexed by `CardId`.
    cards: Vector<Card>,
    piles: PileStacks,
    top_cards: TopCardIndex,

    /// Presentation changes not yet flushed.
    events: Vec<PresentationEvent>,
}

impl GameController {
    /// Start a session: fill every slot from the front of `deck` in layout
    /// order, then draw one more card as the first target.
    ///
    /// Fails with `DeckExhausted` when the deck holds fewer than
    /// `slot_count + 1` cards and with `DuplicateCard` when a card repeats.
    pub fn deal(
        schema: Arc<LayoutSchema>,
        deck: impl IntoIterator<Item = PlayingCard>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let deck: Vec<PlayingCard> = deck.into_iter().collect();

        let needed = schema.slot_count() + 1;
        if deck.len() < needed {
            return Err(GameError::DeckExhausted {
                needed,
                available: deck.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &face in &deck {
            if !seen.insert(face) {
                return Err(GameError::DuplicateCard(face));
            }
        }

        let cards: Vector<Card> = deck
            .iter()
            .enumerate()
            .map(|(i, &face)| Card::new(CardId(i as u32), face))
            .collect();
        let piles = PileStacks::with_draw_pile(cards.iter().map(|card| card.id));

        let mut game = Self {
            occlusion: OcclusionGraph::from_schema(&schema),
            matcher: MatchEngine::from_config(&config),
            config,
            schema,
            cards,
            piles,
            top_cards: TopCardIndex::default(),
            events: Vec::new(),
        };

        game.layout_mine()?;
        let first = game.draw()?;
        game.move_to_target(first)?;
        game.update_draw_pile();
        game.refresh_mine();

        info!(
            mine = game.piles.mine().len(),
            draw_pile = game.piles.draw_pile().len(),
            first_target = %first,
            "dealt"
        );
        Ok(game)
    }

    /// Deal a freshly shuffled standard deck.
    pub fn deal_seeded(
        schema: Arc<LayoutSchema>,
        seed: u64,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        Self::deal(schema, shuffled_deck(&GameRng::new(seed)), config)
    }

    // === Input ===

    /// Dispatch an input message.
    pub fn select(&mut self, selection: Selection) -> Result<SelectionOutcome, GameError> {
        match selection {
            Selection::Card(card) => self.on_card_selected(card),
            Selection::DrawPile => self.on_draw_pile_selected(),
        }
    }

    /// Handle a click on `card`, dispatched on its pile.
    ///
    /// - target, discard: ignored
    /// - draw pile: the front card becomes the new target
    /// - mine: taken if it is its column's top card, face-up, and adjacent
    ///   to the target; otherwise rejected without any change
    pub fn on_card_selected(&mut self, card: CardId) -> Result<SelectionOutcome, GameError> {
        match self.card_ref(card)?.state {
            CardState::Target | CardState::Discard => {
                trace!(card = %card, "selection ignored");
                Ok(SelectionOutcome::Ignored)
            }
            CardState::DrawPile => self.on_draw_pile_selected(),
            CardState::Mine => self.try_match(card),
        }
    }

    /// Handle a click on the draw pile. Fails with `EmptyPile` and changes
    /// nothing when it has run out.
    pub fn on_draw_pile_selected(&mut self) -> Result<SelectionOutcome, GameError> {
        let previous_target = self.piles.target();
        let card = self.draw()?;
        self.move_to_target(card)?;
        self.update_draw_pile();

        debug!(card = %card, remaining = self.piles.draw_pile().len(), "drew new target");
        Ok(SelectionOutcome::Drew {
            card,
            previous_target,
        })
    }

    fn try_match(&mut self, card: CardId) -> Result<SelectionOutcome, GameError> {
        if let Some(reason) = self.match_rejection(card)? {
            trace!(card = %card, ?reason, "match rejected");
            return Ok(SelectionOutcome::Rejected(reason));
        }

        let slot = self.card_ref(card)?.slot;
        let Some(previous_target) = self.piles.target() else {
            return Ok(SelectionOutcome::Rejected(RejectReason::NoTarget));
        };

        if let Some(slot) = slot {
            self.piles.remove_mine(slot);
        }
        self.move_to_target(card)?;
        self.refresh_mine();

        debug!(card = %card, previous = %previous_target, mine = self.piles.mine().len(), "matched");
        Ok(SelectionOutcome::Matched {
            card,
            previous_target,
        })
    }

    /// Why `card` cannot be taken from the mine, or `None` if it can.
    fn match_rejection(&self, card: CardId) -> Result<Option<RejectReason>, GameError> {
        let candidate = self.card_ref(card)?;

        let on_top = self
            .column_of(candidate)
            .is_some_and(|column| self.top_cards.is_top(column, card));
        if !on_top {
            return Ok(Some(RejectReason::NotTopCard));
        }
        if !candidate.face_up {
            return Ok(Some(RejectReason::FaceDown));
        }

        let Some(target) = self.target() else {
            return Ok(Some(RejectReason::NoTarget));
        };
        if !self.matcher.is_adjacent(candidate, target) {
            return Ok(Some(RejectReason::NotAdjacent));
        }

        Ok(None)
    }

    // === Transitions ===

    /// Remove the front card of the draw pile.
    fn draw(&mut self) -> Result<CardId, GameError> {
        self.piles.pop_draw().ok_or(GameError::EmptyPile)
    }

    /// Fill each slot, in layout order, from the front of the draw pile.
    fn layout_mine(&mut self) -> Result<(), GameError> {
        let schema = Arc::clone(&self.schema);

        for slot in schema.slots() {
            let id = self.draw()?;
            let card = self.card_mut(id)?;
            card.state = CardState::Mine;
            card.slot = Some(slot.id);
            self.piles.insert_mine(slot.id, id);

            self.place(id, placement::mine(&schema, slot));
            if !self.config.occlusion_enabled() {
                self.set_face_up(id, slot.initial_face_up);
            }
        }

        Ok(())
    }

    /// Retire the current target onto the discard history.
    fn move_to_discard(&mut self, id: CardId) -> Result<(), GameError> {
        let card = self.card_mut(id)?;
        if card.state != CardState::Target {
            return Err(GameError::InvalidTransition {
                card: id,
                from: card.state,
                to: CardState::Discard,
            });
        }
        card.state = CardState::Discard;

        self.piles.push_discard(id);
        let depth = self.piles.discard_pile().len();
        self.place(id, placement::discard(&self.schema, depth));
        self.set_face_up(id, true);
        Ok(())
    }

    /// Make `id` the target, discarding the previous one first.
    ///
    /// The caller has already taken `id` out of the draw pile or mine.
    fn move_to_target(&mut self, id: CardId) -> Result<(), GameError> {
        let from = self.card_ref(id)?.state;
        if !matches!(from, CardState::DrawPile | CardState::Mine) {
            return Err(GameError::InvalidTransition {
                card: id,
                from,
                to: CardState::Target,
            });
        }

        if let Some(previous) = self.piles.target() {
            self.move_to_discard(previous)?;
        }

        self.piles.replace_target(id);
        let card = self.card_mut(id)?;
        card.state = CardState::Target;
        card.slot = None;

        self.place(id, placement::target(&self.schema));
        self.set_face_up(id, true);
        Ok(())
    }

    /// Restack the remaining draw pile face-down.
    fn update_draw_pile(&mut self) {
        let remaining: Vec<CardId> = self.piles.draw_pile().iter().copied().collect();

        for (index, id) in remaining.into_iter().enumerate() {
            if let Some(card) = self.cards.get_mut(id.index()) {
                card.state = CardState::DrawPile;
            }
            self.place(id, placement::draw_pile(&self.schema, index));
            self.set_face_up(id, false);
        }
    }

    /// Rebuild the top-card index and, if enabled, face-up flags.
    fn refresh_mine(&mut self) {
        self.top_cards = TopCardIndex::recompute(&self.schema, self.piles.mine());

        if self.config.occlusion_enabled() {
            for (id, face_up) in self.occlusion.recompute_face_up(self.piles.mine()) {
                self.set_face_up(id, face_up);
            }
        }

        trace!(columns = self.top_cards.len(), "mine refreshed");
    }

    fn place(&mut self, card: CardId, placement: Placement) {
        self.events.push(PresentationEvent::Placed { card, placement });
    }

    /// Set a face flag, queueing a flip only when it changes.
    fn set_face_up(&mut self, id: CardId, face_up: bool) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            if card.face_up != face_up {
                card.face_up = face_up;
                self.events.push(PresentationEvent::Flipped { card: id, face_up });
            }
        }
    }

    fn card_ref(&self, id: CardId) -> Result<&Card, GameError> {
        self.cards.get(id.index()).ok_or(GameError::UnknownCard(id))
    }

    fn card_mut(&mut self, id: CardId) -> Result<&mut Card, GameError> {
        self.cards.get_mut(id.index()).ok_or(GameError::UnknownCard(id))
    }

    fn column_of(&self, card: &Card) -> Option<Column> {
        let slot = card.slot?;
        self.schema.slot(slot).map(|definition| definition.column)
    }

    // === Presentation ===

    /// Hand queued events to `presenter`, oldest first, and clear the queue.
    pub fn flush_events(&mut self, presenter: &mut impl Presenter) {
        for event in self.events.drain(..) {
            presenter.present(&event);
        }
    }

    /// Take queued events without a presenter.
    pub fn take_events(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn pending_events(&self) -> &[PresentationEvent] {
        &self.events
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn schema(&self) -> &LayoutSchema {
        &self.schema
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Every card of the session, by id.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Draw pile, front (next to draw) first.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<CardId> {
        self.piles.draw_pile()
    }

    /// Mine cards keyed by slot.
    #[must_use]
    pub fn mine(&self) -> &OrdMap<SlotId, CardId> {
        self.piles.mine()
    }

    /// Card occupying a slot.
    #[must_use]
    pub fn mine_card(&self, slot: SlotId) -> Option<&Card> {
        self.piles.mine_card(slot).and_then(|id| self.card(id))
    }

    #[must_use]
    pub fn target(&self) -> Option<&Card> {
        self.piles.target().and_then(|id| self.card(id))
    }

    /// Discard history, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardId> {
        self.piles.discard_pile()
    }

    #[must_use]
    pub fn top_cards(&self) -> &TopCardIndex {
        &self.top_cards
    }

    /// Can the player draw? Presentation should disable the pile when not.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        !self.piles.draw_pile().is_empty()
    }

    /// Mine cards that would be accepted right now, in column order.
    #[must_use]
    pub fn legal_matches(&self) -> Vec<CardId> {
        self.top_cards
            .entries()
            .into_iter()
            .map(|(_, top)| top.card)
            .filter(|&card| matches!(self.match_rejection(card), Ok(None)))
            .collect()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.piles.mine().is_empty() {
            GameStatus::Cleared
        } else if !self.can_draw() && self.legal_matches().is_empty() {
            GameStatus::Stalled
        } else {
            GameStatus::InProgress
        }
    }

    /// Do the piles partition the card set, with every card's state and
    /// slot agreeing with the pile that holds it?
    #[must_use]
    pub fn partition_holds(&self) -> bool {
        if self.piles.total_cards() != self.cards.len() {
            return false;
        }
        let mut seen = FxHashSet::default();
        if !self.piles.all_cards().all(|id| seen.insert(id)) {
            return false;
        }

        let in_state = |id: CardId, state: CardState| {
            self.card(id).is_some_and(|card| card.state == state)
        };

        self.piles.draw_pile().iter().all(|&id| in_state(id, CardState::DrawPile))
            && self.piles.mine().iter().all(|(&slot, &id)| {
                in_state(id, CardState::Mine) && self.card(id).is_some_and(|c| c.slot == Some(slot))
            })
            && self.piles.target().into_iter().all(|id| in_state(id, CardState::Target))
            && self.piles.discard_pile().iter().all(|&id| in_state(id, CardState::Discard))
    }
}
