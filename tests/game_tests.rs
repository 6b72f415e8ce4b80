//! Session integration tests.
//!
//! These drive `GameController` through the public input API and check
//! pile contents, rejections, and presentation output.

use std::sync::Arc;

use prospector::core::{standard_deck, FaceUpPolicy, GameConfig, PlayingCard, Rank, Suit};
use prospector::game::{GameController, GameStatus, RejectReason, Selection, SelectionOutcome};
use prospector::layout::{Column, LayoutSchema, SlotId, TRI_PEAKS_LAYOUT};
use prospector::presentation::{PresentationEvent, SortingLayer};
use prospector::{CardState, GameError};

// =============================================================================
// Helpers
// =============================================================================

fn card(rank: u8, suit: Suit) -> PlayingCard {
    PlayingCard::new(Rank::new(rank).unwrap(), suit)
}

/// A standard deck reordered so `front` is dealt first.
fn deck_starting_with(front: &[PlayingCard]) -> Vec<PlayingCard> {
    let mut deck = front.to_vec();
    deck.extend(standard_deck().into_iter().filter(|c| !front.contains(c)));
    deck
}

/// Two slots in Row0 with ids 3 and 7 (dealt in that order).
fn two_slot_layout(face_up_3: u8, face_up_7: u8) -> Arc<LayoutSchema> {
    let document = format!(
        r#"{{
            "multiplier": {{ "x": 1, "y": 1 }},
            "slots": [
                {{ "id": 3, "x": 0, "y": 0, "layer": 0, "faceup": {face_up_3} }},
                {{ "id": 7, "x": 1, "y": 0, "layer": 0, "faceup": {face_up_7} }},
                {{ "type": "drawpile", "x": 5, "y": 0, "layer": 5, "xstagger": 0.1 }},
                {{ "type": "discardpile", "x": 3, "y": 0, "layer": 4 }}
            ]
        }}"#
    );
    Arc::new(LayoutSchema::parse(&document).unwrap())
}

fn tri_peaks() -> Arc<LayoutSchema> {
    Arc::new(LayoutSchema::parse(TRI_PEAKS_LAYOUT).unwrap())
}

/// Tri-peaks deal with a Seven at slot 26, a Six at slot 27 and a Five
/// as the first target. Those two slots are the only ones covering slot 17.
fn covered_slot_deck() -> Vec<PlayingCard> {
    let scripted = [card(7, Suit::Hearts), card(6, Suit::Hearts), card(5, Suit::Hearts)];
    let mut front: Vec<PlayingCard> = standard_deck()
        .into_iter()
        .filter(|c| !scripted.contains(c))
        .take(26)
        .collect();
    front.extend(scripted);
    deck_starting_with(&front)
}

fn slot_declared() -> GameConfig {
    GameConfig::new().with_face_up_policy(FaceUpPolicy::SlotDeclared)
}

// =============================================================================
// Top-card rule
// =============================================================================

/// The higher slot id is the reachable card of its column.
#[test]
fn test_lower_slot_in_column_is_rejected() {
    let six = card(6, Suit::Hearts);
    let deck = deck_starting_with(&[six, card(9, Suit::Clubs), card(5, Suit::Spades)]);
    let mut game = GameController::deal(two_slot_layout(1, 1), deck, GameConfig::default()).unwrap();

    let row0 = Column::from_layer(0).unwrap();
    let top = game.top_cards().get(row0).unwrap();
    assert_eq!(top.slot, SlotId(7));

    // Slot 3 holds a face-up Six against a Five, but is not on top
    let low = game.mine_card(SlotId(3)).unwrap().id;
    assert!(game.card(low).unwrap().face_up);

    let before = game.clone();
    let outcome = game.on_card_selected(low).unwrap();

    assert_eq!(outcome, SelectionOutcome::Rejected(RejectReason::NotTopCard));
    assert_eq!(game.mine(), before.mine());
    assert_eq!(game.discard_pile(), before.discard_pile());
    assert_eq!(game.target(), before.target());
}

// =============================================================================
// Matching
// =============================================================================

/// Five on target, face-up Six on top: the Six becomes the target.
#[test]
fn test_adjacent_top_card_matches() {
    let five = card(5, Suit::Spades);
    let six = card(6, Suit::Hearts);
    let deck = deck_starting_with(&[card(9, Suit::Clubs), six, five]);
    let mut game = GameController::deal(two_slot_layout(1, 1), deck, GameConfig::default()).unwrap();

    let six_id = game.mine_card(SlotId(7)).unwrap().id;
    let five_id = game.target().unwrap().id;
    assert_eq!(game.target().unwrap().face, five);

    let outcome = game.select(Selection::Card(six_id)).unwrap();
    assert_eq!(
        outcome,
        SelectionOutcome::Matched {
            card: six_id,
            previous_target: five_id
        }
    );

    assert!(game.mine_card(SlotId(7)).is_none());
    assert_eq!(game.target().unwrap().face, six);
    assert_eq!(game.discard_pile().last(), Some(&five_id));
    assert_eq!(game.card(five_id).unwrap().state, CardState::Discard);
    assert!(game.partition_holds());

    // Slot 3 is now the top of Row0
    let row0 = Column::from_layer(0).unwrap();
    assert_eq!(game.top_cards().get(row0).unwrap().slot, SlotId(3));
}

/// Face-down cards cannot be taken even when they would match.
#[test]
fn test_face_down_card_is_rejected() {
    let deck = deck_starting_with(&[card(9, Suit::Clubs), card(6, Suit::Hearts), card(5, Suit::Spades)]);
    let mut game = GameController::deal(two_slot_layout(1, 0), deck, slot_declared()).unwrap();

    let six = game.mine_card(SlotId(7)).unwrap().id;
    assert!(!game.card(six).unwrap().face_up);

    let before = game.clone();
    let outcome = game.on_card_selected(six).unwrap();

    assert_eq!(outcome, SelectionOutcome::Rejected(RejectReason::FaceDown));
    assert_eq!(game.mine(), before.mine());
    assert_eq!(game.discard_pile(), before.discard_pile());
    assert_eq!(game.target(), before.target());
}

/// Ranks two apart do not match.
#[test]
fn test_non_adjacent_card_is_rejected() {
    let deck = deck_starting_with(&[card(9, Suit::Clubs), card(7, Suit::Hearts), card(5, Suit::Spades)]);
    let mut game = GameController::deal(two_slot_layout(1, 1), deck, GameConfig::default()).unwrap();

    let seven = game.mine_card(SlotId(7)).unwrap().id;
    let outcome = game.on_card_selected(seven).unwrap();
    assert_eq!(outcome, SelectionOutcome::Rejected(RejectReason::NotAdjacent));
    assert!(game.legal_matches().is_empty());
}

/// King onto Ace only with wraparound enabled.
#[test]
fn test_wraparound_is_configurable() {
    let king = PlayingCard::new(Rank::KING, Suit::Hearts);
    let ace = PlayingCard::new(Rank::ACE, Suit::Spades);
    let deck = deck_starting_with(&[card(9, Suit::Clubs), king, ace]);

    let mut plain = GameController::deal(two_slot_layout(1, 1), deck.clone(), GameConfig::default()).unwrap();
    let king_id = plain.mine_card(SlotId(7)).unwrap().id;
    assert_eq!(
        plain.on_card_selected(king_id).unwrap(),
        SelectionOutcome::Rejected(RejectReason::NotAdjacent)
    );

    let config = GameConfig::default().with_rank_wrap(true);
    let mut wrapping = GameController::deal(two_slot_layout(1, 1), deck, config).unwrap();
    assert!(wrapping.on_card_selected(king_id).unwrap().is_applied());
    assert_eq!(wrapping.target().unwrap().face, king);
}

// =============================================================================
// Draw pile
// =============================================================================

/// Clicking any draw pile card draws the front one.
#[test]
fn test_draw_pile_card_draws_front() {
    let mut game = GameController::deal(tri_peaks(), standard_deck(), GameConfig::default()).unwrap();

    let front = *game.draw_pile().front().unwrap();
    let back = *game.draw_pile().back().unwrap();
    let old_target = game.target().unwrap().id;

    let outcome = game.on_card_selected(back).unwrap();
    assert_eq!(
        outcome,
        SelectionOutcome::Drew {
            card: front,
            previous_target: Some(old_target)
        }
    );
    assert_eq!(game.target().unwrap().id, front);
    assert_eq!(game.card(back).unwrap().state, CardState::DrawPile);
    assert_eq!(game.discard_pile().len(), 1);
    assert!(game.partition_holds());
}

/// An empty draw pile surfaces `EmptyPile` and leaves the session alone.
#[test]
fn test_empty_draw_pile() {
    // 2 slots + 1 target: nothing left to draw
    let deck = vec![card(9, Suit::Clubs), card(7, Suit::Hearts), card(5, Suit::Spades)];
    let mut game = GameController::deal(two_slot_layout(1, 1), deck, GameConfig::default()).unwrap();
    assert!(!game.can_draw());
    game.take_events();

    let before = game.clone();
    let err = game.select(Selection::DrawPile).unwrap_err();

    assert_eq!(err, GameError::EmptyPile);
    assert_eq!(game.mine(), before.mine());
    assert_eq!(game.target(), before.target());
    assert_eq!(game.discard_pile(), before.discard_pile());
    assert!(game.pending_events().is_empty());
}

/// Re-clicking the target does nothing.
#[test]
fn test_target_click_ignored() {
    let mut game = GameController::deal(tri_peaks(), standard_deck(), GameConfig::default()).unwrap();
    let target = game.target().unwrap().id;
    game.take_events();

    assert_eq!(game.on_card_selected(target).unwrap(), SelectionOutcome::Ignored);
    assert!(game.pending_events().is_empty());

    game.on_draw_pile_selected().unwrap();
    // Now in the discard pile, still ignored
    assert_eq!(game.on_card_selected(target).unwrap(), SelectionOutcome::Ignored);
}

// =============================================================================
// Occlusion
// =============================================================================

/// Taking both covering cards turns the covered card face-up.
#[test]
fn test_match_reveals_covered_card() {
    // Slots 26 and 27 cover slot 17. Deal 26 = Seven, 27 = Six, target = Five.
    let deck = covered_slot_deck();

    let mut game = GameController::deal(tri_peaks(), deck, GameConfig::default()).unwrap();
    let covered = game.mine_card(SlotId(17)).unwrap().id;
    assert!(!game.card(covered).unwrap().face_up);
    game.take_events();

    let six = game.mine_card(SlotId(27)).unwrap().id;
    assert!(game.on_card_selected(six).unwrap().is_applied());
    assert!(!game.card(covered).unwrap().face_up);

    let seven = game.mine_card(SlotId(26)).unwrap().id;
    assert!(game.on_card_selected(seven).unwrap().is_applied());
    assert!(game.card(covered).unwrap().face_up);

    let events = game.take_events();
    assert!(events.contains(&PresentationEvent::Flipped {
        card: covered,
        face_up: true
    }));
}

/// With the slot-declared policy, faces never change on the mine.
#[test]
fn test_slot_declared_keeps_faces() {
    let deck = covered_slot_deck();

    let mut game = GameController::deal(tri_peaks(), deck, slot_declared()).unwrap();
    for id in [27, 26] {
        let next = game.mine_card(SlotId(id)).unwrap().id;
        assert!(game.on_card_selected(next).unwrap().is_applied());
    }
    assert!(!game.mine_card(SlotId(17)).unwrap().face_up);
}

// =============================================================================
// Presentation
// =============================================================================

/// Deal places every card and shows the draw pile face-down.
#[test]
fn test_deal_events() {
    let mut game = GameController::deal(tri_peaks(), standard_deck(), GameConfig::default()).unwrap();
    let mut rendered: Vec<PresentationEvent> = Vec::new();
    game.flush_events(&mut rendered);

    let placed = |id| {
        rendered.iter().rev().find_map(|event| match event {
            PresentationEvent::Placed { card, placement } if *card == id => Some(*placement),
            _ => None,
        })
    };

    for card in game.cards() {
        assert!(placed(card.id).is_some(), "{} never placed", card.id);
    }

    let target = game.target().unwrap().id;
    assert_eq!(placed(target).unwrap().layer, SortingLayer::Target);

    let front = *game.draw_pile().front().unwrap();
    assert_eq!(placed(front).unwrap().layer.to_string(), "Draw");
    assert!(game.pending_events().is_empty());
}

// =============================================================================
// Status
// =============================================================================

/// Clearing the mine finishes the game.
#[test]
fn test_cleared_status() {
    let deck = deck_starting_with(&[card(7, Suit::Clubs), card(6, Suit::Hearts), card(5, Suit::Spades)]);
    let mut game = GameController::deal(two_slot_layout(1, 1), deck, GameConfig::default()).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    let six = game.mine_card(SlotId(7)).unwrap().id;
    let seven = game.mine_card(SlotId(3)).unwrap().id;
    game.on_card_selected(six).unwrap();
    assert_eq!(game.legal_matches(), vec![seven]);
    game.on_card_selected(seven).unwrap();

    assert!(game.mine().is_empty());
    assert_eq!(game.status(), GameStatus::Cleared);
}

/// No draws and no matches left.
#[test]
fn test_stalled_status() {
    let deck = vec![card(9, Suit::Clubs), card(7, Suit::Hearts), card(5, Suit::Spades)];
    let game = GameController::deal(two_slot_layout(1, 1), deck, GameConfig::default()).unwrap();
    assert_eq!(game.status(), GameStatus::Stalled);
}

// =============================================================================
// Seeded play
// =============================================================================

/// Same seed, same deal.
#[test]
fn test_seeded_deal_is_deterministic() {
    let a = GameController::deal_seeded(tri_peaks(), 7, GameConfig::default()).unwrap();
    let b = GameController::deal_seeded(tri_peaks(), 7, GameConfig::default()).unwrap();

    let faces = |game: &GameController| game.cards().map(|c| c.face).collect::<Vec<_>>();
    assert_eq!(faces(&a), faces(&b));
    assert_eq!(a.target(), b.target());
}

/// Greedy play to the end never breaks the pile partition.
#[test]
fn test_greedy_game_to_completion() {
    let mut game = GameController::deal_seeded(tri_peaks(), 12345, GameConfig::default()).unwrap();
    let mut moves = 0;

    while game.status() == GameStatus::InProgress && moves < 200 {
        let selection = match game.legal_matches().first() {
            Some(&card) => Selection::Card(card),
            None => Selection::DrawPile,
        };
        assert!(game.select(selection).unwrap().is_applied());
        assert!(game.partition_holds());
        moves += 1;
    }

    assert_ne!(game.status(), GameStatus::InProgress);
    assert!(!game.can_draw() || game.mine().is_empty());
}
