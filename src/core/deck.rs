//! Deck construction: the ordered card sequence handed to `deal`.

use super::card::{PlayingCard, Rank, Suit};
use super::rng::GameRng;

/// Cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// All 52 distinct cards, suit-major, Ace to King within each suit.
#[must_use]
pub fn standard_deck() -> Vec<PlayingCard> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| PlayingCard::new(rank, suit)))
        .collect()
}

/// A standard deck shuffled with a dedicated "deck" stream of `rng`.
#[must_use]
pub fn shuffled_deck(rng: &GameRng) -> Vec<PlayingCard> {
    let mut deck = standard_deck();
    rng.for_context("deck").shuffle(&mut deck);
    deck
}
