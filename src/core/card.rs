//! Card identity and runtime card state.
//!
//! A `PlayingCard` is the printed face (rank and suit). A `Card` is the
//! entity the session owns: one per dealt playing card, tracking which
//! pile it is in, whether it is face-up, and the tableau slot it occupies
//! while in the mine.
//!
//! ## Usage
//!
//! ```
//! use prospector::core::{PlayingCard, Rank, Suit};
//!
//! let card = PlayingCard::new(Rank::QUEEN, Suit::Hearts);
//! assert_eq!(card.rank.value(), 12);
//! assert_eq!(card.to_string(), "QH");
//! ```

use serde::{Deserialize, Serialize};

use crate::layout::SlotId;

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Number of distinct ranks.
    pub const COUNT: u8 = 13;

    /// Create a rank, returning `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the numeric rank value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=Self::COUNT).map(Rank)
    }

    fn symbol(self) -> char {
        match self.0 {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            n => char::from(b'0' + n),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// The printed identity of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayingCard {
    pub rank: Rank,
    pub suit: Suit,
}

impl PlayingCard {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

/// Identifier of a card entity within a session.
///
/// Assigned at deal time from the card's position in the supplied deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which pile a card currently belongs to.
///
/// Legal transitions: `DrawPile -> Mine` (deal), `DrawPile -> Target`,
/// `Mine -> Target`, `Target -> Discard`. `Discard` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    DrawPile,
    Mine,
    Target,
    Discard,
}

impl std::fmt::Display for CardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardState::DrawPile => "drawpile",
            CardState::Mine => "mine",
            CardState::Target => "target",
            CardState::Discard => "discard",
        };
        f.write_str(name)
    }
}

/// A card entity owned by the session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Rank and suit.
    pub face: PlayingCard,

    /// Is the face showing?
    pub face_up: bool,

    /// Current pile.
    pub state: CardState,

    /// Tableau slot, only while `state == Mine`.
    pub slot: Option<SlotId>,
}

impl Card {
    /// Create a face-down card sitting in the draw pile.
    #[must_use]
    pub fn new(id: CardId, face: PlayingCard) -> Self {
        Self {
            id,
            face,
            face_up: false,
            state: CardState::DrawPile,
            slot: None,
        }
    }

    /// Shortcut for `self.face.rank`.
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.face.rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(0), None);
        assert_eq!(Rank::new(1), Some(Rank::ACE));
        assert_eq!(Rank::new(13), Some(Rank::KING));
        assert_eq!(Rank::new(14), None);
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayingCard::new(Rank::ACE, Suit::Spades).to_string(), "AS");
        assert_eq!(PlayingCard::new(Rank::new(10).unwrap(), Suit::Clubs).to_string(), "TC");
        assert_eq!(PlayingCard::new(Rank::new(7).unwrap(), Suit::Diamonds).to_string(), "7D");
        assert_eq!(format!("{}", CardId(9)), "Card(9)");
        assert_eq!(CardState::DrawPile.to_string(), "drawpile");
    }

    #[test]
    fn test_new_card_starts_in_draw_pile() {
        let card = Card::new(CardId(3), PlayingCard::new(Rank::KING, Suit::Hearts));
        assert_eq!(card.state, CardState::DrawPile);
        assert!(!card.face_up);
        assert_eq!(card.slot, None);
        assert_eq!(card.rank(), Rank::KING);
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId(1), PlayingCard::new(Rank::QUEEN, Suit::Clubs));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
