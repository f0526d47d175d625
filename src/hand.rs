//! Hand representation and blackjack scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// Highest playable total.
pub const BLACKJACK: u8 = 21;

/// Returns the total after soft-ace conversions and the number of aces still
/// counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, u8) {
    let mut value: u8 = 0;
    let mut soft_aces: u8 = 0;

    for card in cards {
        if card.rank() == Rank::Ace {
            soft_aces += 1;
        }
        value = value.saturating_add(card.rank().base_value());
    }

    while value > BLACKJACK && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    (value, soft_aces)
}

/// The score of a hand.
///
/// `Bust` carries no number and `Score` has no ordering, so a busted hand
/// cannot be compared against a playable total by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// A playable total, at most 21.
    Total(u8),
    /// Over 21 even with every ace counted as 1.
    Bust,
}

impl Score {
    /// Returns the playable total, or `None` for a bust.
    #[must_use]
    pub const fn total(self) -> Option<u8> {
        match self {
            Self::Total(value) => Some(value),
            Self::Bust => None,
        }
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        matches!(self, Self::Bust)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total(value) => write!(f, "{value}"),
            Self::Bust => f.write_str("bust"),
        }
    }
}

/// A hand of cards dealt to the player or the dealer.
#[derive(Debug, Default)]
pub struct Hand {
    /// Cards in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, which is the one shown face up.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Scores the hand.
    ///
    /// Every ace starts at 11 and is dropped to 1, one at a time, while the
    /// total is over 21. If the total is still over 21 the hand is
    /// [`Score::Bust`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::{Card, Hand, Rank, Score, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
    /// hand.add_card(Card::new(Rank::Ace, Suit::Clubs));
    /// hand.add_card(Card::new(Rank::Nine, Suit::Spades));
    /// assert_eq!(hand.score(), Score::Total(21));
    /// ```
    #[must_use]
    pub fn score(&self) -> Score {
        match evaluate_cards(&self.cards) {
            (value, _) if value > BLACKJACK => Score::Bust,
            (value, _) => Score::Total(value),
        }
    }

    /// Scores the up card alone, which is all the dealer shows before showdown.
    ///
    /// An empty hand scores `Total(0)`.
    #[must_use]
    pub fn up_card_score(&self) -> Score {
        Score::Total(self.up_card().map_or(0, |card| card.rank().base_value()))
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let (value, soft_aces) = evaluate_cards(&self.cards);
        soft_aces > 0 && value <= BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == Score::Total(BLACKJACK)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a displayable list of the hand's ranks, e.g. `A 10 K`.
    #[must_use]
    pub fn ranks(&self) -> Ranks<'_> {
        Ranks(&self.cards)
    }
}

/// Space-separated rank symbols of a hand, see [`Hand::ranks`].
#[derive(Debug, Clone, Copy)]
pub struct Ranks<'a>(&'a [Card]);

impl fmt::Display for Ranks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card.rank())?;
        }
        Ok(())
    }
}
