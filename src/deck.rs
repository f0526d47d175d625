//! The deck: construction, a single shuffle, and single-use draws.

extern crate alloc;

use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShuffleError;

/// A deck of cards.
///
/// The top of the deck is the back of the internal vector, so drawing is an
/// O(1) `pop` that leaves the remaining order untouched.
#[derive(Debug)]
pub struct Deck {
    /// Remaining cards, bottom to top.
    cards: Vec<Card>,
    /// Whether [`Deck::shuffle`] has already run.
    shuffled: bool,
    /// Number of cards drawn so far.
    drawn: usize,
}

impl Deck {
    /// Creates a full, ordered 52-card deck.
    ///
    /// Cards are laid out suit-major (hearts, diamonds, clubs, spades) and
    /// rank-minor (ace to king). The last card pushed, the king of spades, is
    /// the top of an unshuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self {
            cards,
            shuffled: false,
            drawn: 0,
        }
    }

    /// Creates a deck that yields `cards` in the given order.
    ///
    /// The first card of the iterator is the first card drawn. The deck is
    /// not shuffled and no uniqueness check is made.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::from_draw_order([
    ///     Card::new(Rank::Ace, Suit::Spades),
    ///     Card::new(Rank::Two, Suit::Hearts),
    /// ]);
    /// assert_eq!(deck.draw().map(|c| c.rank()), Some(Rank::Ace));
    /// ```
    #[must_use]
    pub fn from_draw_order<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();

        Self {
            cards,
            shuffled: false,
            drawn: 0,
        }
    }

    /// Creates a full deck and shuffles it.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
    /// assert!(deck.is_shuffled());
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.permute(rng);
        deck
    }

    /// Shuffles the remaining cards into a uniformly random order.
    ///
    /// A deck can be shuffled once, before anything has been drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::AlreadyShuffled`] on a second call and
    /// [`ShuffleError::CardsDrawn`] once a card has left the deck. The deck
    /// is left unchanged in both cases.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ShuffleError> {
        if self.shuffled {
            return Err(ShuffleError::AlreadyShuffled);
        }
        if self.drawn > 0 {
            return Err(ShuffleError::CardsDrawn);
        }

        self.permute(rng);
        Ok(())
    }

    fn permute<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.shuffled = true;
        debug!("shuffled {} cards", self.cards.len());
    }

    /// Draws the top card.
    ///
    /// Returns `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.drawn += 1;
        trace!("drew {card}, {} left", self.cards.len());
        Some(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck has been shuffled.
    #[must_use]
    pub const fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Returns the remaining cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
