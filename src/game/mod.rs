//! Round engine and state management.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{ActionError, PlayError};
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::result::RoundResult;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::RoundState;

/// The player keeps drawing while their total is below this.
pub const PLAYER_STANDS_ON: u8 = 17;

/// A single round of blackjack between one player and the dealer.
///
/// The round owns the deck and both hands. Cards move out of the deck and
/// into a hand as they are dealt; all of it is dropped with the round.
#[derive(Debug)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    ///
    /// The shuffle is seeded from `options.seed` when set, otherwise from
    /// operating system entropy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::{DECK_SIZE, Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default().with_seed(42));
    /// assert_eq!(round.state(), RoundState::DealingInitial);
    /// assert_eq!(round.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions) -> Self {
        let mut rng = match options.seed {
            Some(seed) => {
                debug!("seeding shuffle with {seed}");
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_os_rng(),
        };

        Self::with_deck(Deck::shuffled(&mut rng))
    }

    /// Creates a round that deals from `deck` exactly as given.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::DealingInitial,
        }
    }

    /// Plays the whole round: initial deal, player draws, then showdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started or the deck cannot
    /// cover the initial deal.
    pub fn play(&mut self) -> Result<RoundResult, PlayError> {
        self.deal()?;
        self.play_player();
        Ok(self.showdown()?)
    }

    /// Draws for the player until the round leaves [`RoundState::PlayerDrawing`].
    ///
    /// Returns the number of cards drawn. Running out of cards ends the
    /// player's turn.
    pub fn play_player(&mut self) -> usize {
        let mut drawn = 0;
        while self.state == RoundState::PlayerDrawing {
            match self.hit() {
                Ok(_) => drawn += 1,
                Err(ActionError::NoCards | ActionError::InvalidState) => break,
            }
        }
        drawn
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    fn set_state(&mut self, state: RoundState) {
        debug!("round state {:?} -> {state:?}", self.state);
        self.state = state;
    }
}
