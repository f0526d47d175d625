//! A single-round blackjack simulator.
//!
//! The crate provides a [`Deck`] with a one-time shuffle and single-use
//! draws, a [`Hand`] that scores aces as 11 or 1, and a [`Round`] that deals,
//! lets the player draw to 17 and settles the outcome. The [`console`]
//! module writes the round as a text transcript.
//!
//! # Example
//!
//! ```
//! use bjcli::{Round, RoundOptions, RoundState};
//!
//! let mut round = Round::new(RoundOptions::default().with_seed(42));
//! let result = round.play().unwrap();
//! assert_eq!(round.state(), RoundState::Done);
//! let _ = result.outcome;
//! ```

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, PlayError, ShowdownError, ShuffleError};
pub use game::{PLAYER_STANDS_ON, Round, RoundState};
pub use hand::{BLACKJACK, Hand, Ranks, Score};
pub use options::RoundOptions;
pub use result::{Outcome, RoundResult};
