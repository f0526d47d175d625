//! Error types for deck and round operations.

use thiserror::Error;

/// Errors that can occur when shuffling a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// The deck has already been shuffled once.
    #[error("deck has already been shuffled")]
    AlreadyShuffled,
    /// Cards have already been drawn from the deck.
    #[error("cards have already been drawn from the deck")]
    CardsDrawn,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when the player draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for drawing.
    #[error("invalid round state for drawing")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for showdown.
    #[error("invalid round state for showdown")]
    InvalidState,
}

/// Errors that can occur while playing a round on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The initial deal failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// The showdown failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
    /// Writing the transcript failed.
    #[error("failed to write transcript")]
    Write(#[from] core::fmt::Error),
}
