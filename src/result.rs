//! Round result types for showdown.

use core::fmt;

use crate::hand::Score;

/// Result of the round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Equal totals.
    Tie,
}

impl Outcome {
    /// Decides the player's outcome from both final scores.
    ///
    /// A player bust loses before the dealer's hand is looked at; a dealer
    /// bust is checked before any totals are compared.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::{Outcome, Score};
    ///
    /// assert_eq!(Outcome::settle(Score::Bust, Score::Bust), Outcome::Lose);
    /// assert_eq!(Outcome::settle(Score::Total(12), Score::Bust), Outcome::Win);
    /// ```
    #[must_use]
    pub const fn settle(player: Score, dealer: Score) -> Self {
        match (player, dealer) {
            (Score::Bust, _) => Self::Lose,
            (Score::Total(_), Score::Bust) => Self::Win,
            (Score::Total(player), Score::Total(dealer)) => {
                if player > dealer {
                    Self::Win
                } else if player < dealer {
                    Self::Lose
                } else {
                    Self::Tie
                }
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "PLAYER WINS!",
            Self::Lose => "PLAYER LOSES...",
            Self::Tie => "DEALER AND PLAYER TIE NO WIN",
        })
    }
}

/// Result of the round after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: Score,
    /// The dealer's final score.
    pub dealer_score: Score,
    /// Whether the player was dealt a natural.
    pub player_blackjack: bool,
    /// Cards left in the deck when the round ended.
    pub cards_remaining: usize,
}
