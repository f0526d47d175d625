use log::debug;

use crate::error::ShowdownError;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

impl Round {
    /// Compares the final hands and ends the round.
    ///
    /// The dealer stands on the two cards from the initial deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in comparison state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::Comparison {
            return Err(ShowdownError::InvalidState);
        }

        let player_score = self.player.score();
        let dealer_score = self.dealer.score();
        let outcome = Outcome::settle(player_score, dealer_score);
        debug!("showdown: player {player_score}, dealer {dealer_score}, {outcome:?}");

        self.set_state(RoundState::Done);

        Ok(RoundResult {
            outcome,
            player_score,
            dealer_score,
            player_blackjack: self.player.is_blackjack(),
            cards_remaining: self.deck.len(),
        })
    }
}
