use log::debug;

use crate::error::DealError;

use super::{Round, RoundState};

/// Cards handed to each side by the initial deal.
const INITIAL_CARDS: usize = 2;

impl Round {
    /// Deals two cards to the player, then two to the dealer.
    ///
    /// Only the dealer's first card counts as shown. If the player's opening
    /// total already ends their turn, the round moves straight to
    /// [`RoundState::Comparison`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the initial deal or
    /// the deck holds fewer than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::DealingInitial {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_CARDS * 2 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..INITIAL_CARDS {
            if let Some(card) = self.deck.draw() {
                self.player.add_card(card);
            }
        }
        for _ in 0..INITIAL_CARDS {
            if let Some(card) = self.deck.draw() {
                self.dealer.add_card(card);
            }
        }

        debug!(
            "initial deal: player {} ({}), dealer shows {}",
            self.player.ranks(),
            self.player.score(),
            self.dealer.up_card_score()
        );

        if self.player_must_draw() {
            self.set_state(RoundState::PlayerDrawing);
        } else {
            self.set_state(RoundState::Comparison);
        }

        Ok(())
    }
}
