use log::{debug, warn};

use crate::error::ActionError;
use crate::hand::Score;

use super::{PLAYER_STANDS_ON, Round, RoundState};

impl Round {
    /// Returns whether the player's total obliges them to draw again.
    ///
    /// The player draws while below 17; a bust never draws.
    #[must_use]
    pub fn player_must_draw(&self) -> bool {
        self.player
            .score()
            .total()
            .is_some_and(|value| value < PLAYER_STANDS_ON)
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the player's score after the new card. Once the player reaches
    /// 17 or busts, the round moves on to [`RoundState::Comparison`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn. If the
    /// deck is exhausted the player's turn ends and [`ActionError::NoCards`]
    /// is returned.
    pub fn hit(&mut self) -> Result<Score, ActionError> {
        if self.state != RoundState::PlayerDrawing {
            return Err(ActionError::InvalidState);
        }

        let Some(card) = self.deck.draw() else {
            warn!("deck exhausted while the player was drawing");
            self.set_state(RoundState::Comparison);
            return Err(ActionError::NoCards);
        };

        debug!("player draws {card}");
        self.player.add_card(card);

        let score = self.player.score();
        if !self.player_must_draw() {
            self.set_state(RoundState::Comparison);
        }

        Ok(score)
    }
}
