//! Console transcript of a round.
//!
//! The transcript is written to any [`core::fmt::Write`] sink, so the binary
//! can print it and tests can compare it against a `String`.

use core::fmt::{self, Write};

use crate::error::{ActionError, PlayError};
use crate::game::{Round, RoundState};
use crate::hand::{BLACKJACK, Hand, Score};
use crate::result::RoundResult;

const RULE: &str = "-----------------";

/// Name printed for the player's hand.
pub const PLAYER: &str = "Player";
/// Name printed for the dealer's hand.
pub const DEALER: &str = "Dealer";

fn write_banner<W: Write>(out: &mut W, title: &str) -> fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")
}

/// Writes `<name> hand value: <n>` or `<name> busted!`.
fn write_score<W: Write>(out: &mut W, name: &str, score: Score) -> fmt::Result {
    match score {
        Score::Total(value) => writeln!(out, "{name} hand value: {value}"),
        Score::Bust => writeln!(out, "{name} busted!"),
    }
}

fn write_player_hand<W: Write>(out: &mut W, hand: &Hand) -> fmt::Result {
    write_score(out, PLAYER, hand.score())?;
    writeln!(out, "{}", hand.ranks())?;
    writeln!(out)
}

/// Plays `round` from the initial deal to the outcome, writing each step.
///
/// A "Next deal" block is written for every card the player draws. Running
/// out of cards quietly ends the player's turn.
///
/// # Example
///
/// ```
/// use bjcli::{Round, RoundOptions, console};
///
/// let mut round = Round::new(RoundOptions::default().with_seed(3));
/// let mut transcript = String::new();
/// let result = console::play_round(&mut round, &mut transcript).unwrap();
/// assert!(transcript.ends_with("GAME OVER!\n-----------------\n"));
/// assert!(transcript.contains(&result.outcome.to_string()));
/// ```
///
/// # Errors
///
/// Returns an error if the round has already been dealt, the deck cannot
/// cover the initial deal, or the sink rejects a write.
pub fn play_round<W: Write>(round: &mut Round, out: &mut W) -> Result<RoundResult, PlayError> {
    round.deal()?;

    write_banner(out, "First deal.")?;
    writeln!(out)?;
    if round.player().is_blackjack() {
        writeln!(out, "{PLAYER} got BLACKJACK!")?;
        writeln!(out, "{}", round.player().ranks())?;
        writeln!(out)?;
    } else {
        write_player_hand(out, round.player())?;
    }

    write!(out, "Known ")?;
    write_score(out, DEALER, round.dealer().up_card_score())?;
    writeln!(out)?;

    while round.state() == RoundState::PlayerDrawing {
        match round.hit() {
            Ok(_) => {
                write_banner(out, "Next deal.")?;
                writeln!(out)?;
                write_player_hand(out, round.player())?;
            }
            Err(ActionError::NoCards | ActionError::InvalidState) => break,
        }
    }

    let result = round.showdown()?;

    write!(out, "Final ")?;
    write_score(out, DEALER, result.dealer_score)?;
    writeln!(out)?;

    if let Score::Total(value) = result.player_score {
        if value != BLACKJACK {
            writeln!(out, "{PLAYER} Calls!")?;
            write!(out, "Final ")?;
            write_score(out, PLAYER, result.player_score)?;
            writeln!(out)?;
        }
    }

    writeln!(out, "{}", result.outcome)?;
    writeln!(out)?;
    write_banner(out, "GAME OVER!")?;

    Ok(result)
}
