//! Plays one round of blackjack and prints it.

use log::{error, info};

use bjcli::{Round, RoundOptions, console};

fn main() {
    env_logger::init();

    let mut round = Round::new(RoundOptions::default());
    let mut transcript = String::new();

    match console::play_round(&mut round, &mut transcript) {
        Ok(result) => info!(
            "round over: {:?} (player {}, dealer {})",
            result.outcome, result.player_score, result.dealer_score
        ),
        Err(err) => error!("round aborted: {err}"),
    }

    print!("{transcript}");
}
