//! Console transcript tests.

use bjcli::{Card, Deck, Outcome, PlayError, Rank, Round, Score, ShowdownError, Suit, console};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn transcript_for(draws: impl IntoIterator<Item = Card>) -> (String, Outcome) {
    let mut round = Round::with_deck(Deck::from_draw_order(draws));
    let mut out = String::new();
    let result = console::play_round(&mut round, &mut out).unwrap();
    (out, result.outcome)
}

#[test]
fn player_draws_once_and_wins() {
    let (out, outcome) = transcript_for([
        card(Rank::Ten, Suit::Hearts),    // player
        card(Rank::Five, Suit::Clubs),    // player
        card(Rank::Seven, Suit::Diamonds), // dealer up
        card(Rank::King, Suit::Spades),   // dealer
        card(Rank::Four, Suit::Hearts),   // player hit
    ]);

    let expected = "\
-----------------
First deal.
-----------------

Player hand value: 15
10 5

Known Dealer hand value: 7

-----------------
Next deal.
-----------------

Player hand value: 19
10 5 4

Final Dealer hand value: 17

Player Calls!
Final Player hand value: 19

PLAYER WINS!

-----------------
GAME OVER!
-----------------
";
    assert_eq!(out, expected);
    assert_eq!(outcome, Outcome::Win);
}

#[test]
fn player_busts_and_loses() {
    let (out, outcome) = transcript_for([
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Nine, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ]);

    let expected = "\
-----------------
First deal.
-----------------

Player hand value: 16
10 6

Known Dealer hand value: 9

-----------------
Next deal.
-----------------

Player busted!
10 6 K

Final Dealer hand value: 18

PLAYER LOSES...

-----------------
GAME OVER!
-----------------
";
    assert_eq!(out, expected);
    assert_eq!(outcome, Outcome::Lose);
}

#[test]
fn natural_is_announced_and_skips_drawing() {
    let (out, outcome) = transcript_for([
        card(Rank::Ace, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Queen, Suit::Spades),
    ]);

    let expected = "\
-----------------
First deal.
-----------------

Player got BLACKJACK!
A K

Known Dealer hand value: 10

Final Dealer hand value: 20

PLAYER WINS!

-----------------
GAME OVER!
-----------------
";
    assert_eq!(out, expected);
    assert_eq!(outcome, Outcome::Win);
}

#[test]
fn ace_up_card_shows_eleven_and_tie_is_reported() {
    let (out, outcome) = transcript_for([
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Eight, Suit::Spades),
    ]);

    assert!(out.contains("Known Dealer hand value: 11\n"));
    assert!(out.contains("Final Dealer hand value: 19\n"));
    assert!(out.contains("Player Calls!\nFinal Player hand value: 19\n"));
    assert!(out.contains("DEALER AND PLAYER TIE NO WIN\n"));
    assert!(!out.contains("Next deal."));
    assert_eq!(outcome, Outcome::Tie);
}

#[test]
fn twenty_one_after_drawing_skips_the_call() {
    let (out, _) = transcript_for([
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Jack, Suit::Hearts),
    ]);

    assert!(out.contains("Player hand value: 21\n5 6 J\n"));
    assert!(!out.contains("Player Calls!"));
    assert!(out.contains("PLAYER WINS!"));
}

#[test]
fn exhausted_deck_still_reaches_an_outcome() {
    let (out, outcome) = transcript_for([
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Spades),
    ]);

    assert!(!out.contains("Next deal."));
    assert!(out.contains("Final Player hand value: 5\n"));
    assert_eq!(outcome, Outcome::Lose);
}

#[test]
fn replaying_a_finished_round_fails() {
    let mut round = Round::with_deck(Deck::from_draw_order([
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Two, Suit::Spades),
    ]));
    let mut out = String::new();
    let result = console::play_round(&mut round, &mut out).unwrap();
    assert_eq!(result.player_score, Score::Total(19));

    let mut again = String::new();
    assert!(matches!(
        console::play_round(&mut round, &mut again),
        Err(PlayError::Deal(_))
    ));
    assert!(again.is_empty());
    assert_eq!(round.showdown().unwrap_err(), ShowdownError::InvalidState);
}
