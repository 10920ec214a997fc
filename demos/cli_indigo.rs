//! CLI Indigo example.
//!
//! Owns all console I/O: prompting, input parsing, and the `exit` command.
//! The engine itself never reads input or terminates the process.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use indigo::{Game, GameState, Seat, TurnOutcome};

fn main() -> ExitCode {
    println!("Indigo Card Game");

    let starter = loop {
        println!("Play first?");
        match prompt_line().as_str() {
            "yes" => break Seat::Human,
            "no" => break Seat::Computer,
            "exit" => {
                println!("Bye");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(starter, seed);

    match game.open_table() {
        Ok(cards) => {
            println!("Initial cards on the table: {}", format_cards(&cards));
            println!();
        }
        Err(err) => {
            println!("Setup error: {err}");
            return ExitCode::FAILURE;
        }
    }

    loop {
        match game.state() {
            GameState::Dealing => {
                if let Err(err) = game.deal_round() {
                    println!("Deal error: {err}");
                    return ExitCode::FAILURE;
                }
            }
            GameState::HumanTurn => {
                if !human_turn(&mut game) {
                    println!("Game Over");
                    return ExitCode::SUCCESS;
                }
            }
            GameState::ComputerTurn => computer_turn(&mut game),
            GameState::Cleanup => break,
            GameState::Setup | GameState::Finished => unreachable!("loop owns these phases"),
        }
    }

    print_table_status(&game);
    match game.finish() {
        Ok(_) => print_score(&game),
        Err(err) => {
            println!("Finish error: {err}");
            return ExitCode::FAILURE;
        }
    }
    println!("Game Over");
    ExitCode::SUCCESS
}

/// Runs one human turn. Returns `false` if the player asked to exit.
fn human_turn(game: &mut Game) -> bool {
    print_table_status(game);
    println!("Cards in hand: {}", game.human().format_hand());

    let hand_size = game.human().hand().len();
    let outcome = loop {
        println!("Choose a card to play (1-{hand_size}):");
        let input = prompt_line();
        if input == "exit" {
            return false;
        }
        let Ok(index) = input.parse::<usize>() else {
            continue;
        };
        // Out-of-range indexes do not consume the turn; just ask again.
        match game.play_human(index) {
            Ok(outcome) => break outcome,
            Err(_) => continue,
        }
    };

    if outcome.capture.is_some() {
        println!("Player wins cards");
        print_score(game);
    }
    println!();
    true
}

fn computer_turn(game: &mut Game) {
    print_table_status(game);
    println!("{}", format_cards(game.computer().hand()));

    match game.play_computer() {
        Ok(TurnOutcome { card, capture, .. }) => {
            println!("Computer plays {card}");
            if capture.is_some() {
                println!("Computer wins cards");
                print_score(game);
            }
        }
        Err(err) => println!("Computer error: {err}"),
    }
    println!();
}

fn print_table_status(game: &Game) {
    if game.table_cards().is_empty() {
        println!("No cards on the table");
    } else if let Some(top) = game.top_card() {
        println!(
            "{} cards on the table, and the top card is {top}",
            game.table_cards().len()
        );
    }
}

fn print_score(game: &Game) {
    println!(
        "Score: Player {} - Computer {}\nCards: Player {} - Computer {}",
        game.human().score(),
        game.computer().score(),
        game.human().won().len(),
        game.computer().won().len()
    );
}

fn format_cards(cards: &[indigo::Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn prompt_line() -> String {
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
