//! A two-player trick-taking card game engine.
//!
//! The crate provides a [`Game`] type that manages the full match flow:
//! opening the table, dealing rounds, resolving captures, scoring, and the
//! end-of-match bonus. The computer opponent's card choice is an injectable
//! [`strategy::Strategy`], and console I/O lives entirely outside the
//! engine.
//!
//! # Example
//!
//! ```
//! use indigo::{Game, Seat};
//!
//! let mut game = Game::new(Seat::Human, 42);
//! game.open_table().unwrap();
//! game.deal_round().unwrap();
//! assert_eq!(game.human().hand().len(), 6);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod result;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, FinishError, PlayError};
pub use game::{
    CARD_COUNT_BONUS, CARDS_PER_DEAL, DEALS_PER_MATCH, Game, GameState, INITIAL_TABLE_CARDS, Seat,
};
pub use player::{Player, TrickRecord};
pub use result::{Capture, MatchResult, TurnOutcome};
pub use table::Table;
