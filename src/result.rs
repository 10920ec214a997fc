//! Outcome types returned by engine operations.

use crate::card::Card;
use crate::game::Seat;

/// The cards swept by a capture and the points they were worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// The swept cards, including the just-played card.
    pub cards: Vec<Card>,
    /// Points added to the capturing player's score.
    pub points: u32,
}

/// What a single play did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The seat that played.
    pub seat: Seat,
    /// The card that was played.
    pub card: Card,
    /// The capture this play made, if any.
    pub capture: Option<Capture>,
}

/// Final standings after the cleanup phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The human's final score, bonus included.
    pub human_score: u32,
    /// The computer's final score, bonus included.
    pub computer_score: u32,
    /// Number of cards in the human's won pile.
    pub human_cards: usize,
    /// Number of cards in the computer's won pile.
    pub computer_cards: usize,
    /// The seat awarded the 3-point card-count bonus.
    pub bonus: Seat,
    /// The seat that swept the leftover table cards, and those cards.
    ///
    /// `None` when the table was already empty at cleanup.
    pub final_sweep: Option<(Seat, Vec<Card>)>,
}
