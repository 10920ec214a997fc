//! Player state: hand, won pile, score, and last-trick record.

use core::fmt::Write as _;

use crate::card::Card;

/// Whether a player took the most recent capture of the match.
///
/// `Unknown` only before any capture has occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrickRecord {
    /// No capture has occurred yet.
    #[default]
    Unknown,
    /// This player took the most recent capture.
    Won,
    /// The opponent took the most recent capture.
    Lost,
}

/// One player's state. Both seats use the same structure; the computer's
/// card choice comes from an injected strategy, not a different player type.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hand: Vec<Card>,
    won: Vec<Card>,
    score: u32,
    last_trick: TrickRecord,
}

impl Player {
    /// Creates a player with an empty hand and no captures.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            won: Vec::new(),
            score: 0,
            last_trick: TrickRecord::Unknown,
        }
    }

    /// Appends dealt cards to the hand.
    pub fn receive(&mut self, cards: Vec<Card>) {
        self.hand.extend(cards);
    }

    /// Removes and returns the card at `position` in the hand.
    ///
    /// Returns `None` if the position is outside the hand.
    pub fn take_card(&mut self, position: usize) -> Option<Card> {
        if position < self.hand.len() {
            Some(self.hand.remove(position))
        } else {
            None
        }
    }

    /// Moves newly swept cards into the won pile and scores them.
    ///
    /// Adds the summed point values of exactly these cards to the score, so
    /// each capture is counted once and the pile is never re-summed.
    /// Returns the points gained.
    pub fn take_won(&mut self, cards: Vec<Card>) -> u32 {
        let points: u32 = cards.iter().map(|card| card.points()).sum();
        self.score += points;
        self.won.extend(cards);
        points
    }

    /// Awards flat bonus points (the end-of-match card-count bonus).
    pub const fn award_bonus(&mut self, points: u32) {
        self.score += points;
    }

    /// Records the outcome of the most recent capture.
    pub const fn set_last_trick(&mut self, record: TrickRecord) {
        self.last_trick = record;
    }

    /// Formats the hand as a 1-based indexed listing, e.g. `1)K♣ 2)10♦`.
    ///
    /// Read-only: repeated calls without an intervening mutation return
    /// identical output.
    #[must_use]
    pub fn format_hand(&self) -> String {
        let mut out = String::new();
        for (index, card) in self.hand.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}){card}", index + 1);
        }
        out
    }

    /// Returns the cards in hand, in display order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the accumulated won pile.
    #[must_use]
    pub fn won(&self) -> &[Card] {
        &self.won
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the last-trick record.
    #[must_use]
    pub const fn last_trick(&self) -> TrickRecord {
        self.last_trick
    }
}
