//! Deck construction, shuffling, and dealing.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered deck of cards, consumed from the front as the match deals.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the standard 52-card deck in canonical (suit-major) order.
    ///
    /// Every (rank, suit) pair appears exactly once. The order is arbitrary
    /// because a deck is always shuffled before play.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// Intended for tests that rig the deal order; no uniqueness check is
    /// performed.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards into a uniformly random permutation.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the first `n` cards from the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer than `n` cards
    /// remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        if n > self.cards.len() {
            return Err(DealError::InsufficientCards);
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Returns the remaining cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
