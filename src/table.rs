//! The shared face-up pile.

use crate::card::Card;

/// The face-up pile in the middle of the table.
///
/// The top card is the most recently placed one; a capture sweeps the whole
/// pile at once.
#[derive(Debug, Clone, Default)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Places a card face-up on top of the pile.
    pub fn place(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the top card, or `None` if the table is empty.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Removes and returns every card on the table, clearing it.
    pub fn sweep(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the cards on the table in placement order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
