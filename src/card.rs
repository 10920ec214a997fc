//! Card types and the standard deck constant.

use core::fmt;

/// Card suit.
///
/// Declaration order matters: the computer heuristic scans suits in this
/// order when looking for same-suit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs (♣).
    Clubs,
    /// Diamonds (♦).
    Diamonds,
    /// Hearts (♥).
    Hearts,
    /// Spades (♠).
    Spades,
}

impl Suit {
    /// All suits, in declaration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the one-character suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card rank.
///
/// Declaration order matters for the same reason as [`Suit`]: the heuristic
/// scans ranks in this order when looking for same-rank groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// King.
    King,
    /// Queen.
    Queen,
    /// Jack.
    Jack,
    /// Ten.
    Ten,
    /// Nine.
    Nine,
    /// Eight.
    Eight,
    /// Seven.
    Seven,
    /// Six.
    Six,
    /// Five.
    Five,
    /// Four.
    Four,
    /// Three.
    Three,
    /// Two.
    Two,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
        Self::Ace,
    ];

    /// Returns the display text for the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
            Self::Ace => "A",
        }
    }

    /// Returns the point value of the rank.
    ///
    /// Ace, King, Queen, Jack, and Ten are worth one point each; every other
    /// rank is worth nothing.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Ace | Self::King | Self::Queen | Self::Jack | Self::Ten => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the point value of the card (rank-based).
    #[must_use]
    pub const fn points(self) -> u32 {
        self.rank.points()
    }

    /// Returns whether this card matches `other` by suit or by rank.
    ///
    /// This is the capture test: a played card matching the table's top card
    /// on either axis sweeps the pile.
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self.suit == other.suit || self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;
