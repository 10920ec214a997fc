//! Game state types.

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The human player.
    Human,
    /// The computer player.
    Computer,
}

impl Seat {
    /// Returns the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Match phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck is shuffled; the four opening table cards have not been placed.
    Setup,
    /// Waiting for the next round of hands to be dealt.
    Dealing,
    /// Waiting for the human to play a card.
    HumanTurn,
    /// Waiting for the computer to play a card.
    ComputerTurn,
    /// All turns played; leftover table cards and the bonus are unresolved.
    Cleanup,
    /// Match is over.
    Finished,
}

impl GameState {
    /// Returns the turn state for the given seat.
    #[must_use]
    pub const fn turn_of(seat: Seat) -> Self {
        match seat {
            Seat::Human => Self::HumanTurn,
            Seat::Computer => Self::ComputerTurn,
        }
    }
}
