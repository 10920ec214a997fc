//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards left in the deck.
    ///
    /// Unreachable under the fixed deal schedule; callers may treat it as an
    /// internal-invariant violation.
    #[error("not enough cards left in the deck")]
    InsufficientCards,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for this play (wrong turn or wrong phase).
    #[error("invalid game state for this play")]
    InvalidState,
    /// The 1-based hand index is outside the current hand.
    ///
    /// Recoverable: the turn is not consumed and the caller should re-prompt.
    #[error("card index is outside the current hand")]
    IndexOutOfRange,
    /// An injected strategy returned a card the computer does not hold.
    #[error("strategy chose a card not in the hand")]
    CardNotInHand,
}

/// Errors that can occur when finishing the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinishError {
    /// Invalid game state for finishing (turns remain to be played).
    #[error("invalid game state for finishing")]
    InvalidState,
}
