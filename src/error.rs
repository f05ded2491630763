//! Error types for game operations.
//!
//! An empty deck is never an error; drawing from it simply yields nothing.

use thiserror::Error;

/// Errors returned by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game is not in progress.
    #[error("game is not in progress")]
    NotInProgress,
    /// The asker does not hold the turn.
    #[error("not this player's turn")]
    NotYourTurn,
}

/// Errors that can occur when the human asks for a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AskError {
    /// The game is not in progress.
    #[error("game is not in progress")]
    NotInProgress,
    /// It is the computer's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Another turn is still being played out.
    #[error("a turn is already in flight")]
    TurnInFlight,
    /// The human holds no card of the requested rank.
    #[error("rank is not held by the asking player")]
    RankNotHeld,
    /// A new game was started while this turn was in flight.
    #[error("game was restarted during the turn")]
    Abandoned,
}

impl From<TurnError> for AskError {
    fn from(err: TurnError) -> Self {
        match err {
            TurnError::NotInProgress => Self::NotInProgress,
            TurnError::NotYourTurn => Self::NotYourTurn,
        }
    }
}

/// Errors returned by the computer strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// There is nothing to ask for.
    #[error("cannot choose a move from an empty hand")]
    EmptyHand,
}
