//! Error types for simulation operations.

use thiserror::Error;

/// Errors that can occur when drawing from a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur when placing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The wager is larger than the bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during explicit player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl From<ShoeError> for ActionError {
    fn from(_: ShoeError) -> Self {
        Self::NoCards
    }
}

/// Errors that can occur while resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round phase for this step.
    #[error("invalid round phase for this step")]
    InvalidState,
    /// The wager could not be placed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The shoe ran out of cards.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur while running a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Unit size is zero.
    #[error("unit size is zero")]
    ZeroUnitSize,
    /// The betting policy produced an unusable wager.
    #[error("betting policy produced an invalid wager: {0}")]
    Bet(#[from] BetError),
    /// A round failed to resolve.
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Errors that can occur while aggregating a batch of sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchError {
    /// Fewer than one session was requested.
    #[error("batch size must be at least 1")]
    InvalidBatchSize,
    /// A session failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Error returned when a betting strategy name is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown betting strategy")]
pub struct ParseStrategyError;
