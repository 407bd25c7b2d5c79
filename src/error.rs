//! Error types for game operations.

use thiserror::Error;

/// A card was requested from an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the collection")]
pub struct EmptyCollectionError;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The wallet is empty; the session cannot continue.
    #[error("out of funds")]
    OutOfFunds,
    /// The bet is larger than the wallet.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The entered amount is not a non-negative number.
    #[error("invalid bet amount")]
    InvalidAmount,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
}

impl BetError {
    /// Returns whether the error ends the session rather than calling for a
    /// new bet.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::OutOfFunds)
    }
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    EmptyShoe,
}

impl From<EmptyCollectionError> for DealError {
    fn from(_: EmptyCollectionError) -> Self {
        Self::EmptyShoe
    }
}

/// Errors that can occur during player actions.
///
/// Everything except [`ActionError::EmptyShoe`] means the action was refused
/// and the game is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The active hand is closed.
    #[error("hand is not active")]
    HandClosed,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Folding is not part of this variant.
    #[error("folding is not allowed in this variant")]
    FoldNotAllowed,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

impl ActionError {
    /// Returns whether the error ends the session.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::EmptyShoe)
    }
}

impl From<EmptyCollectionError> for ActionError {
    fn from(_: EmptyCollectionError) -> Self {
        Self::EmptyShoe
    }
}

/// Errors that end a playing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The shoe ran dry mid-round.
    #[error("out of cards")]
    OutOfCards,
    /// The wallet is empty.
    #[error("out of funds")]
    OutOfFunds,
}

/// A line of input that is not an in-round command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown command")]
pub struct ParseCommandError;

/// A line of input that does not name a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown game variant")]
pub struct ParseVariantError;
