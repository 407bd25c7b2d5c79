//! Game state types.

use crate::player::HandSlot;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the player's bet.
    Betting,
    /// Bet placed, waiting for the initial deal.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// The player is done; hits now go to the dealer.
    DealerTurn,
    /// Round has been resolved and paid out.
    RoundOver,
}

/// Progress of the player through their turn.
///
/// `InPlay -> Ended` without a split, or
/// `InPlay -> SplitInPlayHandOne -> SplitInPlayHandTwo -> SplitEnded` after one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerHandStatus {
    /// Playing the main hand.
    #[default]
    InPlay,
    /// Main hand finished, no split.
    Ended,
    /// Split; playing the first hand.
    SplitInPlayHandOne,
    /// Split; playing the second hand.
    SplitInPlayHandTwo,
    /// Split; both hands finished.
    SplitEnded,
}

impl PlayerHandStatus {
    /// Returns the status after the active hand closes (stand, bust, or a
    /// completed double down).
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::InPlay | Self::Ended => Self::Ended,
            Self::SplitInPlayHandOne => Self::SplitInPlayHandTwo,
            Self::SplitInPlayHandTwo | Self::SplitEnded => Self::SplitEnded,
        }
    }

    /// Returns the hand that currently receives hits, if the turn is still open.
    #[must_use]
    pub const fn active_slot(self) -> Option<HandSlot> {
        match self {
            Self::InPlay | Self::SplitInPlayHandOne => Some(HandSlot::Main),
            Self::SplitInPlayHandTwo => Some(HandSlot::Split),
            Self::Ended | Self::SplitEnded => None,
        }
    }

    /// Returns whether the player's turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::SplitEnded)
    }

    /// Returns whether the player has split this round.
    #[must_use]
    pub const fn is_split(self) -> bool {
        matches!(
            self,
            Self::SplitInPlayHandOne | Self::SplitInPlayHandTwo | Self::SplitEnded
        )
    }
}
