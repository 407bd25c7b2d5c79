//! Round result types for showdown.

use alloc::vec::Vec;

use crate::hand::Outcome;
use crate::player::HandSlot;

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Which hand this is.
    pub slot: HandSlot,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The bet riding on the hand, in cents.
    pub bet: usize,
    /// Amount credited to the wallet for the hand, bonus included.
    pub payout: usize,
    /// Side bonus included in `payout` (Spanish 21 suited 7-7-7).
    pub bonus: usize,
    /// The player's hand total.
    pub player_total: u8,
    /// Whether the hand was a natural.
    pub blackjack: bool,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand played, main hand first.
    pub hands: Vec<HandResult>,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Whether the player folded.
    pub folded: bool,
}

impl RoundResult {
    /// Total amount credited to the wallet, saturating at `usize::MAX`.
    #[must_use]
    pub fn total_payout(&self) -> usize {
        self.hands.iter().fold(0, |acc, h| acc.saturating_add(h.payout))
    }

    /// Total amount wagered across all hands, saturating at `usize::MAX`.
    #[must_use]
    pub fn total_bet(&self) -> usize {
        self.hands.iter().fold(0, |acc, h| acc.saturating_add(h.bet))
    }

    /// Net result (positive = profit, negative = loss), clamped to the
    /// `isize` range.
    #[must_use]
    pub fn net(&self) -> isize {
        let payout = isize::try_from(self.total_payout()).unwrap_or(isize::MAX);
        let bet = isize::try_from(self.total_bet()).unwrap_or(isize::MAX);
        payout.saturating_sub(bet)
    }
}
