//! The player and the dealer seated at a table.

use crate::card::Card;
use crate::game::PlayerHandStatus;
use crate::hand::Hand;

/// Which of the player's hands is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandSlot {
    /// The hand dealt at the start of the round.
    Main,
    /// The hand created by splitting a pair.
    Split,
}

/// A player: a main hand, a split hand and a wallet.
#[derive(Debug, Clone)]
pub struct Player {
    /// The main hand.
    pub hand: Hand,
    /// The second hand, only populated after a split.
    pub split_hand: Hand,
    /// Money available for betting, in cents.
    pub wallet: usize,
    /// Progress through the current turn.
    pub status: PlayerHandStatus,
}

impl Player {
    /// Creates a player with `wallet` cents.
    #[must_use]
    pub const fn new(wallet: usize) -> Self {
        Self {
            hand: Hand::new(),
            split_hand: Hand::new(),
            wallet,
            status: PlayerHandStatus::InPlay,
        }
    }

    /// Returns whether the player has split this round.
    #[must_use]
    pub const fn has_split(&self) -> bool {
        self.status.is_split()
    }

    /// Returns the hand in `slot`.
    #[must_use]
    pub const fn hand(&self, slot: HandSlot) -> &Hand {
        match slot {
            HandSlot::Main => &self.hand,
            HandSlot::Split => &self.split_hand,
        }
    }

    /// Returns the hand in `slot` mutably.
    pub const fn hand_mut(&mut self, slot: HandSlot) -> &mut Hand {
        match slot {
            HandSlot::Main => &mut self.hand,
            HandSlot::Split => &mut self.split_hand,
        }
    }

    /// Returns the slots in play this round: the main hand, plus the split
    /// hand after a split.
    #[must_use]
    pub const fn slots(&self) -> &'static [HandSlot] {
        if self.has_split() {
            &[HandSlot::Main, HandSlot::Split]
        } else {
            &[HandSlot::Main]
        }
    }

    /// Clears both hands and resets the turn status. The wallet is kept.
    pub fn reset(&mut self) {
        self.hand.reset();
        self.split_hand.reset();
        self.status = PlayerHandStatus::InPlay;
    }
}

/// The dealer's seat.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    /// The dealer's cards.
    pub hand: Hand,
    /// Whether the second card is face down. Display only; totals always
    /// see every card.
    pub hidden: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hidden: false,
        }
    }

    /// Returns the cards a player can see: everything but a hidden hole card.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        let cards = self.hand.cards();
        if self.hidden && cards.len() > 1 {
            &cards[..1]
        } else {
            cards
        }
    }

    /// Reveals the hole card.
    pub const fn reveal(&mut self) {
        self.hidden = false;
    }

    /// Clears the hand for a new round.
    pub fn reset(&mut self) {
        self.hand.reset();
        self.hidden = false;
    }
}
