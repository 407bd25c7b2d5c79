//! Hand evaluation.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::collection::{CardCollection, CardFilter};

const BLACKJACK: u8 = 21;

const fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 11,
        other => other.value(),
    }
}

/// Returns the best total and whether an ace is still counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// Who took a hand once the round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Not resolved yet.
    #[default]
    NotSet,
    /// The player won the hand.
    Player,
    /// The dealer won the hand.
    Dealer,
    /// Tie; the stake is returned unless a variant says otherwise.
    Draw,
}

/// A blackjack hand: cards plus the wager riding on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: CardCollection,
    bet: usize,
    double_down: bool,
    outcome: Outcome,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: CardCollection::new(),
            bet: 0,
            double_down: false,
            outcome: Outcome::NotSet,
        }
    }

    /// Creates a hand holding `cards`, in deal order.
    #[must_use]
    pub fn with_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.add(card);
    }

    /// Removes and returns the card at `index`.
    pub fn take_card(&mut self, index: usize) -> Option<Card> {
        self.cards.take(index)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Sets the bet amount.
    pub const fn set_bet(&mut self, bet: usize) {
        self.bet = bet;
    }

    /// Doubles the bet and marks the hand as doubled down.
    pub const fn double_bet(&mut self) {
        self.bet = self.bet.saturating_mul(2);
        self.double_down = true;
    }

    /// Returns whether the hand has been doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.double_down
    }

    /// Returns the resolved outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Records the resolved outcome.
    pub const fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// Calculates the total of the hand.
    ///
    /// Aces count 11 until the total passes 21, then drop to 1 one at a time.
    ///
    /// ```
    /// use bj21::{Card, Hand, Rank, Suit};
    ///
    /// let hand = Hand::with_cards(&[
    ///     Card::new(Suit::Spades, Rank::King),
    ///     Card::new(Suit::Spades, Rank::Ace),
    ///     Card::new(Suit::Hearts, Rank::Ace),
    /// ]);
    /// assert_eq!(hand.total(), 12);
    /// ```
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(self.cards()).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(self.cards()).1
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub fn bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns whether the hand is a natural: an ace and a ten-value card.
    #[must_use]
    pub fn blackjack(&self) -> bool {
        match self.cards() {
            [a, b] => (a.is_ace() && b.value() == 10) || (b.is_ace() && a.value() == 10),
            _ => false,
        }
    }

    /// Returns whether the hand is a pair that may be split.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards(), [a, b] if a.rank == b.rank)
    }

    /// Returns whether any card matches `filter`.
    #[must_use]
    pub fn has_card(&self, filter: impl Into<CardFilter>) -> bool {
        self.cards.has_card(filter)
    }

    /// Returns whether every card shares one suit.
    #[must_use]
    pub fn all_same_suit(&self) -> bool {
        self.cards.all_same_suit()
    }

    /// Returns the numerical value of each card in deal order.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.cards.values()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears cards, bet, double-down flag and outcome.
    pub fn reset(&mut self) {
        self.cards.reset();
        self.bet = 0;
        self.double_down = false;
        self.outcome = Outcome::NotSet;
    }
}
