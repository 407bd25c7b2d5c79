use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::ActionError;
use crate::hand::{Hand, Outcome};
use crate::money::CENTS_PER_UNIT;
use crate::options::RoundingMode;
use crate::player::HandSlot;
use crate::result::{HandResult, RoundResult};
use crate::variant::PayoutTable;

use super::{Game, GamePhase};

/// Bets above this qualify for the large suited 7-7-7 bonus.
const SUITED_SEVENS_BET_THRESHOLD: usize = 25 * CENTS_PER_UNIT;
const SUITED_SEVENS_SMALL_BONUS: usize = 1_000 * CENTS_PER_UNIT;
const SUITED_SEVENS_LARGE_BONUS: usize = 5_000 * CENTS_PER_UNIT;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Compares a player total with the dealer total.
///
/// A player bust loses even when the dealer busts too.
///
/// ```
/// use bj21::{Outcome, resolve};
///
/// assert_eq!(resolve(20, 19), Outcome::Player);
/// assert_eq!(resolve(22, 23), Outcome::Dealer);
/// assert_eq!(resolve(18, 18), Outcome::Draw);
/// ```
#[must_use]
pub const fn resolve(player_total: u8, dealer_total: u8) -> Outcome {
    if dealer_total < player_total && player_total <= 21 {
        Outcome::Player
    } else if player_total < dealer_total && dealer_total <= 21 {
        Outcome::Dealer
    } else if player_total > 21 {
        Outcome::Dealer
    } else if dealer_total > 21 {
        Outcome::Player
    } else {
        Outcome::Draw
    }
}

/// Amount credited for one settled hand, including any side bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Payout {
    outcome: Outcome,
    amount: usize,
    bonus: usize,
}

impl Payout {
    const fn new(outcome: Outcome, amount: usize) -> Self {
        Self {
            outcome,
            amount,
            bonus: 0,
        }
    }
}

fn is_six_seven_eight(values: &[u8]) -> bool {
    let mut sorted = [0u8; 3];
    sorted.copy_from_slice(values);
    sorted.sort_unstable();
    sorted == [6, 7, 8]
}

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws until reaching 17 or higher. If `stand_on_soft_17` is
    /// true, dealer stands on soft 17. Otherwise, dealer hits on soft 17. The
    /// round is settled afterwards.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer's turn or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.phase != GamePhase::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer.reveal();
        let mut drawn_cards = Vec::new();

        loop {
            let value = self.dealer.hand.total();
            let is_soft = self.dealer.hand.is_soft();

            if value > 17 {
                break;
            }
            if value == 17 && (!is_soft || self.options.stand_on_soft_17) {
                break;
            }

            let card = self.draw()?;
            self.dealer.hand.add_card(card);
            drawn_cards.push(card);
        }

        self.settle();

        Ok(drawn_cards)
    }

    /// Rounds a payout according to the configured rounding mode. The
    /// float-to-integer cast saturates, so oversized payouts clamp at
    /// `usize::MAX`.
    fn scale(&self, bet: usize, ratio: f64) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let amount = bet as f64 * ratio;
        round_amount(amount, self.options.rounding)
    }

    /// Settles every hand against the dealer and credits the wallet.
    pub(super) fn settle(&mut self) {
        self.dealer.reveal();

        let dealer_total = self.dealer.hand.total();
        let mut hands = Vec::new();

        for &slot in self.player.slots() {
            let payout = self.payout(self.player.hand(slot));

            let hand = self.player.hand_mut(slot);
            hand.set_outcome(payout.outcome);
            hands.push(Self::hand_result(slot, hand, payout.amount, payout.bonus));

            self.player.wallet = self.player.wallet.saturating_add(payout.amount);
        }

        let result = RoundResult {
            hands,
            dealer_total,
            dealer_bust: self.dealer.hand.bust(),
            dealer_blackjack: self.dealer.hand.blackjack(),
            folded: false,
        };
        log::info!(
            "round settled: dealer {dealer_total}, paid {}, wallet {}",
            result.total_payout(),
            self.player.wallet
        );

        self.last_result = Some(result);
        self.phase = GamePhase::RoundOver;
    }

    pub(super) fn hand_result(
        slot: HandSlot,
        hand: &Hand,
        payout: usize,
        bonus: usize,
    ) -> HandResult {
        HandResult {
            slot,
            outcome: hand.outcome(),
            bet: hand.bet(),
            payout,
            bonus,
            player_total: hand.total(),
            blackjack: hand.blackjack(),
        }
    }

    /// Works out the outcome of `hand` and what it pays under the variant's
    /// table.
    fn payout(&self, hand: &Hand) -> Payout {
        let dealer = &self.dealer.hand;
        let outcome = resolve(hand.total(), dealer.total());
        let bet = hand.bet();

        match self.rules.payout {
            PayoutTable::Standard => match outcome {
                Outcome::Player if hand.blackjack() => Payout::new(outcome, self.scale(bet, 1.5)),
                Outcome::Player => Payout::new(outcome, bet.saturating_mul(2)),
                Outcome::Draw => Payout::new(outcome, bet),
                Outcome::Dealer | Outcome::NotSet => Payout::new(outcome, 0),
            },
            PayoutTable::EvenMoney => match outcome {
                Outcome::Player => Payout::new(outcome, bet.saturating_mul(2)),
                Outcome::Draw if dealer.blackjack() => Payout::new(Outcome::Dealer, 0),
                Outcome::Draw => Payout::new(outcome, bet),
                Outcome::Dealer | Outcome::NotSet => Payout::new(outcome, 0),
            },
            PayoutTable::Spanish => match outcome {
                Outcome::Player | Outcome::Draw if hand.blackjack() => {
                    Payout::new(Outcome::Player, self.scale(bet, 1.5))
                }
                Outcome::Player => self.spanish_win(hand),
                Outcome::Draw => Payout::new(outcome, bet),
                Outcome::Dealer | Outcome::NotSet => Payout::new(outcome, 0),
            },
        }
    }

    /// Spanish 21 bonus table for a winning hand that is not a natural.
    fn spanish_win(&self, hand: &Hand) -> Payout {
        let bet = hand.bet();
        let values = hand.values();
        let suited = hand.all_same_suit();
        let win = |ratio: f64| Payout::new(Outcome::Player, self.scale(bet, ratio));

        match (hand.total(), hand.len()) {
            (21, 5) => return win(1.5),
            (21, 6) => return win(2.0),
            (21, 7) => return win(3.0),
            _ => {}
        }

        if values.len() == 3 && values.iter().all(|&v| v == 7) {
            if !suited {
                return win(1.5);
            }

            let mut payout = win(2.0);
            if self.dealer.hand.has_card(Rank::Seven) {
                payout.bonus = if bet > SUITED_SEVENS_BET_THRESHOLD {
                    SUITED_SEVENS_LARGE_BONUS
                } else {
                    SUITED_SEVENS_SMALL_BONUS
                };
                payout.amount = payout.amount.saturating_add(payout.bonus);
            }
            return payout;
        }

        if values.len() == 3 && is_six_seven_eight(&values) {
            return win(if suited { 2.0 } else { 1.5 });
        }

        win(2.0)
    }
}
