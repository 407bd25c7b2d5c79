use crate::error::{BetError, DealError};
use crate::variant::DealLayout;

use super::{Game, GamePhase};

impl Game {
    /// Checks that the player still has money to bet with.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::OutOfFunds`] when the wallet is empty.
    pub const fn check_funds(&self) -> Result<(), BetError> {
        if self.player.wallet == 0 {
            return Err(BetError::OutOfFunds);
        }
        Ok(())
    }

    /// Places the bet for the round, in cents, and debits the wallet.
    ///
    /// A zero bet is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase, the wallet is
    /// empty, or the bet exceeds the wallet.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.phase != GamePhase::Betting {
            return Err(BetError::InvalidState);
        }

        self.check_funds()?;

        if amount > self.player.wallet {
            return Err(BetError::InsufficientFunds);
        }

        self.player.wallet -= amount;
        self.player.hand.set_bet(amount);
        self.phase = GamePhase::Dealing;
        log::debug!("bet {amount} placed, wallet {}", self.player.wallet);

        Ok(())
    }

    /// Deals the opening cards for the variant.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed, or the shoe does not hold
    /// enough cards for the opening deal. Nothing is dealt in either case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != GamePhase::Dealing {
            return Err(DealError::InvalidState);
        }

        let hole_card = self.options.hole_card && self.rules.deal == DealLayout::Standard;
        let cards_needed = match self.rules.deal {
            DealLayout::Standard if hole_card => 3,
            DealLayout::Standard => 2,
            DealLayout::FaceUp => 3,
        };

        if self.cards_remaining() < cards_needed {
            return Err(DealError::EmptyShoe);
        }

        match self.rules.deal {
            DealLayout::Standard => {
                let card = self.draw()?;
                self.dealer.hand.add_card(card);
                let card = self.draw()?;
                self.player.hand.add_card(card);

                if hole_card {
                    let card = self.draw()?;
                    self.dealer.hand.add_card(card);
                    self.dealer.hidden = true;
                }
            }
            DealLayout::FaceUp => {
                for _ in 0..2 {
                    let card = self.draw()?;
                    self.dealer.hand.add_card(card);
                }
                let card = self.draw()?;
                self.player.hand.add_card(card);
            }
        }

        self.phase = GamePhase::PlayerTurn;

        Ok(())
    }
}
