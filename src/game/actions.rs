use alloc::vec::Vec;

use crate::card::Card;
use crate::command::Command;
use crate::error::{ActionError, SessionError};
use crate::hand::Outcome;
use crate::player::HandSlot;
use crate::result::RoundResult;

use super::{Game, GamePhase, PlayerHandStatus};

impl Game {
    fn ensure_player_turn(&self) -> Result<HandSlot, ActionError> {
        if self.phase != GamePhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.player.status.active_slot().ok_or(ActionError::HandClosed)
    }

    /// Closes the active hand and moves the status one step on.
    fn close_active_hand(&mut self) -> Result<(), ActionError> {
        self.player.status = self.player.status.advance();
        log::debug!("player status now {:?}", self.player.status);

        if self.player.status.is_terminal() {
            self.finish_player_turn()?;
        }

        Ok(())
    }

    /// Hands the round to the dealer, or settles it at once when every
    /// player hand has busted.
    fn finish_player_turn(&mut self) -> Result<(), ActionError> {
        self.dealer.reveal();

        let all_bust = self
            .player
            .slots()
            .iter()
            .all(|&slot| self.player.hand(slot).bust());

        if all_bust {
            self.settle();
            return Ok(());
        }

        self.phase = GamePhase::DealerTurn;
        if self.options.auto_dealer {
            self.dealer_play()?;
        }

        Ok(())
    }

    /// Hit: draws a card into the active hand.
    ///
    /// During the player's turn the card goes to the active player hand; a
    /// bust, or the one card owed to a doubled hand, closes that hand. During
    /// the dealer's turn the card goes to the dealer, and a dealer bust
    /// settles the round.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is open to receive a card, or the shoe is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.phase == GamePhase::DealerTurn {
            let card = self.draw()?;
            self.dealer.hand.add_card(card);
            if self.dealer.hand.bust() {
                self.settle();
            }
            return Ok(card);
        }

        let slot = self.ensure_player_turn()?;
        let card = self.draw()?;

        let hand = self.player.hand_mut(slot);
        hand.add_card(card);

        if hand.bust() || (hand.is_doubled() && hand.len() >= 2) {
            self.close_active_hand()?;
        }

        Ok(card)
    }

    /// Stand: closes the active hand, or settles the round if the dealer is
    /// drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in play, or an automatic dealer
    /// runs out of cards.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        match self.phase {
            GamePhase::PlayerTurn => self.close_active_hand(),
            GamePhase::DealerTurn => {
                self.settle();
                Ok(())
            }
            _ => Err(ActionError::InvalidState),
        }
    }

    /// Double down: doubles the active hand's bet while it holds a single
    /// card. The next card dealt to the hand closes it.
    ///
    /// Returns the extra amount debited from the wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not hold exactly one card, was
    /// already doubled, the variant rules out its first card, or the wallet
    /// cannot match the bet.
    pub fn double_down(&mut self) -> Result<usize, ActionError> {
        let slot = self.ensure_player_turn()?;
        let hand = self.player.hand(slot);

        let first = match hand.cards() {
            [first] if !hand.is_doubled() => first,
            _ => return Err(ActionError::CannotDouble),
        };

        if !self.rules.double.allows(first) {
            return Err(ActionError::CannotDouble);
        }

        let bet = hand.bet();
        if self.player.wallet < bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.player.wallet -= bet;
        self.player.hand_mut(slot).double_bet();
        log::debug!("{slot:?} hand doubled to {}", bet.saturating_mul(2));

        Ok(bet)
    }

    /// Split: moves the second card of a pair into the split hand, which
    /// carries a bet matching the main hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the player already split, the main hand is not a
    /// pair, or the wallet cannot match the bet.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        if self.player.status != PlayerHandStatus::InPlay || !self.player.hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }

        let bet = self.player.hand.bet();
        if self.player.wallet < bet {
            return Err(ActionError::InsufficientFunds);
        }

        let card = self
            .player
            .hand
            .take_card(1)
            .ok_or(ActionError::CannotSplit)?;

        self.player.split_hand.add_card(card);
        self.player.split_hand.set_bet(bet);
        self.player.wallet -= bet;
        self.player.status = PlayerHandStatus::SplitInPlayHandOne;
        log::debug!("split into two hands of {bet}");

        Ok(())
    }

    /// Fold: gives up the round. The dealer takes every hand and nothing is
    /// paid back.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant does not allow folding or no round is
    /// in play.
    pub fn fold(&mut self) -> Result<(), ActionError> {
        if !self.rules.allows_fold {
            return Err(ActionError::FoldNotAllowed);
        }

        if !matches!(self.phase, GamePhase::PlayerTurn | GamePhase::DealerTurn) {
            return Err(ActionError::InvalidState);
        }

        let mut hands = Vec::new();
        for &slot in self.player.slots() {
            let hand = self.player.hand_mut(slot);
            hand.set_outcome(Outcome::Dealer);
            hands.push(Self::hand_result(slot, hand, 0, 0));
        }

        self.dealer.reveal();
        self.last_result = Some(RoundResult {
            hands,
            dealer_total: self.dealer.hand.total(),
            dealer_bust: self.dealer.hand.bust(),
            dealer_blackjack: self.dealer.hand.blackjack(),
            folded: true,
        });
        self.phase = GamePhase::RoundOver;
        log::info!("player folded");

        Ok(())
    }

    /// Runs one in-round command.
    ///
    /// Refused actions leave the game unchanged and are otherwise ignored.
    /// [`Command::Quit`] is left to the caller and does nothing here.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutOfCards`] when the shoe runs dry.
    pub fn apply(&mut self, command: Command) -> Result<(), SessionError> {
        let result = match command {
            Command::Hit => self.hit().map(drop),
            Command::Stand => self.stand(),
            Command::DoubleDown => self.double_down().map(drop),
            Command::Split => self.split(),
            Command::Fold => self.fold(),
            Command::ResetShoe => {
                self.reset_shoe();
                Ok(())
            }
            Command::Quit => Ok(()),
        };

        match result {
            Err(err) if err.is_fatal() => Err(SessionError::OutOfCards),
            Err(err) => {
                log::debug!("ignored {command:?}: {err}");
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }
}
