//! Plain-text snapshot of the table.
//!
//! Rendering reads the game and nothing else; it never changes state. The
//! dealer's hole card is masked here and only here.

use core::fmt::{self, Write};

use crate::card::Card;
use crate::game::{Game, GamePhase, PlayerHandStatus};
use crate::hand::Outcome;
use crate::money::Amount;
use crate::player::HandSlot;

const TABLE_WIDTH: usize = 41;
const BANNER_LEAD: usize = 16;

/// A borrowed view of a game that renders as text.
///
/// ```
/// use bj21::{Game, GameOptions};
///
/// let game = Game::new(GameOptions::default(), 7);
/// let text = game.view().to_string();
/// assert!(text.contains("wallet:\t$100.00"));
/// assert!(text.contains("remaining cards: 52"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    game: &'a Game,
}

impl Game {
    /// Returns a renderable snapshot of the table.
    #[must_use]
    pub const fn view(&self) -> TableView<'_> {
        TableView { game: self }
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

impl TableView<'_> {
    fn write_banner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.game.rules().name;
        let trail = TABLE_WIDTH.saturating_sub(BANNER_LEAD + name.chars().count());
        writeln!(f, "{}{name}{}", "-".repeat(BANNER_LEAD), "-".repeat(trail))
    }

    fn write_dealer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dealer = self.game.dealer();
        let marker = if self.game.status().is_terminal() { "* " } else { "  " };

        write!(f, "{marker}Dealer ")?;
        write_cards(f, dealer.visible_cards())?;
        if dealer.visible_cards().len() < dealer.hand.len() {
            f.write_str(" ??")?;
        }
        f.write_char('\n')
    }

    fn write_player(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = self.game.player();
        let status = player.status;
        let marker = if status.is_terminal() { "  " } else { "* " };

        write!(f, "{marker}Player ")?;
        if player.has_split() {
            if status == PlayerHandStatus::SplitInPlayHandOne {
                f.write_char('.')?;
            }
            write_cards(f, player.hand.cards())?;
            f.write_char('|')?;
            if status == PlayerHandStatus::SplitInPlayHandTwo {
                f.write_char('.')?;
            }
            write_cards(f, player.split_hand.cards())?;
        } else {
            write_cards(f, player.hand.cards())?;
        }
        f.write_char('\n')
    }

    fn write_outcome(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.game.phase() != GamePhase::RoundOver {
            return Ok(());
        }
        let Some(result) = self.game.last_result() else {
            return Ok(());
        };

        if result.folded {
            return writeln!(f, "Dealer wins!");
        }

        let split = result.hands.len() > 1;
        for hand in &result.hands {
            let suffix = match (split, hand.slot) {
                (false, _) => "",
                (true, HandSlot::Main) => " Hand 1",
                (true, HandSlot::Split) => " Hand 2",
            };
            match hand.outcome {
                Outcome::Player => writeln!(f, "Player wins{suffix}!")?,
                Outcome::Dealer => writeln!(f, "Dealer wins{suffix}!")?,
                Outcome::Draw | Outcome::NotSet => writeln!(f, "No winner{suffix}")?,
            }
            if hand.bonus > 0 {
                writeln!(f, "Bonus{suffix}: {}", Amount(hand.bonus))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = self.game.player();

        writeln!(f, "wallet:\t{}", Amount(player.wallet))?;
        writeln!(f, "bet:\t{}", Amount(player.hand.bet()))?;
        if player.has_split() {
            writeln!(f, "split bet: {}", Amount(player.split_hand.bet()))?;
        }

        self.write_banner(f)?;
        self.write_dealer(f)?;
        self.write_player(f)?;

        writeln!(f, "{}", "-".repeat(TABLE_WIDTH))?;
        writeln!(f, "{}", self.game.rules().odds_message)?;
        writeln!(f, "remaining cards: {}", self.game.cards_remaining())?;
        self.write_outcome(f)
    }
}
