//! In-round commands typed at the table.

use core::str::FromStr;

use crate::error::ParseCommandError;
use crate::variant::VariantRules;

/// A single-letter command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `H`: draw a card.
    Hit,
    /// `S`: close the active hand, or settle once the dealer is drawing.
    Stand,
    /// `D`: double the bet on a one-card hand.
    DoubleDown,
    /// `X`: split a pair.
    Split,
    /// `F`: give up the round (standard blackjack only).
    Fold,
    /// `R`: rebuild and reshuffle the shoe.
    ResetShoe,
    /// `Q`: end the session.
    Quit,
}

impl Command {
    /// Every command, in prompt order.
    pub const ALL: [Self; 7] = [
        Self::Hit,
        Self::Stand,
        Self::Fold,
        Self::ResetShoe,
        Self::Split,
        Self::DoubleDown,
        Self::Quit,
    ];

    /// Returns the letter that selects the command.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Hit => 'H',
            Self::Stand => 'S',
            Self::DoubleDown => 'D',
            Self::Split => 'X',
            Self::Fold => 'F',
            Self::ResetShoe => 'R',
            Self::Quit => 'Q',
        }
    }

    /// Returns a short description for prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "to hit",
            Self::Stand => "to stand",
            Self::DoubleDown => "to double down",
            Self::Split => "to split",
            Self::Fold => "to fold",
            Self::ResetShoe => "to reset deck",
            Self::Quit => "to end",
        }
    }

    /// Returns whether the command belongs in the prompt for `rules`.
    ///
    /// ```
    /// use bj21::{Command, Variant};
    ///
    /// assert!(Command::Fold.is_offered(&Variant::Blackjack.rules()));
    /// assert!(!Command::Fold.is_offered(&Variant::Spanish21.rules()));
    /// ```
    #[must_use]
    pub const fn is_offered(self, rules: &VariantRules) -> bool {
        match self {
            Self::Fold => rules.allows_fold,
            _ => true,
        }
    }
}

/// Parses a command letter, ignoring case and surrounding whitespace.
///
/// ```
/// use bj21::Command;
///
/// assert_eq!("h".parse::<Command>(), Ok(Command::Hit));
/// assert_eq!(" X ".parse::<Command>(), Ok(Command::Split));
/// assert!("hit".parse::<Command>().is_err());
/// ```
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return Err(ParseCommandError);
        };

        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(&key))
            .ok_or(ParseCommandError)
    }
}
