//! Rule variants and the strategy record each one supplies to the engine.

use core::fmt;
use core::str::FromStr;

use crate::card::Rank;
use crate::error::ParseVariantError;
use crate::options::DoubleOption;

/// How the opening cards are dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealLayout {
    /// One card to the dealer and one to the player. The dealer may also get
    /// a face-down hole card when [`GameOptions::hole_card`] is set.
    ///
    /// [`GameOptions::hole_card`]: crate::GameOptions::hole_card
    Standard,
    /// Two face-up cards to the dealer and one to the player.
    FaceUp,
}

/// How winning and drawn hands are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutTable {
    /// Wins pay 2x, a winning natural pays 1.5x, draws return the stake.
    Standard,
    /// Wins pay 2x, naturals included. A dealer blackjack takes drawn hands.
    EvenMoney,
    /// Spanish 21 bonus table; a player natural always wins.
    Spanish,
}

/// Strategy record: everything that differs between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRules {
    /// Display name.
    pub name: &'static str,
    /// Key of the rules text file.
    pub rules_key: &'static str,
    /// One-line summary of the natural payout.
    pub odds_message: &'static str,
    /// Opening deal.
    pub deal: DealLayout,
    /// Double-down eligibility.
    pub double: DoubleOption,
    /// Payout table.
    pub payout: PayoutTable,
    /// Ranks stripped from the shoe after every (re)build.
    pub removed_ranks: &'static [Rank],
    /// Whether the player may fold.
    pub allows_fold: bool,
}

/// A playable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Standard blackjack.
    #[default]
    Blackjack,
    /// Face Up 21: both dealer cards are dealt face up.
    FaceUp21,
    /// Spanish 21: no tens in the shoe, bonus payouts.
    Spanish21,
}

impl Variant {
    /// All variants, in menu order.
    pub const ALL: [Self; 3] = [Self::Blackjack, Self::FaceUp21, Self::Spanish21];

    /// Returns the strategy record for this variant.
    #[must_use]
    pub const fn rules(self) -> VariantRules {
        match self {
            Self::Blackjack => VariantRules {
                name: "Blackjack",
                rules_key: "blackjack",
                odds_message: "blackjack pays (3/2)",
                deal: DealLayout::Standard,
                double: DoubleOption::Any,
                payout: PayoutTable::Standard,
                removed_ranks: &[],
                allows_fold: true,
            },
            Self::FaceUp21 => VariantRules {
                name: "Face Up 21",
                rules_key: "face_up_21",
                odds_message: "blackjack pays even money",
                deal: DealLayout::FaceUp,
                double: DoubleOption::NineTenOrAce,
                payout: PayoutTable::EvenMoney,
                removed_ranks: &[],
                allows_fold: false,
            },
            Self::Spanish21 => VariantRules {
                name: "Spanish 21",
                rules_key: "spanish_21",
                odds_message: "blackjack pays (3/2)",
                deal: DealLayout::Standard,
                double: DoubleOption::Any,
                payout: PayoutTable::Spanish,
                removed_ranks: &[Rank::Ten],
                allows_fold: false,
            },
        }
    }

    /// Returns the 1-based menu number.
    #[must_use]
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::Blackjack => 1,
            Self::FaceUp21 => 2,
            Self::Spanish21 => 3,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rules().name)
    }
}

/// Parses a menu number (`1`, `2`, `3`) or a rules key (`face_up_21`).
///
/// ```
/// use bj21::Variant;
///
/// assert_eq!("2".parse::<Variant>(), Ok(Variant::FaceUp21));
/// assert_eq!("spanish_21".parse::<Variant>(), Ok(Variant::Spanish21));
/// assert!("4".parse::<Variant>().is_err());
/// ```
impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| {
                s.parse::<u8>().is_ok_and(|n| n == v.menu_number())
                    || s.eq_ignore_ascii_case(v.rules().rules_key)
            })
            .ok_or(ParseVariantError)
    }
}
