//! Game configuration options.

use crate::card::Card;
use crate::money::CENTS_PER_UNIT;
use crate::variant::Variant;

/// Conditions under which doubling down is allowed.
///
/// Doubling always requires the active hand to hold exactly one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any first card.
    #[default]
    Any,
    /// Double down allowed only when the first card is an ace, a nine, or
    /// worth ten.
    NineTenOrAce,
}

impl DoubleOption {
    /// Checks whether a hand whose first card is `card` may double down.
    #[must_use]
    pub const fn allows(self, card: &Card) -> bool {
        match self {
            Self::Any => true,
            Self::NineTenOrAce => matches!(card.value(), 1 | 9 | 10),
        }
    }
}

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bj21::{GameOptions, Variant};
///
/// let options = GameOptions::default()
///     .with_variant(Variant::Spanish21)
///     .with_decks(6)
///     .with_wallet(50_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Rule variant.
    pub variant: Variant,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Starting wallet, in cents.
    pub wallet: usize,
    /// Whether the dealer gets a face-down second card in the standard deal.
    pub hole_card: bool,
    /// Whether the dealer plays automatically once the player is done.
    pub auto_dealer: bool,
    /// Whether an automatic dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Rounding mode for fractional payouts.
    pub rounding: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Blackjack,
            decks: 1,
            wallet: 100 * CENTS_PER_UNIT,
            hole_card: false,
            auto_dealer: false,
            stand_on_soft_17: true,
            rounding: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the rule variant.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::{GameOptions, Variant};
    ///
    /// let options = GameOptions::default().with_variant(Variant::FaceUp21);
    /// assert_eq!(options.variant, Variant::FaceUp21);
    /// ```
    #[must_use]
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting wallet, in cents.
    #[must_use]
    pub const fn with_wallet(mut self, wallet: usize) -> Self {
        self.wallet = wallet;
        self
    }

    /// Sets whether the standard deal gives the dealer a face-down card.
    #[must_use]
    pub const fn with_hole_card(mut self, hole_card: bool) -> Self {
        self.hole_card = hole_card;
        self
    }

    /// Sets whether the dealer plays automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_dealer(true);
    /// assert!(options.auto_dealer);
    /// ```
    #[must_use]
    pub const fn with_auto_dealer(mut self, auto: bool) -> Self {
        self.auto_dealer = auto;
        self
    }

    /// Sets whether an automatic dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the rounding mode for fractional payouts.
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }
}
