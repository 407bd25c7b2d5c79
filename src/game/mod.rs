//! Game engine and state management.

use crate::card::Card;
use crate::deck::Shoe;
use crate::error::EmptyCollectionError;
use crate::options::GameOptions;
use crate::player::{Dealer, Player};
use crate::result::RoundResult;
use crate::variant::VariantRules;

mod actions;
mod bet;
mod showdown;
pub mod state;

pub use showdown::resolve;
pub use state::{GamePhase, PlayerHandStatus};

/// A single-player blackjack table running one rule variant.
///
/// The game owns the shoe, the player and the dealer. Every variant runs
/// through the same engine; the differences live in the [`VariantRules`]
/// selected by [`GameOptions::variant`].
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    rules: VariantRules,
    shoe: Shoe,
    player: Player,
    dealer: Dealer,
    phase: GamePhase,
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bj21::{Game, GameOptions, Variant};
    ///
    /// let game = Game::new(GameOptions::default().with_variant(Variant::Spanish21), 42);
    /// assert_eq!(game.cards_remaining(), 48);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let rules = options.variant.rules();
        let shoe = Shoe::new(options.decks, seed);
        let player = Player::new(options.wallet);

        let mut game = Self {
            options,
            rules,
            shoe,
            player,
            dealer: Dealer::new(),
            phase: GamePhase::Betting,
            last_result: None,
        };
        game.strip_removed_ranks();
        game
    }

    /// Applies the variant's card removal to a freshly built shoe.
    fn strip_removed_ranks(&mut self) {
        for &rank in self.rules.removed_ranks {
            self.shoe.remove_rank(rank);
        }
    }

    /// Rebuilds and reshuffles the shoe, then removes the ranks the variant
    /// plays without. The current round carries on.
    pub fn reset_shoe(&mut self) {
        self.shoe.reset();
        self.strip_removed_ranks();
        log::info!(
            "{} shoe reshuffled, {} cards",
            self.rules.name,
            self.shoe.remaining()
        );
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, EmptyCollectionError> {
        self.shoe.deal()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the rules of the variant being played.
    #[must_use]
    pub const fn rules(&self) -> &VariantRules {
        &self.rules
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the player's wallet, in cents.
    #[must_use]
    pub const fn wallet(&self) -> usize {
        self.player.wallet
    }

    /// Returns the player's turn status.
    #[must_use]
    pub const fn status(&self) -> PlayerHandStatus {
        self.player.status
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stack it.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the result of the most recently resolved round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Clears all hands and bets and returns to the betting phase.
    ///
    /// The wallet and the shoe carry over.
    pub fn next_round(&mut self) {
        self.player.reset();
        self.dealer.reset();
        self.phase = GamePhase::Betting;
    }
}
