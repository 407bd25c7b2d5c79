//! A text blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a single-player table through
//! betting, the opening deal, player actions, the dealer's turn and the
//! showdown. Three rule variants share the engine: standard blackjack,
//! Face Up 21 and Spanish 21.
//!
//! All amounts are whole cents.
//!
//! # Example
//!
//! ```
//! use bj21::{Game, GameOptions, GamePhase, Variant};
//!
//! let options = GameOptions::default()
//!     .with_variant(Variant::Blackjack)
//!     .with_auto_dealer(true);
//! let mut game = Game::new(options, 42);
//!
//! game.bet(1_000).unwrap();
//! game.deal().unwrap();
//! game.stand().unwrap();
//!
//! assert_eq!(game.phase(), GamePhase::RoundOver);
//! println!("{}", game.view());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod collection;
pub mod command;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod money;
pub mod options;
pub mod player;
pub mod render;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod rules;
pub mod variant;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use collection::{CardCollection, CardFilter};
pub use command::Command;
pub use deck::{Deck, Shoe};
pub use error::{
    ActionError, BetError, DealError, EmptyCollectionError, ParseCommandError, ParseVariantError,
    SessionError,
};
pub use game::{Game, GamePhase, PlayerHandStatus, resolve};
pub use hand::{Hand, Outcome};
pub use options::{DoubleOption, GameOptions, RoundingMode};
pub use player::{Dealer, HandSlot, Player};
pub use render::TableView;
pub use result::{HandResult, RoundResult};
pub use variant::{DealLayout, PayoutTable, Variant, VariantRules};
