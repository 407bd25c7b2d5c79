//! Decks and the multi-deck shoe.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::collection::CardCollection;
use crate::error::EmptyCollectionError;

/// A single 52-card deck, optionally with one joker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: CardCollection,
    with_joker: bool,
}

impl Deck {
    /// Creates a fresh, unshuffled deck.
    #[must_use]
    pub fn new(with_joker: bool) -> Self {
        Self {
            cards: Self::generate(with_joker),
            with_joker,
        }
    }

    fn generate(with_joker: bool) -> CardCollection {
        let mut cards = Vec::with_capacity(DECK_SIZE + usize::from(with_joker));

        for rank in Rank::STANDARD {
            for suit in Suit::STANDARD {
                cards.push(Card::new(suit, rank));
            }
        }

        if with_joker {
            cards.push(Card::joker());
        }

        CardCollection::from_cards(cards)
    }

    /// Regenerates the full deck, keeping the joker setting.
    pub fn reset(&mut self) {
        self.cards = Self::generate(self.with_joker);
    }

    /// Returns whether this deck carries a joker.
    #[must_use]
    pub const fn has_joker(&self) -> bool {
        self.with_joker
    }

    /// Shuffles the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the underlying collection.
    #[must_use]
    pub const fn cards(&self) -> &CardCollection {
        &self.cards
    }

    /// Returns the underlying collection mutably.
    pub const fn cards_mut(&mut self) -> &mut CardCollection {
        &mut self.cards
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn deal(&mut self) -> Result<Card, EmptyCollectionError> {
        self.cards.deal()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl From<Deck> for CardCollection {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

/// Several decks shuffled together.
///
/// The shoe shuffles with its own seeded RNG on construction and on every
/// [`reset`](Self::reset). Card removal required by a variant is the owner's
/// job; see [`Game::reset_shoe`](crate::Game::reset_shoe).
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: CardCollection,
    size: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `size` decks.
    #[must_use]
    pub fn new(size: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::generate(size, &mut rng);
        Self { cards, size, rng }
    }

    /// Creates and shuffles a collection holding `size` fresh decks.
    fn generate(size: u8, rng: &mut ChaCha8Rng) -> CardCollection {
        let mut cards = CardCollection::new();
        for _ in 0..size {
            cards.extend(CardCollection::from(Deck::new(false)));
        }
        cards.shuffle(rng);
        cards
    }

    /// Rebuilds the shoe from `size` fresh decks and reshuffles.
    pub fn reset(&mut self) {
        self.cards = Self::generate(self.size, &mut self.rng);
        log::debug!("shoe rebuilt with {} cards", self.cards.len());
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is empty.
    pub fn deal(&mut self) -> Result<Card, EmptyCollectionError> {
        self.cards.deal()
    }

    /// Removes every copy of `card` from the shoe.
    pub fn remove(&mut self, card: Card) -> bool {
        self.cards.remove(card)
    }

    /// Removes every card of `rank`, across all suits.
    pub fn remove_rank(&mut self, rank: Rank) {
        for suit in Suit::STANDARD {
            self.cards.remove(Card::new(suit, rank));
        }
    }

    /// Replaces the shoe contents. The last card of `cards` is dealt first.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = CardCollection::from_cards(cards);
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the underlying collection.
    #[must_use]
    pub const fn cards(&self) -> &CardCollection {
        &self.cards
    }
}
