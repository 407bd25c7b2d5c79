//! Ordered card collections.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::EmptyCollectionError;

/// Query used by [`CardCollection::has_card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFilter {
    /// A card with this exact suit and rank.
    Card(Card),
    /// Any card of this suit.
    Suit(Suit),
    /// Any card of this rank.
    Rank(Rank),
    /// Any card with this numerical value.
    Value(u8),
}

impl CardFilter {
    fn matches(&self, card: &Card) -> bool {
        match *self {
            Self::Card(target) => *card == target,
            Self::Suit(suit) => card.suit == suit,
            Self::Rank(rank) => card.rank == rank,
            Self::Value(value) => card.value() == value,
        }
    }
}

impl From<Card> for CardFilter {
    fn from(card: Card) -> Self {
        Self::Card(card)
    }
}

impl From<Suit> for CardFilter {
    fn from(suit: Suit) -> Self {
        Self::Suit(suit)
    }
}

impl From<Rank> for CardFilter {
    fn from(rank: Rank) -> Self {
        Self::Rank(rank)
    }
}

/// An ordered sequence of cards.
///
/// The last card is the top of the collection: [`deal`](Self::deal) takes
/// from the end, [`add`](Self::add) appends to it. Duplicates are allowed so
/// several decks can share one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a collection holding `cards`, the last one on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Appends a card to the top of the collection.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollectionError`] if the collection holds no cards.
    pub fn deal(&mut self) -> Result<Card, EmptyCollectionError> {
        self.cards.pop().ok_or(EmptyCollectionError)
    }

    /// Removes every card with the same suit and rank as `card`.
    ///
    /// Returns `true` if at least one card was removed.
    pub fn remove(&mut self, card: Card) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| *c != card);
        self.cards.len() != before
    }

    /// Removes and returns the card at `index`, if any.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Shuffles the collection in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Sums the numerical values of all cards, aces counting 1.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.value())).sum()
    }

    /// Removes every card.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Returns whether any card matches `filter`.
    ///
    /// ```
    /// use bj21::{Card, CardCollection, Rank, Suit};
    ///
    /// let mut cards = CardCollection::new();
    /// cards.add(Card::new(Suit::Hearts, Rank::Seven));
    /// assert!(cards.has_card(Rank::Seven));
    /// assert!(!cards.has_card(Suit::Spades));
    /// ```
    #[must_use]
    pub fn has_card(&self, filter: impl Into<CardFilter>) -> bool {
        let filter = filter.into();
        self.cards.iter().any(|c| filter.matches(c))
    }

    /// Returns whether every card shares one suit.
    ///
    /// An empty collection has no established suit and returns `false`.
    #[must_use]
    pub fn all_same_suit(&self) -> bool {
        self.cards
            .split_first()
            .is_some_and(|(first, rest)| rest.iter().all(|c| c.suit == first.suit))
    }

    /// Returns the numerical value of each card, in collection order.
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.cards.iter().map(Card::value).collect()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Extend<Card> for CardCollection {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for CardCollection {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
