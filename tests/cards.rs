//! Card, collection, deck and shoe tests.

use std::collections::HashSet;

use bj21::{
    Card, CardCollection, CardFilter, DECK_SIZE, Deck, EmptyCollectionError, Rank, Shoe, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_values_and_display() {
    assert_eq!(card(Suit::Spades, Rank::Ace).value(), 1);
    assert_eq!(card(Suit::Hearts, Rank::Seven).value(), 7);
    assert_eq!(card(Suit::Clubs, Rank::Queen).value(), 10);
    assert_eq!(Card::joker().value(), 0);
    assert!(card(Suit::Diamonds, Rank::Ace).is_ace());

    assert_eq!(card(Suit::Spades, Rank::Ten).to_string(), "♠10");
    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "♥A");
}

#[test]
fn deck_has_every_card_once() {
    let deck = Deck::new(false);
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert!(!deck.has_joker());

    let unique: HashSet<Card> = deck.cards().cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(!deck.cards().has_card(Suit::Joker));
}

#[test]
fn deck_with_joker() {
    let mut deck = Deck::new(true);
    assert_eq!(deck.remaining(), DECK_SIZE + 1);
    assert!(deck.cards().has_card(Card::joker()));

    deck.deal().unwrap();
    deck.reset();
    assert_eq!(deck.remaining(), DECK_SIZE + 1);
}

#[test]
fn deck_deals_until_empty() {
    let mut deck = Deck::new(false);
    for left in (0..DECK_SIZE).rev() {
        deck.deal().unwrap();
        assert_eq!(deck.remaining(), left);
    }
    assert_eq!(deck.deal(), Err(EmptyCollectionError));
}

#[test]
fn shoe_size_and_deal() {
    let mut shoe = Shoe::new(6, 3);
    assert_eq!(shoe.size(), 6);
    assert_eq!(shoe.remaining(), DECK_SIZE * 6);

    shoe.deal().unwrap();
    shoe.deal().unwrap();
    assert_eq!(shoe.remaining(), DECK_SIZE * 6 - 2);

    shoe.reset();
    assert_eq!(shoe.remaining(), DECK_SIZE * 6);
}

#[test]
fn shoe_is_deterministic_per_seed() {
    let a = Shoe::new(2, 99);
    let b = Shoe::new(2, 99);
    let c = Shoe::new(2, 100);
    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn empty_shoe_errors() {
    let mut shoe = Shoe::new(1, 0);
    shoe.replace_cards(vec![card(Suit::Hearts, Rank::Two)]);
    assert_eq!(shoe.deal(), Ok(card(Suit::Hearts, Rank::Two)));
    assert_eq!(shoe.deal(), Err(EmptyCollectionError));
}

#[test]
fn shoe_remove_rank_and_card() {
    let mut shoe = Shoe::new(2, 5);
    shoe.remove_rank(Rank::Ten);
    assert_eq!(shoe.remaining(), (DECK_SIZE - 4) * 2);
    assert!(!shoe.cards().has_card(Rank::Ten));

    assert!(shoe.remove(card(Suit::Spades, Rank::Ace)));
    assert_eq!(shoe.remaining(), (DECK_SIZE - 5) * 2);
    assert!(!shoe.remove(card(Suit::Spades, Rank::Ace)));
}

#[test]
fn collection_queries() {
    let mut cards = CardCollection::from_cards(vec![
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Ace),
    ]);

    assert_eq!(cards.total(), 18);
    assert_eq!(cards.values(), vec![7, 10, 1]);
    assert!(cards.all_same_suit());
    assert!(cards.has_card(Rank::King));
    assert!(cards.has_card(Suit::Hearts));
    assert!(cards.has_card(CardFilter::Value(10)));
    assert!(!cards.has_card(Suit::Clubs));
    assert!(!cards.has_card(card(Suit::Clubs, Rank::Seven)));

    cards.add(card(Suit::Clubs, Rank::Two));
    assert!(!cards.all_same_suit());

    assert_eq!(cards.take(0), Some(card(Suit::Hearts, Rank::Seven)));
    assert_eq!(cards.take(10), None);
    assert_eq!(cards.deal(), Ok(card(Suit::Clubs, Rank::Two)));
    assert_eq!(cards.len(), 2);

    cards.reset();
    assert!(cards.is_empty());
}

#[test]
fn empty_collection_is_not_same_suit() {
    let cards = CardCollection::new();
    assert!(!cards.all_same_suit());
    assert_eq!(cards.total(), 0);
}

#[test]
fn collection_from_iterator() {
    let cards: CardCollection = Suit::STANDARD
        .into_iter()
        .map(|suit| card(suit, Rank::Five))
        .collect();
    assert_eq!(cards.len(), 4);
    assert_eq!(cards.total(), 20);
    assert_eq!(cards.into_iter().count(), 4);
}
