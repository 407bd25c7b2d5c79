//! Variant payout tests.

use bj21::{
    Card, DECK_SIZE, Game, GameOptions, GamePhase, Outcome, Rank, RoundResult, RoundingMode, Suit,
    Variant,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn set_shoe_from_draws(game: &mut Game, draws: &[Card]) {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    game.shoe_mut().replace_cards(cards);
}

/// Plays a standard-deal round: `dealer` up card, then `player` cards (first
/// dealt, the rest hit), then the player stands, the dealer draws `dealer_hits`
/// and stands.
fn play_standard(
    options: GameOptions,
    bet: usize,
    dealer: Card,
    player: &[Card],
    dealer_hits: &[Card],
) -> (Game, RoundResult) {
    let mut game = Game::new(options, 1);
    game.bet(bet).unwrap();

    let mut draws = vec![dealer, player[0]];
    draws.extend_from_slice(&player[1..]);
    draws.extend_from_slice(dealer_hits);
    set_shoe_from_draws(&mut game, &draws);

    game.deal().unwrap();
    for _ in 1..player.len() {
        game.hit().unwrap();
    }
    if game.phase() == GamePhase::PlayerTurn {
        game.stand().unwrap();
    }
    for _ in dealer_hits {
        if game.phase() == GamePhase::DealerTurn {
            game.hit().unwrap();
        }
    }
    if game.phase() == GamePhase::DealerTurn {
        game.stand().unwrap();
    }

    assert_eq!(game.phase(), GamePhase::RoundOver);
    let result = game.last_result().unwrap().clone();
    (game, result)
}

fn spanish() -> GameOptions {
    GameOptions::default().with_variant(Variant::Spanish21)
}

#[test]
fn blackjack_natural_pays_one_and_a_half() {
    let (game, result) = play_standard(
        GameOptions::default(),
        1_000,
        card(Suit::Clubs, Rank::Nine),
        &[card(Suit::Hearts, Rank::Ace), card(Suit::Hearts, Rank::King)],
        &[],
    );

    assert!(result.hands[0].blackjack);
    assert_eq!(result.hands[0].outcome, Outcome::Player);
    assert_eq!(result.hands[0].payout, 1_500);
    assert_eq!(game.wallet(), 10_500);
}

#[test]
fn fractional_payouts_follow_rounding_mode() {
    let hand = [card(Suit::Hearts, Rank::Ace), card(Suit::Hearts, Rank::King)];
    let dealer = card(Suit::Clubs, Rank::Nine);

    let (_, down) = play_standard(GameOptions::default(), 1_001, dealer, &hand, &[]);
    assert_eq!(down.hands[0].payout, 1_501);

    let up = GameOptions::default().with_rounding(RoundingMode::Up);
    let (_, up) = play_standard(up, 1_001, dealer, &hand, &[]);
    assert_eq!(up.hands[0].payout, 1_502);
}

#[test]
fn blackjack_draw_returns_the_bet() {
    let (game, result) = play_standard(
        GameOptions::default(),
        1_000,
        card(Suit::Clubs, Rank::Ten),
        &[card(Suit::Hearts, Rank::Nine), card(Suit::Hearts, Rank::Eight)],
        &[card(Suit::Spades, Rank::Seven)],
    );

    assert_eq!(result.hands[0].outcome, Outcome::Draw);
    assert_eq!(result.hands[0].payout, 1_000);
    assert_eq!(game.wallet(), 10_000);
    assert!(game.view().to_string().contains("No winner"));
}

#[test]
fn face_up_deal_shows_two_dealer_cards() {
    let mut game = Game::new(GameOptions::default().with_variant(Variant::FaceUp21), 1);
    game.bet(1_000).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::King),
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.dealer().hand.total(), 17);
    assert_eq!(game.dealer().visible_cards().len(), 2);
    assert_eq!(game.player().hand.cards(), [card(Suit::Hearts, Rank::King)]);
}

#[test]
fn face_up_bust_pays_nothing() {
    let mut game = Game::new(GameOptions::default().with_variant(Variant::FaceUp21), 1);
    game.bet(1_000).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::King),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Clubs, Rank::Five),
        ],
    );

    game.deal().unwrap();
    game.hit().unwrap();
    game.hit().unwrap();

    assert_eq!(game.phase(), GamePhase::RoundOver);
    let result = game.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, Outcome::Dealer);
    assert_eq!(result.hands[0].payout, 0);
    assert_eq!(game.wallet(), 9_000);
}

/// Plays a Face Up 21 round: two dealer cards, then the player's cards.
fn play_face_up(dealer: [Card; 2], player: &[Card]) -> (Game, RoundResult) {
    let mut game = Game::new(GameOptions::default().with_variant(Variant::FaceUp21), 1);
    game.bet(1_000).unwrap();

    let mut draws = dealer.to_vec();
    draws.extend_from_slice(player);
    set_shoe_from_draws(&mut game, &draws);

    game.deal().unwrap();
    for _ in 1..player.len() {
        game.hit().unwrap();
    }
    game.stand().unwrap();
    game.stand().unwrap();

    let result = game.last_result().unwrap().clone();
    (game, result)
}

#[test]
fn face_up_blackjack_pays_even_money() {
    let (game, result) = play_face_up(
        [card(Suit::Clubs, Rank::Ten), card(Suit::Clubs, Rank::Eight)],
        &[card(Suit::Hearts, Rank::Ace), card(Suit::Hearts, Rank::Jack)],
    );

    assert_eq!(result.hands[0].outcome, Outcome::Player);
    assert_eq!(result.hands[0].payout, 2_000);
    assert_eq!(game.wallet(), 11_000);
}

#[test]
fn face_up_dealer_blackjack_takes_a_draw() {
    let (game, result) = play_face_up(
        [card(Suit::Clubs, Rank::Ace), card(Suit::Diamonds, Rank::King)],
        &[card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Queen)],
    );

    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, Outcome::Dealer);
    assert_eq!(result.hands[0].payout, 0);
    assert_eq!(game.wallet(), 9_000);
}

#[test]
fn face_up_plain_draw_returns_the_bet() {
    let (game, result) = play_face_up(
        [card(Suit::Clubs, Rank::Ten), card(Suit::Diamonds, Rank::Eight)],
        &[card(Suit::Hearts, Rank::Ten), card(Suit::Spades, Rank::Eight)],
    );

    assert_eq!(result.hands[0].outcome, Outcome::Draw);
    assert_eq!(game.wallet(), 10_000);
}

#[test]
fn spanish_shoe_has_no_tens() {
    let mut game = Game::new(spanish().with_decks(2), 9);
    assert_eq!(game.cards_remaining(), (DECK_SIZE - 4) * 2);
    assert!(!game.shoe().cards().has_card(Rank::Ten));

    game.reset_shoe();
    assert_eq!(game.cards_remaining(), (DECK_SIZE - 4) * 2);
    assert!(!game.shoe().cards().has_card(Rank::Ten));
    assert!(game.shoe().cards().has_card(Rank::Jack));
}

#[test]
fn spanish_blackjack_beats_dealer_blackjack() {
    let (game, result) = play_standard(
        spanish(),
        1_000,
        card(Suit::Spades, Rank::Ace),
        &[card(Suit::Spades, Rank::Ace), card(Suit::Spades, Rank::Ten)],
        &[card(Suit::Diamonds, Rank::Jack)],
    );

    assert!(result.dealer_blackjack);
    assert_eq!(result.hands[0].outcome, Outcome::Player);
    assert_eq!(result.hands[0].payout, 1_500);
    assert_eq!(game.wallet(), 10_500);
}

#[test]
fn spanish_card_count_bonuses() {
    let player = [
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Seven),
    ];
    let (_, five) = play_standard(spanish(), 1_000, card(Suit::Clubs, Rank::Nine), &player, &[]);
    assert_eq!(five.hands[0].player_total, 21);
    assert_eq!(five.hands[0].payout, 1_500);

    let player = [
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Five),
    ];
    let (_, six) = play_standard(spanish(), 1_000, card(Suit::Clubs, Rank::Nine), &player, &[]);
    assert_eq!(six.hands[0].payout, 2_000);

    let player = [
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Four),
        card(Suit::Hearts, Rank::Three),
    ];
    let (_, seven) = play_standard(spanish(), 1_000, card(Suit::Clubs, Rank::Nine), &player, &[]);
    assert_eq!(seven.hands[0].payout, 3_000);
}

#[test]
fn spanish_plain_win_pays_double() {
    let (_, result) = play_standard(
        spanish(),
        1_000,
        card(Suit::Clubs, Rank::Nine),
        &[card(Suit::Hearts, Rank::King), card(Suit::Spades, Rank::Nine)],
        &[],
    );
    assert_eq!(result.hands[0].payout, 2_000);
    assert_eq!(result.hands[0].bonus, 0);
}

#[test]
fn spanish_six_seven_eight() {
    let suited = [
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Hearts, Rank::Seven),
    ];
    let (_, result) = play_standard(spanish(), 1_000, card(Suit::Clubs, Rank::Nine), &suited, &[]);
    assert_eq!(result.hands[0].payout, 2_000);

    let mixed = [
        card(Suit::Hearts, Rank::Six),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Hearts, Rank::Eight),
    ];
    let (_, result) = play_standard(spanish(), 1_000, card(Suit::Clubs, Rank::Nine), &mixed, &[]);
    assert_eq!(result.hands[0].payout, 1_500);
}

#[test]
fn spanish_suited_sevens_bonus() {
    let sevens = [card(Suit::Hearts, Rank::Seven); 3];

    let (game, small) = play_standard(spanish(), 1_000, card(Suit::Clubs, Rank::Seven), &sevens, &[]);
    assert_eq!(small.hands[0].bonus, 100_000);
    assert_eq!(small.hands[0].payout, 102_000);
    assert_eq!(game.wallet(), 111_000);
    assert!(game.view().to_string().contains("Bonus: $1000.00"));

    let (_, large) = play_standard(spanish(), 3_000, card(Suit::Clubs, Rank::Seven), &sevens, &[]);
    assert_eq!(large.hands[0].bonus, 500_000);
    assert_eq!(large.hands[0].payout, 506_000);

    let (_, no_seven) =
        play_standard(spanish(), 1_000, card(Suit::Clubs, Rank::Nine), &sevens, &[]);
    assert_eq!(no_seven.hands[0].bonus, 0);
    assert_eq!(no_seven.hands[0].payout, 2_000);
}

#[test]
fn spanish_mixed_sevens() {
    let sevens = [
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Hearts, Rank::Seven),
    ];
    let (_, result) = play_standard(spanish(), 1_000, card(Suit::Clubs, Rank::Seven), &sevens, &[]);
    assert_eq!(result.hands[0].bonus, 0);
    assert_eq!(result.hands[0].payout, 1_500);
}

#[test]
fn huge_wallet_win_saturates() {
    let start = usize::MAX - 10;
    let (game, result) = play_standard(
        GameOptions::default().with_wallet(start),
        start,
        card(Suit::Clubs, Rank::Nine),
        &[card(Suit::Hearts, Rank::King), card(Suit::Spades, Rank::Queen)],
        &[],
    );

    assert_eq!(result.hands[0].outcome, Outcome::Player);
    assert_eq!(result.hands[0].payout, usize::MAX);
    assert_eq!(result.total_payout(), usize::MAX);
    assert_eq!(result.net(), 0);
    assert_eq!(game.wallet(), usize::MAX);
}

#[test]
fn huge_natural_and_spanish_bonus_saturate() {
    let start = usize::MAX - 10;
    let (game, result) = play_standard(
        GameOptions::default().with_wallet(start),
        start,
        card(Suit::Clubs, Rank::Nine),
        &[card(Suit::Hearts, Rank::Ace), card(Suit::Hearts, Rank::King)],
        &[],
    );
    assert_eq!(result.hands[0].payout, usize::MAX);
    assert_eq!(game.wallet(), usize::MAX);

    let sevens = [card(Suit::Hearts, Rank::Seven); 3];
    let (game, result) = play_standard(
        spanish().with_wallet(start),
        start,
        card(Suit::Clubs, Rank::Seven),
        &sevens,
        &[],
    );
    assert_eq!(result.hands[0].bonus, 500_000);
    assert_eq!(result.hands[0].payout, usize::MAX);
    assert_eq!(game.wallet(), usize::MAX);
}
