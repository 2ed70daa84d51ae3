//! Deck tests.

use std::collections::HashSet;

use blackjack_session::{Card, DECK_SIZE, Deck, DeckError, Rank, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_by_key(|c| (c.suit, c.rank));
    cards
}

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for rank in Rank::ALL {
        let count = deck.cards().iter().filter(|c| c.rank == rank).count();
        assert_eq!(count, 4, "{rank:?}");
    }
    for suit in Suit::ALL {
        let count = deck.cards().iter().filter(|c| c.suit == suit).count();
        assert_eq!(count, 13, "{suit:?}");
    }
}

#[test]
fn new_deck_order_is_fixed() {
    let deck = Deck::new();
    assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(deck.cards()[12], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(deck.cards()[13], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(deck, Deck::new());
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::new();
    assert_eq!(deck.draw(), Ok(Card::new(Rank::Ace, Suit::Spades)));
    assert_eq!(deck.draw(), Ok(Card::new(Rank::King, Suit::Spades)));
    assert_eq!(deck.len(), DECK_SIZE - 2);
}

#[test]
fn draw_from_empty_deck_fails() {
    let mut deck = Deck::from_cards(vec![Card::new(Rank::Five, Suit::Clubs)]);
    assert!(deck.draw().is_ok());
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn replenish_below_threshold() {
    let mut deck = Deck::new();
    assert!(!deck.needs_replenish(10));

    while deck.len() > 10 {
        deck.draw().unwrap();
    }
    assert!(!deck.needs_replenish(10));

    deck.draw().unwrap();
    assert!(deck.needs_replenish(10));
}

#[test]
fn stacked_deck_draws_in_order() {
    let first = Card::new(Rank::King, Suit::Hearts);
    let second = Card::new(Rank::Six, Suit::Clubs);
    let filler = Card::new(Rank::Two, Suit::Diamonds);
    let mut deck = Deck::stacked(&[first, second], &[filler]);

    assert_eq!(deck.len(), 3);
    assert_eq!(deck.draw(), Ok(first));
    assert_eq!(deck.draw(), Ok(second));
    assert_eq!(deck.draw(), Ok(filler));
}

#[test]
fn card_display() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A of Spades");
    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
}

proptest! {
    #[test]
    fn shuffle_preserves_the_cards(seed in any::<u64>(), rounds in 1usize..5) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        for _ in 0..rounds {
            deck.shuffle(&mut rng);
            prop_assert_eq!(deck.len(), DECK_SIZE);
            prop_assert_eq!(sorted(deck.cards()), sorted(Deck::new().cards()));
        }
    }

    #[test]
    fn shuffled_decks_differ_by_seed(seed in any::<u64>()) {
        let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)));
        prop_assert_ne!(first, second);
    }
}
