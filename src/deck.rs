//! The draw pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Remaining-card count below which the deck is replaced before the next draw.
pub const DEFAULT_REPLENISH_THRESHOLD: usize = 10;

/// An ordered pile of cards. The top of the deck is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full 52-card set in a fixed order: suit by suit, ranks
    /// two through ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a fresh deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Builds a deck from cards in draw-pile order: the last card is drawn first.
    ///
    /// No composition checks are made, so this can stack a deck for a replay.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Builds a deck whose draws return `draws` in order, followed by `rest`.
    #[must_use]
    pub fn stacked(draws: &[Card], rest: &[Card]) -> Self {
        let mut cards: Vec<Card> = rest.iter().rev().copied().collect();
        cards.extend(draws.iter().rev().copied());
        Self { cards }
    }

    /// Shuffles the deck in place (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns whether fewer than `threshold` cards remain.
    #[must_use]
    pub fn needs_replenish(&self, threshold: usize) -> bool {
        self.cards.len() < threshold
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
