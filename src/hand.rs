//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::scoring::{self, BLACKJACK, DEALER_STAND_TOTAL};

/// Index of the dealer's hole card.
const HOLE_CARD_INDEX: usize = 1;

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u16 {
        scoring::hand_total(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        scoring::is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The second card dealt is the hole card. It stays hidden until
/// [`reveal_hole`](Self::reveal_hole) is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including a hidden hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the hole card, if it has been dealt.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.get(HOLE_CARD_INDEX)
    }

    /// Returns whether the card at `index` is currently face down.
    #[must_use]
    pub const fn is_hidden(&self, index: usize) -> bool {
        index == HOLE_CARD_INDEX && !self.hole_revealed
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value: every card except a hidden hole card.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        if self.hole_revealed {
            self.value()
        } else {
            let visible: Vec<Card> = self
                .cards
                .iter()
                .enumerate()
                .filter(|(index, _)| !self.is_hidden(*index))
                .map(|(_, card)| *card)
                .collect();
            scoring::hand_total(&visible)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        scoring::hand_total(&self.cards)
    }

    /// Returns whether the dealer must draw another card.
    ///
    /// The dealer draws below 17 and stands on every 17, soft or hard.
    #[must_use]
    pub fn must_draw(&self) -> bool {
        self.value() < DEALER_STAND_TOTAL
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        scoring::is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
