//! Card values and hand totals.

use crate::card::{Card, Rank};

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// Total at which the dealer stops drawing. Soft totals count.
pub const DEALER_STAND_TOTAL: u16 = 17;

/// Returns the value of a single card. Aces count high.
#[must_use]
pub const fn card_value(card: Card) -> u16 {
    match card.rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 11,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += card_value(*card);
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Calculates the total of a hand.
///
/// Every ace starts at 11 and is dropped to 1, one at a time, while the
/// total is over 21. The result is the best total not over 21, or the
/// smallest bust total when none exists.
#[must_use]
pub fn hand_total(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether the hand counts an ace as 11 without busting.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the hand is over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_total(cards) > BLACKJACK
}
