//! The boundary between the engine and a presentation layer.
//!
//! A view sends [`Intent`]s into the [`Game`](crate::Game) and receives
//! [`Event`]s back, either by draining them directly or by implementing
//! [`Observer`] and calling [`Game::drain_into`](crate::Game::drain_into).
//! Events are queued in the order the engine produced them, so a view can
//! replay them with whatever pacing or animation it likes.

use crate::card::Card;
use crate::result::{RoundResult, SessionStats};

/// Who received a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A request from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Bet this amount and deal a new round.
    PlaceBet(u64),
    /// Take another card.
    Hit,
    /// Keep the current hand and let the dealer play.
    Stand,
    /// Clear the table and return to betting.
    StartNextHand,
}

/// A state change reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A card was dealt. Hidden cards must be shown face down until
    /// [`Event::HoleCardRevealed`].
    CardDealt {
        /// Who received the card.
        participant: Participant,
        /// The card.
        card: Card,
        /// Whether the card is dealt face down.
        hidden: bool,
    },
    /// The dealer turned the hole card over.
    HoleCardRevealed(Card),
    /// Totals changed. The dealer total leaves out a hidden hole card.
    ScoresUpdated {
        /// The player's total.
        player: u16,
        /// The dealer's visible total.
        dealer: u16,
    },
    /// The round was settled.
    RoundSettled(RoundResult),
    /// Session statistics changed.
    StatsUpdated(SessionStats),
    /// The balance changed.
    BalanceUpdated(u64),
    /// The deck ran low and was replaced by a fresh shuffled one.
    DeckReplenished,
    /// The balance is zero; no more bets can be placed.
    GameOver,
}

impl Event {
    /// Forwards this event to the matching observer method.
    pub fn dispatch<O: Observer + ?Sized>(&self, observer: &mut O) {
        match *self {
            Self::CardDealt {
                participant,
                card,
                hidden,
            } => observer.on_card_dealt(participant, card, hidden),
            Self::HoleCardRevealed(card) => observer.on_hole_card_revealed(card),
            Self::ScoresUpdated { player, dealer } => observer.on_scores_updated(player, dealer),
            Self::RoundSettled(result) => observer.on_round_settled(&result),
            Self::StatsUpdated(stats) => observer.on_stats_updated(&stats),
            Self::BalanceUpdated(balance) => observer.on_balance_updated(balance),
            Self::DeckReplenished => observer.on_deck_replenished(),
            Self::GameOver => observer.on_game_over(),
        }
    }
}

/// Receives engine events. Every method defaults to doing nothing.
pub trait Observer {
    /// A card was dealt.
    fn on_card_dealt(&mut self, participant: Participant, card: Card, hidden: bool) {
        let _ = (participant, card, hidden);
    }

    /// The dealer's hole card was revealed.
    fn on_hole_card_revealed(&mut self, card: Card) {
        let _ = card;
    }

    /// Totals changed.
    fn on_scores_updated(&mut self, player: u16, dealer: u16) {
        let _ = (player, dealer);
    }

    /// The round was settled.
    fn on_round_settled(&mut self, result: &RoundResult) {
        let _ = result;
    }

    /// Session statistics changed.
    fn on_stats_updated(&mut self, stats: &SessionStats) {
        let _ = stats;
    }

    /// The balance changed.
    fn on_balance_updated(&mut self, balance: u64) {
        let _ = balance;
    }

    /// The deck was replenished.
    fn on_deck_replenished(&mut self) {}

    /// No more bets can be placed.
    fn on_game_over(&mut self) {}
}
