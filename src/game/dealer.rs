use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::DeckError;
use crate::event::{Event, Participant};
use crate::result::{Outcome, RoundResult};
use crate::scoring::BLACKJACK;

use super::{Game, GameState, Round};

/// Decides a round from the final totals.
const fn decide(player: u16, dealer: u16) -> Outcome {
    if player > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer > BLACKJACK {
        Outcome::DealerBust
    } else if player > dealer {
        Outcome::PlayerWin
    } else if player < dealer {
        Outcome::DealerWin
    } else {
        Outcome::Push
    }
}

impl Game {
    /// Dealer plays their hand.
    ///
    /// The dealer reveals the hole card and draws until reaching 17 or higher.
    /// Soft 17 stands. The total never decreases, so the loop ends within a
    /// handful of draws.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&self, round: &mut Round) -> Result<Vec<Card>, DeckError> {
        round.state = GameState::DealerTurn;
        round.dealer.reveal_hole();
        if let Some(&hole) = round.dealer.hole_card() {
            self.emit(Event::HoleCardRevealed(hole));
        }
        self.emit_scores(round);

        let mut drawn_cards = Vec::new();
        while round.dealer.must_draw() {
            let card = self.deal_to(round, Participant::Dealer)?;
            self.emit_scores(round);
            drawn_cards.push(card);
        }

        debug!(
            drawn = drawn_cards.len(),
            total = round.dealer.value(),
            "dealer finished"
        );
        Ok(drawn_cards)
    }

    /// Settles the round: books the outcome in the ledger and reports it.
    pub(super) fn settle(&self, round: &mut Round) -> RoundResult {
        let player_score = round.player.value();
        let dealer_score = round.dealer.value();
        let outcome = decide(player_score, dealer_score);
        let bet = round.bet;

        let mut ledger = self.ledger.lock();
        let payout = ledger.settle(outcome, bet);
        let balance = ledger.balance();
        let stats = ledger.stats();
        let broke = ledger.is_broke();
        drop(ledger);

        let balance_delta = if payout > 0 {
            i64::try_from(payout).unwrap_or(i64::MAX)
        } else {
            i64::try_from(bet).map_or(i64::MIN, |bet| -bet)
        };

        let result = RoundResult {
            outcome,
            bet,
            payout,
            balance_delta,
            player_score,
            dealer_score,
        };
        round.result = Some(result);
        round.state = GameState::Settled;

        info!(?outcome, bet, payout, balance, "round settled");
        self.emit(Event::RoundSettled(result));
        self.emit(Event::StatsUpdated(stats));
        self.emit(Event::BalanceUpdated(balance));
        if broke {
            info!("balance exhausted, game over");
            self.emit(Event::GameOver);
        }

        result
    }
}
