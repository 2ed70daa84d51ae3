use tracing::{debug, info};

use crate::error::{BetError, DeckError};
use crate::event::{Event, Participant};

use super::{Game, GameState, Round};

/// Order of the initial deal. The dealer's second card is the hole card.
const DEAL_ORDER: [Participant; 4] = [
    Participant::Player,
    Participant::Dealer,
    Participant::Player,
    Participant::Dealer,
];

impl Game {
    fn deal_initial_cards(&self, round: &mut Round) -> Result<(), DeckError> {
        for participant in DEAL_ORDER {
            self.deal_to(round, participant)?;
        }
        Ok(())
    }

    /// Places a bet and deals a new round.
    ///
    /// The bet is taken from the balance, then the player and dealer receive
    /// two cards each, alternating, with the dealer's second card face down.
    /// The round is left in [`GameState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InvalidState`] outside the betting phase and
    /// [`BetError::InsufficientFunds`] if the amount is zero or more than the
    /// balance. Neither changes anything. [`BetError::Deck`] means the deck
    /// could not be replenished and should be treated as fatal.
    pub fn place_bet(&self, amount: u64) -> Result<(), BetError> {
        let mut round = self.round.lock();
        if round.state != GameState::Betting {
            debug!(state = ?round.state, amount, "bet rejected");
            return Err(BetError::InvalidState(round.state));
        }

        let mut ledger = self.ledger.lock();
        ledger
            .debit_bet(amount)
            .inspect_err(|err| debug!(%err, "bet declined"))?;
        let balance = ledger.balance();
        drop(ledger);

        info!(amount, balance, "bet placed");
        self.emit(Event::BalanceUpdated(balance));

        round.clear();
        round.bet = amount;
        round.state = GameState::Dealing;

        self.deal_initial_cards(&mut round)?;

        round.state = GameState::PlayerTurn;
        self.emit_scores(&round);

        Ok(())
    }
}
