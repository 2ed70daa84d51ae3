use tracing::info;

use crate::card::Card;
use crate::error::{ActionError, GameError};
use crate::event::{Event, Intent, Participant};
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// If the card takes the player over 21 the round is settled on the spot
    /// as a loss. The dealer's hand is left as it is and the hole card stays
    /// hidden.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn; the
    /// call is then a no-op. [`ActionError::Deck`] is fatal.
    pub fn hit(&self) -> Result<Card, ActionError> {
        let mut round = self.round.lock();
        Self::ensure_state(&round, GameState::PlayerTurn)?;

        let card = self.deal_to(&mut round, Participant::Player)?;
        self.emit_scores(&round);

        if round.player.is_bust() {
            self.settle(&mut round);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then reveals the hole card, plays out their hand and the
    /// round is settled, all before this call returns.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn; the
    /// call is then a no-op. [`ActionError::Deck`] is fatal.
    pub fn stand(&self) -> Result<RoundResult, ActionError> {
        let mut round = self.round.lock();
        Self::ensure_state(&round, GameState::PlayerTurn)?;

        self.dealer_play(&mut round)?;
        Ok(self.settle(&mut round))
    }

    /// Clears the table and returns to betting.
    ///
    /// The deck is replenished here too if it has run low. With a zero
    /// balance the hand is still cleared, but [`Event::GameOver`] is reported
    /// again and every later bet is declined.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless the round is settled.
    pub fn start_next_hand(&self) -> Result<(), ActionError> {
        let mut round = self.round.lock();
        Self::ensure_state(&round, GameState::Settled)?;

        self.replenish_if_low(&mut self.deck.lock());
        round.clear();

        if self.ledger.lock().is_broke() {
            info!("no balance left for another hand");
            self.emit(Event::GameOver);
        }

        Ok(())
    }

    /// Applies a player intent.
    ///
    /// # Errors
    ///
    /// Returns the error of the operation the intent maps to.
    pub fn apply(&self, intent: Intent) -> Result<(), GameError> {
        match intent {
            Intent::PlaceBet(amount) => self.place_bet(amount)?,
            Intent::Hit => {
                self.hit()?;
            }
            Intent::Stand => {
                self.stand()?;
            }
            Intent::StartNextHand => self.start_next_hand()?,
        }
        Ok(())
    }
}
