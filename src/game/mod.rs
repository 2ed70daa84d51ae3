//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DeckError};
use crate::event::{Event, Observer, Participant};
use crate::hand::{DealerHand, Hand};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::result::{RoundResult, SessionStats};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

/// The round currently on the table.
#[derive(Debug, Default)]
struct Round {
    state: GameState,
    /// Amount at stake; 0 while betting.
    bet: u64,
    player: Hand,
    dealer: DealerHand,
    result: Option<RoundResult>,
}

impl Round {
    fn clear(&mut self) {
        self.state = GameState::Betting;
        self.bet = 0;
        self.player.clear();
        self.dealer.clear();
        self.result = None;
    }
}

/// A single-player blackjack session against an automated dealer.
///
/// The game owns the deck, the round on the table and the player's ledger.
/// Intents ([`place_bet`](Self::place_bet), [`hit`](Self::hit),
/// [`stand`](Self::stand), [`start_next_hand`](Self::start_next_hand)) take
/// the round lock for their whole duration, so each one, including the
/// dealer's draw loop, completes before the next is accepted.
///
/// Every state change is queued as an [`Event`]; drain them with
/// [`drain_events`](Self::drain_events) or [`drain_into`](Self::drain_into).
pub struct Game {
    /// Session options.
    pub options: GameOptions,
    /// Lock order: `round`, `deck`, `rng`, `ledger`, `events`.
    round: Mutex<Round>,
    deck: Mutex<Deck>,
    rng: Mutex<ChaCha8Rng>,
    ledger: Mutex<Ledger>,
    events: Mutex<Vec<Event>>,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_session::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.balance(), 3000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        let ledger = Ledger::new(options.starting_balance);

        Self {
            options,
            round: Mutex::new(Round::default()),
            deck: Mutex::new(deck),
            rng: Mutex::new(rng),
            ledger: Mutex::new(ledger),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the deck, e.g. to replay a recorded shuffle.
    pub fn set_deck(&self, deck: Deck) {
        *self.deck.lock() = deck;
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the current round phase.
    pub fn state(&self) -> GameState {
        self.round.lock().state
    }

    /// Returns the player's balance.
    pub fn balance(&self) -> u64 {
        self.ledger.lock().balance()
    }

    /// Returns the bet in play, or 0 while betting.
    pub fn current_bet(&self) -> u64 {
        self.round.lock().bet
    }

    /// Returns the session statistics.
    pub fn stats(&self) -> SessionStats {
        self.ledger.lock().stats()
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.round.lock().player.clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.round.lock().dealer.clone()
    }

    /// Returns the player's total.
    pub fn player_score(&self) -> u16 {
        self.round.lock().player.value()
    }

    /// Returns the dealer's total, leaving out the hole card while it is hidden.
    pub fn dealer_score(&self) -> u16 {
        self.round.lock().dealer.visible_value()
    }

    /// Returns the result of the current round once it is settled.
    pub fn round_result(&self) -> Option<RoundResult> {
        self.round.lock().result
    }

    /// Returns whether the session is over: the balance is zero and no round
    /// is in progress.
    pub fn is_game_over(&self) -> bool {
        let round = self.round.lock();
        let ledger = self.ledger.lock();
        ledger.is_broke() && !round.state.is_round_in_progress()
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&self) -> Vec<Event> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Takes every queued event and dispatches it to `observer`.
    pub fn drain_into<O: Observer + ?Sized>(&self, observer: &mut O) {
        for event in self.drain_events() {
            event.dispatch(observer);
        }
    }

    /// Ends the session and hands back the ledger.
    #[must_use]
    pub fn end_session(self) -> Ledger {
        self.ledger.into_inner()
    }

    fn emit(&self, event: Event) {
        self.events.lock().push(event);
    }

    fn emit_scores(&self, round: &Round) {
        self.emit(Event::ScoresUpdated {
            player: round.player.value(),
            dealer: round.dealer.visible_value(),
        });
    }

    /// Replaces the deck with a fresh shuffled one if it has run low.
    ///
    /// Returns `true` if the deck was replaced.
    fn replenish_if_low(&self, deck: &mut Deck) -> bool {
        // Drawing needs at least one card whatever the threshold.
        if !deck.needs_replenish(self.options.replenish_threshold.max(1)) {
            return false;
        }

        debug!(remaining = deck.len(), "deck low, replacing with a fresh shuffle");
        *deck = Deck::shuffled(&mut *self.rng.lock());
        self.emit(Event::DeckReplenished);
        true
    }

    /// Draws a card, replenishing the deck first when it has run low.
    fn draw(&self) -> Result<Card, DeckError> {
        let mut deck = self.deck.lock();
        self.replenish_if_low(&mut deck);
        deck.draw()
    }

    /// Draws a card into a participant's hand and reports it.
    fn deal_to(&self, round: &mut Round, participant: Participant) -> Result<Card, DeckError> {
        let card = self.draw()?;

        let hidden = match participant {
            Participant::Player => {
                round.player.add_card(card);
                false
            }
            Participant::Dealer => {
                round.dealer.add_card(card);
                round.dealer.is_hidden(round.dealer.len() - 1)
            }
        };

        trace!(?participant, %card, hidden, "card dealt");
        self.emit(Event::CardDealt {
            participant,
            card,
            hidden,
        });

        Ok(card)
    }

    fn ensure_state(round: &Round, expected: GameState) -> Result<(), ActionError> {
        if round.state == expected {
            return Ok(());
        }

        debug!(state = ?round.state, ?expected, "action rejected");
        Err(ActionError::InvalidState(round.state))
    }
}
