//! Error types for game operations.

use thiserror::Error;

use crate::game::GameState;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A draw was attempted on an empty deck.
    ///
    /// The game replenishes the deck before every draw, so this indicates a
    /// broken internal invariant.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bet is zero or larger than the balance.
    #[error("insufficient funds: bet of {requested} with a balance of {balance}")]
    InsufficientFunds {
        /// The amount the player tried to bet.
        requested: u64,
        /// The balance at the time of the bet.
        balance: u64,
    },
    /// Bets are only accepted while betting.
    #[error("cannot place a bet during {0:?}")]
    InvalidState(GameState),
    /// The deck ran dry while dealing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player actions and round changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not accepted in the current state. Nothing changed.
    #[error("action not allowed during {0:?}")]
    InvalidState(GameState),
    /// The deck ran dry while drawing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Any error returned by [`Game::apply`](crate::Game::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A bet was declined.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// An action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl GameError {
    /// Returns whether the error leaves the game unable to continue.
    ///
    /// Only deck exhaustion is fatal; declined bets and invalid transitions
    /// leave the game untouched.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Bet(BetError::Deck(_)) | Self::Action(ActionError::Deck(_))
        )
    }
}
