//! A single-player blackjack session engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player against an
//! automated dealer: betting, the initial deal, hit and stand, the dealer's
//! draw loop, settlement, and the balance and statistics kept across hands.
//! Rendering is left to the caller, which drives the game with [`Intent`]s and
//! renders the [`Event`]s it reports.
//!
//! # Example
//!
//! ```
//! use blackjack_session::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.place_bet(500).unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//!
//! let result = game.stand().unwrap();
//! assert_eq!(game.state(), GameState::Settled);
//! println!("{}", result.outcome);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod scoring;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DeckError, GameError};
pub use event::{Event, Intent, Observer, Participant};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand};
pub use ledger::{Ledger, MAX_BALANCE};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult, SessionStats};
pub use scoring::{card_value, hand_total};
