//! Session configuration options.

use crate::deck::DEFAULT_REPLENISH_THRESHOLD;

/// Balance a new session starts with.
pub const DEFAULT_STARTING_BALANCE: u64 = 3000;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_session::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(1000)
///     .with_replenish_threshold(15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Balance the player starts the session with.
    pub starting_balance: u64,
    /// The deck is replaced by a fresh shuffled one before any draw that
    /// would start with fewer cards than this.
    pub replenish_threshold: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            replenish_threshold: DEFAULT_REPLENISH_THRESHOLD,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// The session caps it at [`MAX_BALANCE`](crate::ledger::MAX_BALANCE).
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_session::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(500);
    /// assert_eq!(options.starting_balance, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the replenishment threshold.
    ///
    /// A threshold of 0 or 1 still replaces an empty deck before drawing,
    /// since drawing needs at least one card.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_session::GameOptions;
    ///
    /// let options = GameOptions::default().with_replenish_threshold(20);
    /// assert_eq!(options.replenish_threshold, 20);
    /// ```
    #[must_use]
    pub const fn with_replenish_threshold(mut self, threshold: usize) -> Self {
        self.replenish_threshold = threshold;
        self
    }
}
