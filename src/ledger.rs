//! Player balance and session bookkeeping.

use crate::error::BetError;
use crate::result::{Outcome, SessionStats};

/// Largest balance a ledger holds.
///
/// Any bet is at most the balance, so twice a bet still fits in an `i64`.
pub const MAX_BALANCE: u64 = i64::MAX as u64 / 2;

/// The player's money and running statistics for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: u64,
    stats: SessionStats,
}

impl Ledger {
    /// Opens a ledger with the given balance and empty statistics.
    ///
    /// Balances above [`MAX_BALANCE`] are capped to it.
    #[must_use]
    pub const fn new(balance: u64) -> Self {
        Self {
            balance: if balance > MAX_BALANCE {
                MAX_BALANCE
            } else {
                balance
            },
            stats: SessionStats {
                hands_played: 0,
                hands_won: 0,
                hands_lost: 0,
                net_earnings: 0,
            },
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Returns whether no further bet can be placed.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.balance == 0
    }

    /// Takes a bet out of the balance.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if the amount is zero or more
    /// than the balance. The balance is left untouched.
    pub const fn debit_bet(&mut self, amount: u64) -> Result<(), BetError> {
        if amount == 0 || amount > self.balance {
            return Err(BetError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        Ok(())
    }

    /// Books a settled round and returns the amount credited to the balance.
    ///
    /// The bet has already been taken by [`debit_bet`](Self::debit_bet), so a
    /// loss credits nothing, a push returns the bet and a win pays it twice.
    /// The balance never grows past [`MAX_BALANCE`].
    pub fn settle(&mut self, outcome: Outcome, bet: u64) -> u64 {
        let signed_bet = i64::try_from(bet).unwrap_or(i64::MAX);
        self.stats.hands_played = self.stats.hands_played.saturating_add(1);

        let payout = match outcome {
            Outcome::PlayerBust | Outcome::DealerWin => {
                self.stats.hands_lost = self.stats.hands_lost.saturating_add(1);
                self.stats.net_earnings = self.stats.net_earnings.saturating_sub(signed_bet);
                0
            }
            Outcome::DealerBust | Outcome::PlayerWin => {
                self.stats.hands_won = self.stats.hands_won.saturating_add(1);
                self.stats.net_earnings = self.stats.net_earnings.saturating_add(signed_bet);
                bet.saturating_mul(2)
            }
            Outcome::Push => bet,
        };

        self.balance = self.balance.saturating_add(payout).min(MAX_BALANCE);
        payout
    }
}
