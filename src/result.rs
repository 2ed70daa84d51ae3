//! Round result types for settlement.

use core::fmt;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. The dealer hand is not played out.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished closer to 21.
    PlayerWin,
    /// Dealer finished closer to 21.
    DealerWin,
    /// Equal totals; the bet is returned.
    Push,
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWin)
    }

    /// Returns whether the player lost the round.
    #[must_use]
    pub const fn player_lost(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWin)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::PlayerBust => "You bust! Dealer wins!",
            Self::DealerBust => "Dealer busts! You win!",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "It's a tie!",
        };
        f.write_str(message)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The bet that was at stake.
    pub bet: u64,
    /// Amount credited back to the balance (bet included).
    pub payout: u64,
    /// Money change to show the player: the payout when anything was paid,
    /// otherwise the lost bet as a negative amount.
    pub balance_delta: i64,
    /// The player's final total.
    pub player_score: u16,
    /// The dealer's total at settlement, hole card included.
    pub dealer_score: u16,
}

/// Session statistics snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds settled this session.
    pub hands_played: u32,
    /// Rounds won by the player.
    pub hands_won: u32,
    /// Rounds lost by the player.
    pub hands_lost: u32,
    /// Sum of winnings minus losses.
    pub net_earnings: i64,
}

impl SessionStats {
    /// Rounds that ended in a push.
    #[must_use]
    pub const fn hands_pushed(&self) -> u32 {
        self.hands_played - self.hands_won - self.hands_lost
    }
}
