//! Round phases.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Waiting for a bet. This is where every session and every new hand starts.
    #[default]
    Betting,
    /// The initial four cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer is playing out their hand.
    DealerTurn,
    /// The round is over and has been paid out.
    Settled,
}

impl GameState {
    /// Returns whether the player has a round in progress.
    #[must_use]
    pub const fn is_round_in_progress(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn | Self::DealerTurn)
    }
}
