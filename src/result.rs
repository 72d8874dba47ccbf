//! Result types for rounds, sessions, and batches.

use alloc::vec::Vec;
use core::fmt;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts, dealer has the higher total, or dealer blackjack).
    Lose,
    /// Push (tie). The wager is returned.
    Push,
    /// Player has blackjack and the dealer does not.
    Blackjack,
}

impl RoundOutcome {
    /// Returns whether the outcome counts as a win for streaks.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Push => "Push",
            Self::Blackjack => "Blackjack",
        };
        f.write_str(label)
    }
}

/// Result of one settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The final wager, doubled if the player doubled down.
    pub bet: u64,
    /// Whether the player doubled down.
    pub doubled: bool,
    /// Amount credited back to the bankroll at settlement.
    pub payout: u64,
    /// Net result relative to the bankroll before the wager was placed.
    pub net: i64,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Bankroll after settlement.
    pub bankroll: u64,
}

/// Result of one session played to bankruptcy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionResult {
    /// Rounds played before the bankroll reached zero.
    pub hands_played: u64,
    /// Highest bankroll observed, including the starting bankroll.
    pub peak_bankroll: u64,
}

/// Aggregated results of a batch of independent sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    /// Per-session results in the order they were run.
    pub sessions: Vec<SessionResult>,
    /// Median number of hands played before bankruptcy.
    pub median_hands_to_bankruptcy: f64,
    /// Median peak bankroll.
    pub median_peak_bankroll: f64,
}
