//! Session runner: one simulated player betting until bankruptcy.

use rand::Rng;

use crate::error::{BetError, SessionError};
use crate::options::SimulationOptions;
use crate::policy::{BetContext, BettingPolicy, DecisionPolicy};
use crate::result::{RoundOutcome, RoundResult, SessionResult};
use crate::round::resolve_round;
use crate::shoe::Shoe;

/// Mutable state of one simulated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Current bankroll.
    pub bankroll: u64,
    /// Base wager increment.
    pub unit_size: u64,
    /// Rounds completed.
    pub hands_played: u64,
    /// Highest bankroll observed.
    pub peak_bankroll: u64,
    /// Consecutive wins.
    pub win_streak: u32,
    /// Consecutive losses.
    pub lose_streak: u32,
    /// Outcome of the last completed round.
    pub last_result: Option<RoundOutcome>,
    /// Wins (blackjacks included) so far.
    pub total_wins: u64,
    /// Wager placed on the last round, before any double.
    pub last_bet: Option<u64>,
}

impl SessionState {
    /// Creates the state for a fresh session.
    #[must_use]
    pub const fn new(initial_bankroll: u64, unit_size: u64) -> Self {
        Self {
            bankroll: initial_bankroll,
            unit_size,
            hands_played: 0,
            peak_bankroll: initial_bankroll,
            win_streak: 0,
            lose_streak: 0,
            last_result: None,
            total_wins: 0,
            last_bet: None,
        }
    }

    /// Returns whether the player still has money to bet.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.bankroll > 0
    }

    /// Betting context for the next round.
    #[must_use]
    pub const fn bet_context(&self) -> BetContext {
        BetContext {
            bankroll: self.bankroll,
            unit_size: self.unit_size,
            win_streak: self.win_streak,
            lose_streak: self.lose_streak,
            last_result: self.last_result,
            total_wins: self.total_wins,
            last_bet: self.last_bet,
        }
    }

    /// Folds a settled round into the session.
    ///
    /// Wins and blackjacks extend the win streak, losses extend the losing
    /// streak, and a push leaves both streaks as they were.
    pub fn record(&mut self, wager: u64, result: &RoundResult) {
        match result.outcome {
            RoundOutcome::Win | RoundOutcome::Blackjack => {
                self.win_streak += 1;
                self.lose_streak = 0;
                self.total_wins += 1;
            }
            RoundOutcome::Lose => {
                self.lose_streak += 1;
                self.win_streak = 0;
            }
            RoundOutcome::Push => {}
        }

        self.bankroll = result.bankroll;
        self.last_result = Some(result.outcome);
        self.last_bet = Some(wager);
        self.hands_played += 1;
        self.peak_bankroll = self.peak_bankroll.max(self.bankroll);
    }

    /// Summary of the session so far.
    #[must_use]
    pub const fn result(&self) -> SessionResult {
        SessionResult {
            hands_played: self.hands_played,
            peak_bankroll: self.peak_bankroll,
        }
    }
}

/// Plays rounds until the bankroll reaches zero.
///
/// Each round uses a freshly built and shuffled shoe. The wager comes from
/// `betting`, clamped to the bankroll.
///
/// # Errors
///
/// Returns [`SessionError::ZeroUnitSize`] if `unit_size` is zero, and
/// [`SessionError::Bet`] if the betting policy asks for a zero wager while
/// the bankroll is positive.
pub fn run_session<B, D, R>(
    initial_bankroll: u64,
    unit_size: u64,
    betting: &B,
    decision: &mut D,
    options: &SimulationOptions,
    rng: &mut R,
) -> Result<SessionResult, SessionError>
where
    B: BettingPolicy + ?Sized,
    D: DecisionPolicy + ?Sized,
    R: Rng + ?Sized,
{
    if unit_size == 0 {
        return Err(SessionError::ZeroUnitSize);
    }

    let mut state = SessionState::new(initial_bankroll, unit_size);

    while state.is_active() {
        let mut shoe = Shoe::new(options.decks, rng);

        let wager = betting.next_bet(&state.bet_context());
        if wager == 0 {
            return Err(BetError::ZeroBet.into());
        }

        let mut bankroll = state.bankroll;
        let result = resolve_round(&mut shoe, wager, &mut bankroll, decision, options)?;
        state.record(wager, &result);
    }

    tracing::debug!(
        hands_played = state.hands_played,
        peak_bankroll = state.peak_bankroll,
        "session finished"
    );

    Ok(state.result())
}
