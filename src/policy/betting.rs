//! Bankroll betting systems.
//!
//! Every system maps the session's betting state to the next wager and is
//! clamped to the bankroll by [`BettingPolicy::next_bet`].

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseStrategyError;
use crate::result::RoundOutcome;

/// Session state visible to a betting system when it sizes the next wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    /// Current bankroll.
    pub bankroll: u64,
    /// Base wager increment.
    pub unit_size: u64,
    /// Consecutive wins immediately preceding this round.
    pub win_streak: u32,
    /// Consecutive losses immediately preceding this round.
    pub lose_streak: u32,
    /// Outcome of the previous round, if any.
    pub last_result: Option<RoundOutcome>,
    /// Wins (blackjacks included) since the session started.
    pub total_wins: u64,
    /// Wager placed on the previous round, before any double.
    pub last_bet: Option<u64>,
}

impl BetContext {
    /// Context for the first round of a session.
    #[must_use]
    pub const fn opening(bankroll: u64, unit_size: u64) -> Self {
        Self {
            bankroll,
            unit_size,
            win_streak: 0,
            lose_streak: 0,
            last_result: None,
            total_wins: 0,
            last_bet: None,
        }
    }

    fn pushed(&self) -> bool {
        self.last_result == Some(RoundOutcome::Push)
    }

    fn previous_or_unit(&self) -> u64 {
        self.last_bet.unwrap_or(self.unit_size)
    }
}

/// A betting system.
pub trait BettingPolicy {
    /// Computes the unclamped wager for the next round.
    fn wager(&self, ctx: &BetContext) -> u64;

    /// Computes the next wager, clamped to the bankroll.
    fn next_bet(&self, ctx: &BetContext) -> u64 {
        self.wager(ctx).min(ctx.bankroll)
    }
}

/// `unit × 2^times`, saturating at `u64::MAX`.
fn doubled(unit: u64, times: u32) -> u64 {
    1_u64
        .checked_shl(times)
        .map_or(u64::MAX, |factor| unit.saturating_mul(factor))
}

/// Bets one unit every round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatBet;

impl BettingPolicy for FlatBet {
    fn wager(&self, ctx: &BetContext) -> u64 {
        ctx.unit_size
    }
}

/// Doubles the wager after every loss and drops back to one unit after a win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Martingale;

impl BettingPolicy for Martingale {
    fn wager(&self, ctx: &BetContext) -> u64 {
        if ctx.lose_streak > 0 {
            doubled(ctx.unit_size, ctx.lose_streak)
        } else if ctx.pushed() {
            ctx.previous_or_unit()
        } else {
            ctx.unit_size
        }
    }
}

/// Doubles the wager along a winning streak until `streak_cap` wins, then
/// starts over at one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseMartingale {
    /// Winning streak length at which the progression resets.
    pub streak_cap: u32,
}

impl ReverseMartingale {
    /// Default streak cap.
    pub const DEFAULT_STREAK_CAP: u32 = 4;
}

impl Default for ReverseMartingale {
    fn default() -> Self {
        Self {
            streak_cap: Self::DEFAULT_STREAK_CAP,
        }
    }
}

impl BettingPolicy for ReverseMartingale {
    fn wager(&self, ctx: &BetContext) -> u64 {
        if ctx.last_result == Some(RoundOutcome::Lose)
            || ctx.win_streak == 0
            || ctx.win_streak >= self.streak_cap
        {
            ctx.unit_size
        } else if ctx.pushed() {
            ctx.previous_or_unit()
        } else {
            doubled(ctx.unit_size, ctx.win_streak)
        }
    }
}

/// Flat betting until two wins in a row, then half a unit more per extra win.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfUp;

impl BettingPolicy for HalfUp {
    fn wager(&self, ctx: &BetContext) -> u64 {
        if ctx.win_streak < 2 {
            return ctx.unit_size;
        }
        let extra = ctx
            .unit_size
            .saturating_mul(u64::from(ctx.win_streak - 1))
            / 2;
        ctx.unit_size.saturating_add(extra)
    }
}

/// Oscar's system: one more unit per win since the session started, never
/// reverting after a loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Oscar;

impl BettingPolicy for Oscar {
    fn wager(&self, ctx: &BetContext) -> u64 {
        ctx.unit_size
            .saturating_mul(ctx.total_wins.saturating_add(1))
    }
}

/// The built-in betting systems.
///
/// Resolve a variant into its policy once per session with
/// [`BettingStrategy::policy`].
///
/// ```
/// use bjsim::BettingStrategy;
///
/// let strategy: BettingStrategy = "reverse-martingale".parse().unwrap();
/// assert_eq!(strategy, BettingStrategy::ReverseMartingale { streak_cap: 4 });
/// assert_eq!(strategy.to_string(), "reverse-martingale");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BettingStrategy {
    /// See [`FlatBet`].
    Flat,
    /// See [`Martingale`].
    Martingale,
    /// See [`ReverseMartingale`].
    ReverseMartingale {
        /// Winning streak length at which the progression resets.
        streak_cap: u32,
    },
    /// See [`HalfUp`].
    HalfUp,
    /// See [`Oscar`].
    Oscar,
}

impl BettingStrategy {
    /// Every built-in system with default parameters.
    pub const ALL: [Self; 5] = [
        Self::Flat,
        Self::Martingale,
        Self::ReverseMartingale {
            streak_cap: ReverseMartingale::DEFAULT_STREAK_CAP,
        },
        Self::HalfUp,
        Self::Oscar,
    ];

    /// Returns the policy implementing this system.
    #[must_use]
    pub fn policy(self) -> Box<dyn BettingPolicy + Send + Sync> {
        match self {
            Self::Flat => Box::new(FlatBet),
            Self::Martingale => Box::new(Martingale),
            Self::ReverseMartingale { streak_cap } => Box::new(ReverseMartingale { streak_cap }),
            Self::HalfUp => Box::new(HalfUp),
            Self::Oscar => Box::new(Oscar),
        }
    }

    /// Stable name of the system.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Martingale => "martingale",
            Self::ReverseMartingale { .. } => "reverse-martingale",
            Self::HalfUp => "half-up",
            Self::Oscar => "oscar",
        }
    }
}

impl fmt::Display for BettingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BettingStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or(ParseStrategyError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(bankroll: u64, unit_size: u64) -> BetContext {
        BetContext::opening(bankroll, unit_size)
    }

    #[test]
    fn flat_is_always_one_unit() {
        let mut c = ctx(1_000, 10);
        c.win_streak = 3;
        c.total_wins = 9;
        assert_eq!(FlatBet.next_bet(&c), 10);
    }

    #[test]
    fn martingale_doubles_per_loss() {
        let mut c = ctx(1_000_000, 10);
        for (streak, expected) in [(1, 20), (2, 40), (3, 80), (4, 160), (10, 10_240)] {
            c.lose_streak = streak;
            c.last_result = Some(RoundOutcome::Lose);
            assert_eq!(Martingale.next_bet(&c), expected);
        }
    }

    #[test]
    fn martingale_resets_after_win() {
        let mut c = ctx(1_000, 10);
        c.win_streak = 1;
        c.last_result = Some(RoundOutcome::Win);
        c.last_bet = Some(80);
        assert_eq!(Martingale.next_bet(&c), 10);

        c.last_result = Some(RoundOutcome::Blackjack);
        assert_eq!(Martingale.next_bet(&c), 10);
    }

    #[test]
    fn martingale_keeps_bet_on_push() {
        let mut c = ctx(1_000, 10);
        c.last_result = Some(RoundOutcome::Push);
        c.last_bet = Some(30);
        assert_eq!(Martingale.next_bet(&c), 30);

        // A push in the middle of a losing streak keeps the streak.
        c.lose_streak = 2;
        c.last_bet = Some(40);
        assert_eq!(Martingale.next_bet(&c), 40);
    }

    #[test]
    fn martingale_saturates_and_clamps() {
        let mut c = ctx(500, 10);
        c.lose_streak = 200;
        assert_eq!(Martingale.wager(&c), u64::MAX);
        assert_eq!(Martingale.next_bet(&c), 500);
    }

    #[test]
    fn reverse_martingale_progression() {
        let policy = ReverseMartingale::default();
        let mut c = ctx(10_000, 10);
        assert_eq!(policy.next_bet(&c), 10);

        c.last_result = Some(RoundOutcome::Win);
        for (streak, expected) in [(1, 20), (2, 40), (3, 80), (4, 10), (5, 10)] {
            c.win_streak = streak;
            assert_eq!(policy.next_bet(&c), expected, "win streak {streak}");
        }

        c.win_streak = 0;
        c.lose_streak = 1;
        c.last_result = Some(RoundOutcome::Lose);
        assert_eq!(policy.next_bet(&c), 10);
    }

    #[test]
    fn reverse_martingale_keeps_bet_on_push() {
        let policy = ReverseMartingale::default();
        let mut c = ctx(10_000, 10);
        c.win_streak = 2;
        c.last_result = Some(RoundOutcome::Push);
        c.last_bet = Some(40);
        assert_eq!(policy.next_bet(&c), 40);
    }

    #[test]
    fn half_up_after_two_wins() {
        let mut c = ctx(1_000, 10);
        c.last_result = Some(RoundOutcome::Win);
        for (streak, expected) in [(0, 10), (1, 10), (2, 15), (3, 20), (4, 25)] {
            c.win_streak = streak;
            assert_eq!(HalfUp.next_bet(&c), expected, "win streak {streak}");
        }
    }

    #[test]
    fn half_up_floors_odd_units() {
        let mut c = ctx(1_000, 5);
        c.win_streak = 2;
        assert_eq!(HalfUp.next_bet(&c), 7);
    }

    #[test]
    fn oscar_grows_with_total_wins() {
        let mut c = ctx(1_000, 10);
        c.total_wins = 3;
        c.lose_streak = 2;
        c.last_result = Some(RoundOutcome::Lose);
        assert_eq!(Oscar.next_bet(&c), 40);
    }

    #[test]
    fn every_policy_is_clamped_to_bankroll() {
        let mut c = ctx(7, 10);
        c.win_streak = 2;
        c.total_wins = 2;
        c.last_result = Some(RoundOutcome::Win);
        for strategy in BettingStrategy::ALL {
            assert_eq!(strategy.policy().next_bet(&c), 7, "{strategy}");
        }
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in BettingStrategy::ALL {
            assert_eq!(strategy.name().parse::<BettingStrategy>(), Ok(strategy));
        }
        assert_eq!("Half-Up".parse::<BettingStrategy>(), Ok(BettingStrategy::HalfUp));
        assert_eq!("labouchere".parse::<BettingStrategy>(), Err(ParseStrategyError));
    }
}
