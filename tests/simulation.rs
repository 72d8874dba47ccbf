//! Session runner and batch aggregation tests.

#![expect(clippy::float_cmp, reason = "medians of whole numbers are exact")]

use core::cell::RefCell;

use bjsim::batch::median;
use bjsim::session::run_session;
use bjsim::{
    BasicStrategy, BatchError, BetContext, BetError, BettingPolicy, BettingStrategy,
    RoundOutcome, RoundResult, SessionError, SessionState, SimulationOptions, Simulator,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn options() -> SimulationOptions {
    SimulationOptions::default().with_decks(1)
}

fn settled(outcome: RoundOutcome, bet: u64, bankroll: u64) -> RoundResult {
    RoundResult {
        outcome,
        bet,
        doubled: false,
        payout: 0,
        net: 0,
        player_total: 0,
        dealer_total: 0,
        bankroll,
    }
}

/// Records every context it is asked to size a bet for.
struct Recording<P> {
    inner: P,
    seen: RefCell<Vec<BetContext>>,
}

impl<P: BettingPolicy> BettingPolicy for Recording<P> {
    fn wager(&self, ctx: &BetContext) -> u64 {
        self.seen.borrow_mut().push(*ctx);
        self.inner.wager(ctx)
    }
}

struct ZeroBet;

impl BettingPolicy for ZeroBet {
    fn wager(&self, _: &BetContext) -> u64 {
        0
    }
}

#[test]
fn session_state_tracks_streaks() {
    let mut state = SessionState::new(100, 10);

    state.record(10, &settled(RoundOutcome::Lose, 10, 90));
    state.record(20, &settled(RoundOutcome::Lose, 20, 70));
    assert_eq!(state.lose_streak, 2);
    assert_eq!(state.win_streak, 0);

    state.record(40, &settled(RoundOutcome::Push, 40, 70));
    assert_eq!(state.lose_streak, 2);
    assert_eq!(state.last_result, Some(RoundOutcome::Push));
    assert_eq!(state.last_bet, Some(40));

    state.record(40, &settled(RoundOutcome::Blackjack, 40, 170));
    assert_eq!(state.win_streak, 1);
    assert_eq!(state.lose_streak, 0);
    assert_eq!(state.total_wins, 1);

    state.record(10, &settled(RoundOutcome::Win, 10, 180));
    assert_eq!(state.win_streak, 2);
    assert_eq!(state.total_wins, 2);
    assert_eq!(state.hands_played, 5);
    assert_eq!(state.peak_bankroll, 180);
    assert_eq!(state.bankroll, 180);

    let ctx = state.bet_context();
    assert_eq!(ctx.win_streak, 2);
    assert_eq!(ctx.total_wins, 2);
    assert_eq!(ctx.last_result, Some(RoundOutcome::Win));
}

#[test]
fn peak_starts_at_initial_bankroll() {
    let mut state = SessionState::new(100, 10);
    state.record(10, &settled(RoundOutcome::Lose, 10, 90));
    assert_eq!(state.result().peak_bankroll, 100);
}

#[test]
fn session_runs_until_bankroll_is_gone() {
    let policy = Recording {
        inner: bjsim::Martingale,
        seen: RefCell::new(Vec::new()),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let result = run_session(100, 10, &policy, &mut BasicStrategy, &options(), &mut rng).unwrap();

    let seen = policy.seen.borrow();
    assert_eq!(result.hands_played, seen.len() as u64);
    assert!(result.peak_bankroll >= 100);
    assert!(seen.iter().all(|ctx| ctx.bankroll > 0));
    assert_eq!(seen[0], BetContext::opening(100, 10));
}

#[test]
fn martingale_doubles_through_a_session() {
    let policy = Recording {
        inner: bjsim::Martingale,
        seen: RefCell::new(Vec::new()),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    run_session(10_000, 10, &policy, &mut BasicStrategy, &options(), &mut rng).unwrap();

    for ctx in policy.seen.borrow().iter() {
        let expected = if ctx.lose_streak > 0 {
            10 * (1_u64 << ctx.lose_streak)
        } else if ctx.last_result == Some(RoundOutcome::Push) {
            ctx.last_bet.unwrap_or(10)
        } else {
            10
        };
        assert_eq!(bjsim::Martingale.next_bet(ctx), expected.min(ctx.bankroll));
    }
}

#[test]
fn zero_unit_size_fails_fast() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = run_session(
        100,
        0,
        &bjsim::FlatBet,
        &mut BasicStrategy,
        &options(),
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err, SessionError::ZeroUnitSize);
}

#[test]
fn zero_wager_from_policy_fails_fast() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = run_session(100, 10, &ZeroBet, &mut BasicStrategy, &options(), &mut rng).unwrap_err();
    assert_eq!(err, SessionError::Bet(BetError::ZeroBet));
}

#[test]
fn empty_bankroll_plays_no_hands() {
    let simulator = Simulator::new(options(), 9);
    let result = simulator.run_session(0, 10, BettingStrategy::Flat).unwrap();
    assert_eq!(result.hands_played, 0);
    assert_eq!(result.peak_bankroll, 0);
}

#[test]
fn batch_of_one_matches_a_bare_session() {
    let session = Simulator::new(options(), 42)
        .run_session(100, 10, BettingStrategy::Flat)
        .unwrap();
    let batch = Simulator::new(options(), 42)
        .run_batch(100, 10, 1, BettingStrategy::Flat)
        .unwrap();

    assert_eq!(batch.sessions, vec![session]);
    assert_eq!(batch.median_hands_to_bankruptcy, session.hands_played as f64);
    assert_eq!(batch.median_peak_bankroll, session.peak_bankroll as f64);
}

#[test]
fn batch_reports_medians_of_its_sessions() {
    let simulator = Simulator::new(options(), 2024);
    let batch = simulator
        .run_batch(100, 10, 5, BettingStrategy::HalfUp)
        .unwrap();

    assert_eq!(batch.sessions.len(), 5);
    let hands: Vec<u64> = batch.sessions.iter().map(|s| s.hands_played).collect();
    let peaks: Vec<u64> = batch.sessions.iter().map(|s| s.peak_bankroll).collect();
    assert_eq!(Some(batch.median_hands_to_bankruptcy), median(&hands));
    assert_eq!(Some(batch.median_peak_bankroll), median(&peaks));

    assert_eq!(median(&[3, 7, 5, 40, 12]), Some(7.0));
}

#[test]
fn batch_rejects_zero_sessions() {
    let simulator = Simulator::new(options(), 1);
    assert_eq!(
        simulator
            .run_batch(100, 10, 0, BettingStrategy::Flat)
            .unwrap_err(),
        BatchError::InvalidBatchSize
    );
}

#[test]
fn same_seed_reproduces_the_batch() {
    let first = Simulator::new(options(), 77)
        .run_batch(100, 10, 4, BettingStrategy::Oscar)
        .unwrap();
    let second = Simulator::new(options(), 77)
        .run_batch(100, 10, 4, BettingStrategy::Oscar)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn sessions_in_a_batch_use_independent_streams() {
    let batch = Simulator::new(options(), 8)
        .run_batch(100, 10, 6, BettingStrategy::Flat)
        .unwrap();
    let first = batch.sessions[0];
    assert!(batch.sessions.iter().any(|s| *s != first));
}

#[test]
fn compare_strategies_covers_every_system() {
    let simulator = Simulator::new(options(), 31);
    let results = simulator.compare_strategies(100, 10, 3).unwrap();

    assert_eq!(results.len(), BettingStrategy::ALL.len());
    for strategy in BettingStrategy::ALL {
        let batch = &results[&strategy];
        assert_eq!(batch.sessions.len(), 3);
        assert!(batch.median_peak_bankroll >= 100.0);
    }
}

#[test]
fn play_round_settles_against_a_fresh_shoe() {
    let simulator = Simulator::new(options(), 12);
    let mut bankroll = 100;

    let result = simulator
        .play_round(10, &mut bankroll, &mut BasicStrategy)
        .unwrap();

    assert_eq!(result.bankroll, bankroll);
    let expected_net = i64::try_from(bankroll).unwrap() - 100;
    assert_eq!(result.net, expected_net);
}
