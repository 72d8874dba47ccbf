//! Seeded simulation driver.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::batch;
use crate::error::{BatchError, RoundError, SessionError};
use crate::options::SimulationOptions;
use crate::policy::{BasicStrategy, BettingPolicy, BettingStrategy, DecisionPolicy};
use crate::result::{BatchResult, RoundResult, SessionResult};
use crate::round::resolve_round;
use crate::session;
use crate::shoe::Shoe;
use crate::sync::SeedSource;

/// Runs rounds, sessions, and batches under one set of rules.
///
/// The simulator owns a seed source. Every session draws one seed from it and
/// plays on its own [`ChaCha8Rng`](rand_chacha::ChaCha8Rng) stream, so a
/// simulator created with the same seed replays the same sequence of sessions.
///
/// # Example
///
/// ```no_run
/// use bjsim::{BettingStrategy, SimulationOptions, Simulator};
///
/// let simulator = Simulator::new(SimulationOptions::default(), 42);
/// let batch = simulator
///     .run_batch(100, 10, 1_000, BettingStrategy::Martingale)
///     .unwrap();
/// println!("median hands: {}", batch.median_hands_to_bankruptcy);
/// ```
pub struct Simulator {
    /// Table rules.
    pub options: SimulationOptions,
    /// Seed source for per-session and per-round RNGs.
    seeds: SeedSource,
}

impl Simulator {
    /// Creates a new simulator with the given seed.
    #[must_use]
    pub fn new(options: SimulationOptions, seed: u64) -> Self {
        Self {
            options,
            seeds: SeedSource::new(seed),
        }
    }

    /// Builds a freshly shuffled shoe.
    #[must_use]
    pub fn new_shoe(&self) -> Shoe {
        let mut rng = self.seeds.next_rng();
        Shoe::new(self.options.decks, &mut rng)
    }

    /// Plays one round on a fresh shoe.
    ///
    /// # Errors
    ///
    /// See [`resolve_round`].
    pub fn play_round<D>(
        &self,
        bet: u64,
        bankroll: &mut u64,
        decision: &mut D,
    ) -> Result<RoundResult, RoundError>
    where
        D: DecisionPolicy + ?Sized,
    {
        let mut shoe = self.new_shoe();
        resolve_round(&mut shoe, bet, bankroll, decision, &self.options)
    }

    /// Plays one session with basic strategy and a built-in betting system.
    ///
    /// # Errors
    ///
    /// See [`session::run_session`].
    pub fn run_session(
        &self,
        initial_bankroll: u64,
        unit_size: u64,
        strategy: BettingStrategy,
    ) -> Result<SessionResult, SessionError> {
        let policy = strategy.policy();
        self.run_session_with(initial_bankroll, unit_size, policy.as_ref(), &mut BasicStrategy)
    }

    /// Plays one session with caller-supplied policies.
    ///
    /// # Errors
    ///
    /// See [`session::run_session`].
    pub fn run_session_with<B, D>(
        &self,
        initial_bankroll: u64,
        unit_size: u64,
        betting: &B,
        decision: &mut D,
    ) -> Result<SessionResult, SessionError>
    where
        B: BettingPolicy + ?Sized,
        D: DecisionPolicy + ?Sized,
    {
        let mut rng = self.seeds.next_rng();
        session::run_session(
            initial_bankroll,
            unit_size,
            betting,
            decision,
            &self.options,
            &mut rng,
        )
    }

    /// Runs `num_sessions` independent sessions with a built-in betting
    /// system and reports the medians.
    ///
    /// # Errors
    ///
    /// See [`batch::run_batch`].
    pub fn run_batch(
        &self,
        initial_bankroll: u64,
        unit_size: u64,
        num_sessions: usize,
        strategy: BettingStrategy,
    ) -> Result<BatchResult, BatchError> {
        let policy = strategy.policy();
        self.run_batch_with(initial_bankroll, unit_size, num_sessions, policy.as_ref())
    }

    /// Runs `num_sessions` independent sessions with a caller-supplied
    /// betting policy.
    ///
    /// # Errors
    ///
    /// See [`batch::run_batch`].
    pub fn run_batch_with<B>(
        &self,
        initial_bankroll: u64,
        unit_size: u64,
        num_sessions: usize,
        betting: &B,
    ) -> Result<BatchResult, BatchError>
    where
        B: BettingPolicy + ?Sized,
    {
        self.seeds.with(|seeds| {
            batch::run_batch(
                initial_bankroll,
                unit_size,
                num_sessions,
                betting,
                &self.options,
                seeds,
            )
        })
    }

    /// Runs a batch for every built-in betting system.
    ///
    /// # Errors
    ///
    /// Returns the first batch error encountered.
    pub fn compare_strategies(
        &self,
        initial_bankroll: u64,
        unit_size: u64,
        num_sessions: usize,
    ) -> Result<HashMap<BettingStrategy, BatchResult>, BatchError> {
        let mut results = HashMap::new();
        for strategy in BettingStrategy::ALL {
            let batch = self.run_batch(initial_bankroll, unit_size, num_sessions, strategy)?;
            results.insert(strategy, batch);
        }
        Ok(results)
    }
}
