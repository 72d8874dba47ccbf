//! Batch aggregation over independent sessions.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::BatchError;
use crate::options::SimulationOptions;
use crate::policy::{BasicStrategy, BettingPolicy};
use crate::result::{BatchResult, SessionResult};
use crate::session::run_session;

/// Returns the median of `values`, or `None` if the slice is empty.
///
/// An even number of values yields the mean of the two middle values.
///
/// ```
/// use bjsim::batch::median;
///
/// assert_eq!(median(&[3, 7, 5, 40, 12]), Some(7.0));
/// assert_eq!(median(&[4, 1, 3, 2]), Some(2.5));
/// assert_eq!(median(&[]), None);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for hand counts and bankrolls"
)]
pub fn median(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

impl BatchResult {
    /// Reduces per-session results to their medians.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::InvalidBatchSize`] if `sessions` is empty.
    pub fn from_sessions(sessions: Vec<SessionResult>) -> Result<Self, BatchError> {
        let hands: Vec<u64> = sessions.iter().map(|s| s.hands_played).collect();
        let peaks: Vec<u64> = sessions.iter().map(|s| s.peak_bankroll).collect();

        let median_hands_to_bankruptcy = median(&hands).ok_or(BatchError::InvalidBatchSize)?;
        let median_peak_bankroll = median(&peaks).ok_or(BatchError::InvalidBatchSize)?;

        Ok(Self {
            sessions,
            median_hands_to_bankruptcy,
            median_peak_bankroll,
        })
    }
}

/// Creates the RNG for one session from the shared seed source.
///
/// Every session gets its own stream seeded by one draw from `seeds`.
pub fn session_rng<R: Rng + ?Sized>(seeds: &mut R) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seeds.random())
}

/// Runs `num_sessions` independent sessions with basic strategy and reports
/// the median hands played and median peak bankroll.
///
/// # Errors
///
/// Returns [`BatchError::InvalidBatchSize`] if `num_sessions` is zero, or the
/// first session error encountered.
pub fn run_batch<B, R>(
    initial_bankroll: u64,
    unit_size: u64,
    num_sessions: usize,
    betting: &B,
    options: &SimulationOptions,
    seeds: &mut R,
) -> Result<BatchResult, BatchError>
where
    B: BettingPolicy + ?Sized,
    R: Rng + ?Sized,
{
    if num_sessions < 1 {
        return Err(BatchError::InvalidBatchSize);
    }

    let mut sessions = Vec::with_capacity(num_sessions);
    for index in 0..num_sessions {
        let mut rng = session_rng(seeds);
        let result = run_session(
            initial_bankroll,
            unit_size,
            betting,
            &mut BasicStrategy,
            options,
            &mut rng,
        )?;
        tracing::trace!(
            session = index + 1,
            hands_played = result.hands_played,
            peak_bankroll = result.peak_bankroll,
            "session complete"
        );
        sessions.push(result);
    }

    let batch = BatchResult::from_sessions(sessions)?;
    tracing::debug!(
        sessions = num_sessions,
        median_hands_to_bankruptcy = batch.median_hands_to_bankruptcy,
        median_peak_bankroll = batch.median_peak_bankroll,
        "batch finished"
    );

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_count() {
        assert_eq!(median(&[3, 7, 5, 40, 12]), Some(7.0));
        assert_eq!(median(&[9]), Some(9.0));
    }

    #[test]
    fn median_of_even_count() {
        assert_eq!(median(&[100, 300]), Some(200.0));
        assert_eq!(median(&[1, 2, 3, 4, 5, 6]), Some(3.5));
    }

    #[test]
    fn from_sessions_reduces_both_fields() {
        let sessions = [(3, 150), (7, 100), (5, 120), (40, 400), (12, 110)]
            .into_iter()
            .map(|(hands_played, peak_bankroll)| SessionResult {
                hands_played,
                peak_bankroll,
            })
            .collect();

        let batch = BatchResult::from_sessions(sessions).unwrap();
        assert_eq!(batch.median_hands_to_bankruptcy, 7.0);
        assert_eq!(batch.median_peak_bankroll, 120.0);
        assert_eq!(batch.sessions.len(), 5);
    }

    #[test]
    fn from_sessions_rejects_empty() {
        assert_eq!(
            BatchResult::from_sessions(Vec::new()),
            Err(BatchError::InvalidBatchSize)
        );
    }
}
