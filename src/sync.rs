use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::batch::session_rng;

/// Seed RNG shared behind a lock so the simulator can hand out independent
/// per-session streams from `&self`.
pub struct SeedSource {
    #[cfg(feature = "std")]
    rng: std::sync::Mutex<ChaCha8Rng>,
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    rng: spin::Mutex<ChaCha8Rng>,
}

impl SeedSource {
    pub fn new(seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self {
            #[cfg(feature = "std")]
            rng: std::sync::Mutex::new(rng),
            #[cfg(all(not(feature = "std"), feature = "alloc"))]
            rng: spin::Mutex::new(rng),
        }
    }

    /// Runs `f` with exclusive access to the seed RNG.
    #[cfg(feature = "std")]
    pub fn with<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut *rng)
    }

    /// Runs `f` with exclusive access to the seed RNG.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn with<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        f(&mut *self.rng.lock())
    }

    /// Draws the RNG for the next session.
    pub fn next_rng(&self) -> ChaCha8Rng {
        self.with(|seeds| session_rng(seeds))
    }
}
