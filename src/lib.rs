//! A blackjack bankroll simulator with optional `no_std` support.
//!
//! The crate plays independent hands of blackjack with a fixed basic
//! strategy, sizes wagers with pluggable betting systems, and aggregates many
//! sessions played to bankruptcy into median statistics.
//!
//! # Example
//!
//! ```no_run
//! use bjsim::{BettingStrategy, SimulationOptions, Simulator};
//!
//! let simulator = Simulator::new(SimulationOptions::default(), 42);
//! let batch = simulator.run_batch(100, 10, 500, BettingStrategy::Flat);
//! let _ = batch;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod batch;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;
pub mod round;
pub mod session;
pub mod shoe;
pub mod simulator;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BatchError, BetError, ParseStrategyError, RoundError, SessionError, ShoeError,
};
pub use hand::Hand;
pub use options::{RoundingMode, SimulationOptions};
pub use policy::{
    Action, BasicStrategy, BetContext, BettingPolicy, BettingStrategy, DealerAction,
    DecisionPolicy, FlatBet, HalfUp, Martingale, Oscar, ReverseMartingale, dealer_action,
    decide_player_action,
};
pub use result::{BatchResult, RoundOutcome, RoundResult, SessionResult};
pub use round::{Round, RoundPhase, resolve_round};
pub use session::SessionState;
pub use shoe::Shoe;
pub use simulator::Simulator;
