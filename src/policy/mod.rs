//! Player, dealer, and betting policies.
//!
//! Policies are injected into the round resolver and the session runner, so
//! new strategies can be added without touching either.

pub mod betting;
pub mod dealer;
pub mod decision;

pub use betting::{
    BetContext, BettingPolicy, BettingStrategy, FlatBet, HalfUp, Martingale, Oscar,
    ReverseMartingale,
};
pub use dealer::{DealerAction, dealer_action};
pub use decision::{Action, BasicStrategy, DecisionPolicy, decide_player_action};
