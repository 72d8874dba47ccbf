//! Round resolution.
//!
//! A [`Round`] owns both hands and the wager for one deal. It can be driven
//! step by step (for an interactive table) or resolved in one call with
//! [`resolve_round`].

use crate::card::Card;
use crate::error::{BetError, RoundError};
use crate::hand::Hand;
use crate::options::SimulationOptions;
use crate::policy::DecisionPolicy;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod settle;
pub mod state;

pub use state::RoundPhase;

/// One hand of blackjack between the player and the dealer.
#[derive(Debug, Clone)]
pub struct Round {
    /// The player's hand.
    player: Hand,
    /// The dealer's hand. The first card is the upcard.
    dealer: Hand,
    /// Current wager, doubled after a double down.
    bet: u64,
    /// Whether the player doubled down.
    doubled: bool,
    /// Current phase.
    phase: RoundPhase,
}

impl Round {
    /// Places `bet` from `bankroll` and deals two cards to each side.
    ///
    /// Cards are dealt player, player, dealer, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, exceeds the bankroll, or the shoe
    /// runs out of cards. The bankroll is untouched on error.
    pub fn deal(shoe: &mut Shoe, bet: u64, bankroll: &mut u64) -> Result<Self, RoundError> {
        if bet == 0 {
            return Err(BetError::ZeroBet.into());
        }
        if *bankroll < bet {
            return Err(BetError::InsufficientFunds.into());
        }

        let mut player = Hand::new();
        let mut dealer = Hand::new();
        player.add_card(shoe.draw()?);
        player.add_card(shoe.draw()?);
        dealer.add_card(shoe.draw()?);
        dealer.add_card(shoe.draw()?);

        *bankroll -= bet;

        Ok(Self {
            player,
            dealer,
            bet,
            doubled: false,
            phase: RoundPhase::Dealt,
        })
    }

    /// Checks both hands for a blackjack.
    ///
    /// If either side has one, the round skips both turns and goes straight
    /// to showdown. Returns `true` in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not freshly dealt.
    pub fn check_blackjack(&mut self) -> Result<bool, RoundError> {
        if self.phase != RoundPhase::Dealt {
            return Err(RoundError::InvalidState);
        }

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            self.phase = RoundPhase::Showdown;
            Ok(true)
        } else {
            self.phase = RoundPhase::PlayerTurn;
            Ok(false)
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's upcard.
    #[must_use]
    pub fn dealer_upcard(&self) -> Option<&Card> {
        self.dealer.up_card()
    }

    /// Returns the current wager.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns whether the player doubled down.
    #[must_use]
    pub const fn doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }
}

/// Plays one complete round: deal, blackjack check, player turn, dealer turn,
/// and settlement.
///
/// `bet` is taken from `bankroll` and the payout is credited back. A
/// [`Double`](crate::Action::Double) that cannot be played (more than two
/// cards, or the remaining bankroll does not cover the wager again) is played
/// as a hit.
///
/// # Errors
///
/// Returns an error if the bet is zero or exceeds the bankroll, or the shoe
/// runs out of cards.
pub fn resolve_round<D>(
    shoe: &mut Shoe,
    bet: u64,
    bankroll: &mut u64,
    policy: &mut D,
    options: &SimulationOptions,
) -> Result<RoundResult, RoundError>
where
    D: DecisionPolicy + ?Sized,
{
    let mut round = Round::deal(shoe, bet, bankroll)?;

    if !round.check_blackjack()? {
        round.play_player(shoe, bankroll, policy)?;
        round.dealer_play(shoe, options)?;
    }

    let result = round.settle(bankroll, options)?;

    tracing::trace!(
        outcome = %result.outcome,
        bet = result.bet,
        doubled = result.doubled,
        player = %round.player,
        dealer = %round.dealer,
        bankroll = result.bankroll,
        "round settled"
    );

    Ok(result)
}
