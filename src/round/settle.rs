use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::options::{RoundingMode, SimulationOptions};
use crate::policy::dealer::play_dealer;
use crate::result::{RoundOutcome, RoundResult};
use crate::shoe::Shoe;

use super::{Round, RoundPhase};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> u64 {
    match mode {
        RoundingMode::Up => amount.ceil() as u64,
        RoundingMode::Down => amount.floor() as u64,
        RoundingMode::Nearest => amount.round() as u64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> u64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as u64,
        RoundingMode::Down => libm::floor(amount) as u64,
        RoundingMode::Nearest => libm::round(amount) as u64,
    }
}

impl Round {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until reaching 17 or higher (see
    /// [`dealer_action`](crate::dealer_action)). If the player busted the
    /// dealer does not draw.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(
        &mut self,
        shoe: &mut Shoe,
        options: &SimulationOptions,
    ) -> Result<Vec<Card>, RoundError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let drawn_cards = if self.player.is_bust() {
            Vec::new()
        } else {
            play_dealer(shoe, &mut self.dealer, options.stand_on_soft_17)?
        };

        self.phase = RoundPhase::Showdown;
        Ok(drawn_cards)
    }

    /// Compares the hands, credits the payout to `bankroll`, and returns the
    /// result.
    ///
    /// Payouts include the returned wager: a win pays `2 × bet`, a push
    /// returns `bet`, a blackjack pays `bet` plus `bet × blackjack_pays`
    /// rounded with `rounding_blackjack`, and a loss pays nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not at showdown.
    pub fn settle(
        &mut self,
        bankroll: &mut u64,
        options: &SimulationOptions,
    ) -> Result<RoundResult, RoundError> {
        if self.phase != RoundPhase::Showdown {
            return Err(RoundError::InvalidState);
        }

        let bet = self.bet;
        let player_value = self.player.total();
        let dealer_value = self.dealer.total();

        let (outcome, payout) = match (self.player.is_blackjack(), self.dealer.is_blackjack()) {
            (true, true) => (RoundOutcome::Push, bet),
            (true, false) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (bet as f64) * options.blackjack_pays;
                let rounded = round_amount(winnings, options.rounding_blackjack);
                (RoundOutcome::Blackjack, bet.saturating_add(rounded))
            }
            (false, true) => (RoundOutcome::Lose, 0),
            (false, false) => {
                if self.player.is_bust() {
                    (RoundOutcome::Lose, 0)
                } else if self.dealer.is_bust() || player_value > dealer_value {
                    (RoundOutcome::Win, bet.saturating_mul(2))
                } else if player_value == dealer_value {
                    (RoundOutcome::Push, bet)
                } else {
                    (RoundOutcome::Lose, 0)
                }
            }
        };

        *bankroll = bankroll.saturating_add(payout);
        self.phase = RoundPhase::Settled;

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in i64")]
        let net = payout as i64 - bet as i64;

        Ok(RoundResult {
            outcome,
            bet,
            doubled: self.doubled,
            payout,
            net,
            player_total: player_value,
            dealer_total: dealer_value,
            bankroll: *bankroll,
        })
    }
}
