use crate::card::Card;
use crate::error::{ActionError, RoundError};
use crate::policy::{Action, DecisionPolicy};
use crate::shoe::Shoe;

use super::{Round, RoundPhase};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase == RoundPhase::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Returns whether the player may double down with `bankroll` left.
    ///
    /// Doubling needs exactly two cards and enough bankroll to match the
    /// current wager.
    #[must_use]
    pub fn can_double(&self, bankroll: u64) -> bool {
        self.phase == RoundPhase::PlayerTurn && self.player.len() == 2 && bankroll >= self.bet
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self, shoe: &mut Shoe) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = shoe.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.phase = RoundPhase::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.phase = RoundPhase::DealerTurn;
        Ok(())
    }

    /// Player action: Double down (double the wager, receive one card, then
    /// stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand is not
    /// eligible to double, or the shoe is empty.
    pub fn double_down(&mut self, shoe: &mut Shoe, bankroll: &mut u64) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if !self.can_double(*bankroll) {
            return Err(ActionError::CannotDouble);
        }

        let card = shoe.draw()?;

        *bankroll -= self.bet;
        self.bet *= 2;
        self.doubled = true;
        self.player.add_card(card);
        self.phase = RoundPhase::DealerTurn;

        Ok(card)
    }

    /// Applies a single player action.
    ///
    /// # Errors
    ///
    /// See [`Round::hit`], [`Round::stand`], and [`Round::double_down`].
    pub fn apply(
        &mut self,
        shoe: &mut Shoe,
        bankroll: &mut u64,
        action: Action,
    ) -> Result<(), ActionError> {
        match action {
            Action::Hit => self.hit(shoe).map(|_| ()),
            Action::Stand => self.stand(),
            Action::Double => self.double_down(shoe, bankroll).map(|_| ()),
        }
    }

    /// Plays the player's turn to completion with `policy`.
    ///
    /// A double that cannot be played is converted into a hit.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe runs out.
    pub fn play_player<D>(
        &mut self,
        shoe: &mut Shoe,
        bankroll: &mut u64,
        policy: &mut D,
    ) -> Result<(), RoundError>
    where
        D: DecisionPolicy + ?Sized,
    {
        self.ensure_player_turn()?;
        let upcard = self.dealer.up_card().map_or(0, |card| card.value());

        while self.phase == RoundPhase::PlayerTurn {
            let action = match policy.decide(&self.player, upcard) {
                Action::Double if !self.can_double(*bankroll) => Action::Hit,
                action => action,
            };
            self.apply(shoe, bankroll, action)?;
        }

        Ok(())
    }
}
