//! Player decision policy ("basic strategy").

use crate::hand::Hand;

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the wager, draw exactly one card, then stand.
    Double,
}

/// Chooses the next action for the player's hand.
///
/// Implemented by [`BasicStrategy`] and by any `FnMut(&Hand, u8) -> Action`
/// closure, which lets an interactive front end feed live choices through the
/// same round resolver.
///
/// A returned [`Action::Double`] is a request: the resolver plays it as a hit
/// when the hand has more than two cards or the bankroll cannot cover it.
pub trait DecisionPolicy {
    /// Decides the next action given the hand and the dealer's upcard value.
    fn decide(&mut self, hand: &Hand, dealer_upcard: u8) -> Action;
}

impl<F> DecisionPolicy for F
where
    F: FnMut(&Hand, u8) -> Action,
{
    fn decide(&mut self, hand: &Hand, dealer_upcard: u8) -> Action {
        self(hand, dealer_upcard)
    }
}

/// The fixed basic-strategy table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicStrategy;

impl DecisionPolicy for BasicStrategy {
    fn decide(&mut self, hand: &Hand, dealer_upcard: u8) -> Action {
        decide_player_action(hand, dealer_upcard)
    }
}

/// Looks up the basic-strategy action for `hand` against the dealer's upcard
/// value (2-11, aces as 11).
///
/// ```
/// use bjsim::{Action, Card, Hand, Rank, Suit, decide_player_action};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Suit::Spades, Rank::Six));
/// hand.add_card(Card::new(Suit::Hearts, Rank::Five));
/// assert_eq!(decide_player_action(&hand, 10), Action::Double);
/// ```
#[must_use]
pub fn decide_player_action(hand: &Hand, dealer_upcard: u8) -> Action {
    if hand.is_soft() {
        if let Some(action) = soft_action(hand.total(), dealer_upcard) {
            return action;
        }
    }
    hard_action(hand.total(), dealer_upcard)
}

// Soft 12 (two aces) has no row here and is played as hard 12.
const fn soft_action(total: u8, up: u8) -> Option<Action> {
    let action = match total {
        19.. => Action::Stand,
        18 => match up {
            2..=6 => Action::Double,
            7 | 8 => Action::Stand,
            _ => Action::Hit,
        },
        17 => double_if(matches!(up, 3..=6)),
        15 | 16 => double_if(matches!(up, 4..=6)),
        13 | 14 => double_if(matches!(up, 5 | 6)),
        _ => return None,
    };
    Some(action)
}

const fn hard_action(total: u8, up: u8) -> Action {
    match total {
        17.. => Action::Stand,
        13..=16 => stand_if(matches!(up, 2..=6)),
        12 => stand_if(matches!(up, 4..=6)),
        11 => Action::Double,
        10 => double_if(matches!(up, 2..=9)),
        9 => double_if(matches!(up, 3..=6)),
        _ => Action::Hit,
    }
}

const fn double_if(condition: bool) -> Action {
    if condition { Action::Double } else { Action::Hit }
}

const fn stand_if(condition: bool) -> Action {
    if condition { Action::Stand } else { Action::Hit }
}
