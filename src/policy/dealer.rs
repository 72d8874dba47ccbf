//! Dealer drawing rule.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// What the dealer does next. The dealer never doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealerAction {
    /// Draw a card.
    Hit,
    /// Stop drawing.
    Stand,
}

/// Returns the dealer's next action.
///
/// The dealer draws below 17 and stands on 18 or more. On soft 17 the dealer
/// stands when `stand_on_soft_17` is true, otherwise draws.
#[must_use]
pub const fn dealer_action(hand: &Hand, stand_on_soft_17: bool) -> DealerAction {
    let value = hand.total();
    if value > 17 || (value == 17 && (stand_on_soft_17 || !hand.is_soft())) {
        DealerAction::Stand
    } else {
        DealerAction::Hit
    }
}

/// Plays the dealer's hand out and returns the cards drawn.
///
/// # Errors
///
/// Returns [`ShoeError::Empty`] if the dealer must draw from an empty shoe.
pub fn play_dealer(
    shoe: &mut Shoe,
    hand: &mut Hand,
    stand_on_soft_17: bool,
) -> Result<Vec<Card>, ShoeError> {
    let mut drawn_cards = Vec::new();

    while dealer_action(hand, stand_on_soft_17) == DealerAction::Hit {
        let card = shoe.draw()?;
        hand.add_card(card);
        drawn_cards.push(card);
    }

    Ok(drawn_cards)
}
