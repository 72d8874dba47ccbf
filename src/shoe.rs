//! The multi-deck shoe cards are drawn from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// An ordered stack of cards built from one or more full decks.
///
/// The top of the shoe is the end of the internal vector. A shoe is shuffled
/// once at construction and never reshuffled; the simulation builds a fresh
/// shoe for every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds `num_decks` full decks and shuffles them with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a stacked shoe that deals `draws` in the given order.
    ///
    /// ```
    /// use bjsim::{Card, Rank, Shoe, Suit};
    ///
    /// let mut shoe = Shoe::from_draws(&[
    ///     Card::new(Suit::Hearts, Rank::Ace),
    ///     Card::new(Suit::Clubs, Rank::Two),
    /// ]);
    /// assert_eq!(shoe.draw().unwrap().rank, Rank::Ace);
    /// assert_eq!(shoe.draw().unwrap().rank, Rank::Two);
    /// assert!(shoe.draw().is_err());
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe has run out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
