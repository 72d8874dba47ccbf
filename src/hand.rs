//! Blackjack hand representation.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// A hand held by either the player or the dealer for one round.
///
/// The hand keeps a running total in which every ace starts at 11. After each
/// card the total is normalised: while it exceeds 21 and an ace is still
/// counted as 11, that ace is downgraded to 1. The reported total is therefore
/// always the best one available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
    /// Best total.
    total: u8,
    /// Aces still counted as 11.
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card to the hand and downgrades aces as needed.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total = self.total.saturating_add(card.value());
        if card.is_ace() {
            self.soft_aces += 1;
        }

        while self.total > 21 && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the dealer-visible card (first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the best total of the hand.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (an ace is counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0 && self.total <= 21
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total == 21
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Formats the total the way it is shown at the table.
    ///
    /// A soft hand shows both readings, hard first: ace-five reads `"6/16"`.
    ///
    /// ```
    /// use bjsim::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Five));
    /// assert_eq!(hand.display_value(), "6/16");
    ///
    /// hand.add_card(Card::new(Suit::Clubs, Rank::King));
    /// assert_eq!(hand.display_value(), "16");
    /// ```
    #[must_use]
    pub fn display_value(&self) -> String {
        alloc::format!("{}", DisplayValue(self))
    }
}

struct DisplayValue<'a>(&'a Hand);

impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = self.0;
        if hand.is_soft() {
            write!(f, "{}/{}", hand.total - 10, hand.total)
        } else {
            write!(f, "{}", hand.total)
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " ({})", DisplayValue(self))
    }
}
