//! Table rules for simulated rounds.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Rules applied to every simulated round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::SimulationOptions;
///
/// let options = SimulationOptions::default()
///     .with_decks(8)
///     .with_blackjack_pays(1.2)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOptions {
    /// Number of decks in each freshly built shoe.
    pub decks: u8,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            stand_on_soft_17: true,
        }
    }
}

impl SimulationOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{RoundingMode, SimulationOptions};
    ///
    /// let options = SimulationOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
