//! Round phase types.

/// Phase of a round.
///
/// A round moves strictly forward:
/// `Dealt → (blackjack check) → PlayerTurn → DealerTurn → Showdown → Settled`.
/// When either side is dealt a blackjack the check jumps straight to
/// `Showdown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Both hands hold two cards; blackjacks have not been checked yet.
    Dealt,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and the round can be settled.
    Showdown,
    /// Payouts have been credited.
    Settled,
}
