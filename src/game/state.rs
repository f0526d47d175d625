//! Round state types.

/// Round state.
///
/// A round only moves forward through these states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for the initial deal.
    DealingInitial,
    /// The player is drawing cards.
    PlayerDrawing,
    /// Hands are final and ready to be compared.
    Comparison,
    /// The outcome has been settled.
    Done,
}
