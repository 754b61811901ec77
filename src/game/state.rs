//! Game state types.

/// Game state.
///
/// A game moves strictly forward: `Created -> Dealt -> Playing -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Players are seated but no cards have been dealt.
    Created,
    /// Every player has received their share of the deck.
    Dealt,
    /// At least one round has been played.
    Playing,
    /// The game is over and a winner has been chosen.
    Finished,
}
