//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Fewer than two players, or more players than cards in the deck.
    #[error("invalid player count {requested}: need at least 2 and at most 36 players")]
    InvalidPlayerCount {
        /// The player count that was asked for.
        requested: usize,
    },
    /// The supplied deck is not exactly one full 36-card deck.
    #[error("deck must hold each of the 36 cards exactly once")]
    InvalidDeck,
}

/// Errors that can occur while resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A participating player has no card to play.
    #[error("player has an empty hand")]
    EmptyHand,
    /// No players took part in the round.
    #[error("no players in the round")]
    NoPlayers,
    /// Invalid game state for playing a round.
    #[error("invalid game state for playing a round")]
    InvalidState,
}
