//! Round and game result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A card put down by one player during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    /// Seat index of the player who played the card.
    pub seat: usize,
    /// The card played.
    pub card: Card,
}

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: usize,
    /// Cards played this round, in play order.
    pub played: Vec<PlayedCard>,
    /// Seat index of the round winner.
    pub winner: usize,
}

impl RoundResult {
    /// Returns the card the winner played.
    #[must_use]
    pub fn winning_card(&self) -> Option<Card> {
        self.played
            .iter()
            .find(|played| played.seat == self.winner)
            .map(|played| played.card)
    }
}

/// How a game came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// One player collected every dealt card.
    AllCardsCollected,
    /// The round limit was reached first; the largest hand wins.
    RoundLimitReached,
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Seat index of the winner.
    pub winner: usize,
    /// Number of rounds played.
    pub rounds: usize,
    /// Final hand size per seat.
    pub card_counts: Vec<usize>,
    /// How the game ended.
    pub outcome: GameOutcome,
}
