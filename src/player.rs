//! Players and their hands.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use core::fmt;

use crate::card::Card;
use crate::error::RoundError;

/// A seated player.
///
/// The hand is played from the top (front) and won cards go to the bottom
/// (back).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name, unique within a game.
    name: String,
    /// Cards in the hand, top first.
    hand: VecDeque<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends cards to the bottom of the hand, keeping their order.
    pub fn add_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.extend(cards);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyHand`] if the hand is empty.
    pub fn play_top(&mut self) -> Result<Card, RoundError> {
        self.hand.pop_front().ok_or(RoundError::EmptyHand)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.hand.front()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Returns the cards in the hand, top first.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.hand.iter()
    }

    /// Renders the hand as `"<name>'s hand: <card>, <card>, ..."`.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s hand: ", self.name)?;
        for (i, card) in self.hand.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
