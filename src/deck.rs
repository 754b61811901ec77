//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds the full ordered deck.
///
/// Suits are iterated outermost in [`Suit::ALL`] order and ranks innermost
/// from weakest to strongest, so the first card is the six of hearts and the
/// last is the ace of spades.
#[must_use]
pub fn build() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns a uniformly random permutation of `deck`.
///
/// The permutation is driven entirely by `rng`, so a seeded generator always
/// yields the same order.
pub fn shuffle<R: Rng + ?Sized>(mut deck: Vec<Card>, rng: &mut R) -> Vec<Card> {
    deck.shuffle(rng);
    deck
}

/// Builds a fresh deck and shuffles it.
pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle(build(), rng)
}

/// Returns whether `cards` is exactly one full deck: 36 cards, no repeats.
#[must_use]
pub fn is_complete(cards: &[Card]) -> bool {
    cards.len() == DECK_SIZE
        && build()
            .iter()
            .all(|card| cards.iter().filter(|c| *c == card).count() == 1)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn build_orders_suits_outer_ranks_inner() {
        let deck = build();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Suit::Hearts, Rank::Six));
        assert_eq!(deck[8], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(deck[9], Card::new(Suit::Diamonds, Rank::Six));
        assert_eq!(deck[35], Card::new(Suit::Spades, Rank::Ace));
        assert!(is_complete(&deck));
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffled(&mut ChaCha8Rng::seed_from_u64(7));
        let b = shuffled(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(is_complete(&a));
    }

    #[test]
    fn incomplete_decks_are_rejected() {
        let mut deck = build();
        deck.pop();
        assert!(!is_complete(&deck));

        deck.push(deck[0]);
        assert!(!is_complete(&deck));
    }
}
