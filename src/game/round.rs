//! Round resolution.

use alloc::vec::Vec;

use crate::error::RoundError;
use crate::player::Player;
use crate::result::{PlayedCard, RoundResult};

/// Plays one round between `participants`.
///
/// Each participant is a `(seat, player)` pair. Every player puts down their
/// top card in iteration order; the strongest rank wins and ties go to the
/// earliest participant. The winner takes all played cards, their own
/// included, onto the bottom of their hand in play order.
///
/// # Errors
///
/// Returns [`RoundError::NoPlayers`] if `participants` is empty and
/// [`RoundError::EmptyHand`] if any participant has no cards. No hand is
/// touched when an error is returned.
pub fn resolve<'a, I>(round: usize, participants: I) -> Result<RoundResult, RoundError>
where
    I: IntoIterator<Item = (usize, &'a mut Player)>,
{
    let mut seats: Vec<(usize, &'a mut Player)> = participants.into_iter().collect();
    if seats.is_empty() {
        return Err(RoundError::NoPlayers);
    }
    if let Some(seat) = seats
        .iter()
        .find(|(_, player)| player.is_empty())
        .map(|(seat, _)| *seat)
    {
        tracing::error!(round, seat, "player has no card to play");
        return Err(RoundError::EmptyHand);
    }

    let mut played = Vec::with_capacity(seats.len());
    for (seat, player) in &mut seats {
        let card = player.play_top()?;
        played.push(PlayedCard { seat: *seat, card });
    }

    // Strictly greater keeps the earliest participant on ties.
    let mut best = 0;
    for (index, entry) in played.iter().enumerate().skip(1) {
        if entry.card.strength() > played[best].card.strength() {
            best = index;
        }
    }

    let winner = played[best].seat;
    seats[best].1.add_cards(played.iter().map(|entry| entry.card));

    Ok(RoundResult {
        round,
        played,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn player_with(name: &str, cards: &[Card]) -> Player {
        let mut player = Player::new(name);
        player.add_cards(cards.iter().copied());
        player
    }

    #[test]
    fn highest_rank_takes_every_card() {
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        let six = Card::new(Suit::Spades, Rank::Six);
        let king = Card::new(Suit::Clubs, Rank::King);
        let mut players = vec![
            player_with("Player 1", &[six]),
            player_with("Player 2", &[ace]),
            player_with("Player 3", &[king]),
        ];

        let result = resolve(1, players.iter_mut().enumerate()).unwrap();

        assert_eq!(result.winner, 1);
        assert_eq!(result.winning_card(), Some(ace));
        assert!(players[0].is_empty());
        assert!(players[2].is_empty());
        assert_eq!(players[1].cards().copied().collect::<Vec<_>>(), vec![six, ace, king]);
    }

    #[test]
    fn tie_goes_to_first_in_order() {
        let mut players = vec![
            player_with("Player 1", &[Card::new(Suit::Hearts, Rank::Seven)]),
            player_with("Player 2", &[Card::new(Suit::Clubs, Rank::Queen)]),
            player_with("Player 3", &[Card::new(Suit::Spades, Rank::Queen)]),
        ];

        let result = resolve(1, players.iter_mut().enumerate()).unwrap();

        assert_eq!(result.winner, 1);
        assert_eq!(players[1].card_count(), 3);
    }

    #[test]
    fn empty_hand_fails_without_touching_hands() {
        let mut players = vec![
            player_with("Player 1", &[Card::new(Suit::Hearts, Rank::Seven)]),
            Player::new("Player 2"),
        ];

        let err = resolve(1, players.iter_mut().enumerate()).unwrap_err();

        assert_eq!(err, RoundError::EmptyHand);
        assert_eq!(players[0].card_count(), 1);
    }

    #[test]
    fn no_participants_fails() {
        let mut players: Vec<Player> = Vec::new();
        assert_eq!(
            resolve(1, players.iter_mut().enumerate()).unwrap_err(),
            RoundError::NoPlayers
        );
    }

    #[test]
    fn seats_are_reported_as_given() {
        let mut players = vec![
            player_with("Player 1", &[Card::new(Suit::Hearts, Rank::Nine)]),
            Player::new("Player 2"),
            player_with("Player 3", &[Card::new(Suit::Clubs, Rank::Ten)]),
        ];

        let result = resolve(
            4,
            players.iter_mut().enumerate().filter(|(_, p)| !p.is_empty()),
        )
        .unwrap();

        assert_eq!(result.round, 4);
        assert_eq!(result.winner, 2);
        assert_eq!(result.played.len(), 2);
        assert_eq!(players[2].card_count(), 2);
    }
}
