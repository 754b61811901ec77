//! Property tests for dealing, shuffling, and round resolution.

use drunkard::{Card, DECK_SIZE, Game, GameOptions, Player, deck};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn occurrences(cards: &[Card], card: &Card) -> usize {
    cards.iter().filter(|c| *c == card).count()
}

fn counts(game: &Game) -> Vec<usize> {
    game.players().iter().map(Player::card_count).collect()
}

proptest! {
    #[test]
    fn deal_is_even(seed in any::<u64>(), players in 2usize..=DECK_SIZE) {
        let game = Game::new(GameOptions::default().with_players(players), seed).unwrap();

        for player in game.players() {
            prop_assert_eq!(player.card_count(), DECK_SIZE / players);
        }
        prop_assert_eq!(game.undealt().len(), DECK_SIZE % players);
        prop_assert_eq!(game.total_cards(), DECK_SIZE);
    }

    #[test]
    fn shuffle_is_a_permutation(
        seed in any::<u64>(),
        input in proptest::sample::subsequence(deck::build(), 0..=DECK_SIZE),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let output = deck::shuffle(input.clone(), &mut rng);

        prop_assert_eq!(output.len(), input.len());
        for card in &input {
            prop_assert_eq!(occurrences(&output, card), occurrences(&input, card));
        }
    }

    #[test]
    fn strongest_card_wins_and_ties_go_first(seed in any::<u64>(), players in 2usize..=6) {
        let mut game = Game::new(GameOptions::default().with_players(players), seed).unwrap();
        let round = game.play_round().unwrap();

        let position = round
            .played
            .iter()
            .position(|played| played.seat == round.winner)
            .unwrap();
        let best = round.played[position].card.strength();

        for (index, played) in round.played.iter().enumerate() {
            prop_assert!(played.card.strength() <= best);
            if index < position {
                prop_assert!(played.card.strength() < best);
            }
        }
    }

    #[test]
    fn rounds_conserve_and_move_cards(seed in any::<u64>(), players in 2usize..=5) {
        let mut game = Game::new(GameOptions::default().with_players(players), seed).unwrap();
        let mut previous = counts(&game);

        while !game.is_over() && game.rounds_played() < 300 {
            let round = game.play_round().unwrap();
            let now = counts(&game);
            let taking_part = round.played.len();

            prop_assert_eq!(game.total_cards(), DECK_SIZE);
            for played in &round.played {
                if played.seat == round.winner {
                    prop_assert_eq!(now[played.seat], previous[played.seat] + taking_part - 1);
                } else {
                    prop_assert_eq!(now[played.seat] + 1, previous[played.seat]);
                }
            }
            previous = now;
        }
    }
}
