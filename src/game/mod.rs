//! Game engine and state management.

use alloc::format;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck;
use crate::error::{RoundError, SetupError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{GameOutcome, GameResult, RoundResult};

pub mod round;
pub mod state;

pub use state::GameState;

/// A Drunkard game that owns the players and the undealt remainder.
///
/// Construction deals the deck, so a new game is already in
/// [`GameState::Dealt`]. Use [`GameOptions`] to configure the player count
/// and the round limit.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Seated players, in seat order.
    players: Vec<Player>,
    /// Cards left over after even division. Never played.
    undealt: Vec<Card>,
    /// Current game state.
    state: GameState,
    /// Rounds played so far.
    rounds: usize,
}

impl Game {
    /// Creates a new game, shuffling with a `ChaCha8Rng` seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] if `options.players` is
    /// below 2 or above [`DECK_SIZE`].
    ///
    /// # Example
    ///
    /// ```
    /// use drunkard::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::Dealt);
    /// assert_eq!(game.players()[0].card_count(), 12);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a new game, shuffling with the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] if `options.players` is
    /// below 2 or above [`DECK_SIZE`].
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Result<Self, SetupError> {
        check_player_count(options.players)?;
        Self::from_deck(options, deck::shuffled(rng))
    }

    /// Creates a new game dealing `cards` in the given order.
    ///
    /// The deck is split into contiguous chunks: the first player receives
    /// the first `36 / players` cards, the next player the following chunk,
    /// and so on. The remainder stays undealt.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::InvalidPlayerCount`] for a bad player count and
    /// [`SetupError::InvalidDeck`] if `cards` is not one full deck.
    pub fn from_deck(options: GameOptions, cards: Vec<Card>) -> Result<Self, SetupError> {
        check_player_count(options.players)?;
        if !deck::is_complete(&cards) {
            return Err(SetupError::InvalidDeck);
        }

        let players = (1..=options.players)
            .map(|seat| Player::new(format!("Player {seat}")))
            .collect();

        let mut game = Self {
            options,
            players,
            undealt: cards,
            state: GameState::Created,
            rounds: 0,
        };
        game.deal();

        Ok(game)
    }

    /// Hands every player an equal contiguous share of the deck.
    fn deal(&mut self) {
        let per_player = self.undealt.len() / self.players.len();

        for player in &mut self.players {
            player.add_cards(self.undealt.drain(..per_player));
        }
        self.state = GameState::Dealt;

        tracing::info!(
            players = self.players.len(),
            per_player,
            undealt = self.undealt.len(),
            "dealt cards"
        );
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the cards that were left over by the deal.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.undealt
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds
    }

    /// Returns the number of cards in all hands plus the undealt remainder.
    ///
    /// This is always [`DECK_SIZE`].
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(Player::card_count).sum::<usize>() + self.undealt.len()
    }

    /// Returns whether no further round can be played.
    ///
    /// That is the case once fewer than two players hold cards, meaning a
    /// single player has collected every dealt card.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().filter(|player| !player.is_empty()).count() < 2
    }

    /// Returns the seat of the player with the most cards.
    ///
    /// Ties go to the lowest seat.
    #[must_use]
    pub fn leader(&self) -> usize {
        let mut best = 0;
        for (seat, player) in self.players.iter().enumerate().skip(1) {
            if player.card_count() > self.players[best].card_count() {
                best = seat;
            }
        }
        best
    }

    /// Plays a single round.
    ///
    /// Every player still holding cards plays their top card; players with
    /// empty hands sit the round out.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if the game is finished or no
    /// round can be played, and [`RoundError::EmptyHand`] if a participant
    /// turns out to have no cards.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        if self.state == GameState::Finished || self.is_over() {
            return Err(RoundError::InvalidState);
        }

        let round = self.rounds + 1;
        let result = round::resolve(
            round,
            self.players
                .iter_mut()
                .enumerate()
                .filter(|(_, player)| !player.is_empty()),
        )?;
        self.rounds = round;
        self.state = GameState::Playing;

        tracing::debug!(
            round,
            winner = result.winner,
            cards = result.played.len(),
            "round resolved"
        );

        Ok(result)
    }

    /// Plays rounds until the game is over and returns the result.
    ///
    /// # Errors
    ///
    /// See [`Game::play_with`].
    pub fn play(&mut self) -> Result<GameResult, RoundError> {
        self.play_with(|_, _| {})
    }

    /// Plays rounds until the game is over, calling `on_round` after each.
    ///
    /// The loop stops when one player holds every dealt card or when
    /// [`GameOptions::max_rounds`] rounds have been played. The winner is the
    /// player with the most cards, ties going to the lowest seat.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if the game is already finished,
    /// or any error from [`Game::play_round`].
    pub fn play_with<F>(&mut self, mut on_round: F) -> Result<GameResult, RoundError>
    where
        F: FnMut(&Self, &RoundResult),
    {
        if self.state == GameState::Finished {
            return Err(RoundError::InvalidState);
        }

        while !self.is_over() {
            if self.options.max_rounds != 0 && self.rounds >= self.options.max_rounds {
                tracing::warn!(rounds = self.rounds, "round limit reached");
                break;
            }
            let result = self.play_round()?;
            on_round(self, &result);
        }

        Ok(self.finish())
    }

    /// Moves to [`GameState::Finished`] and scores the game.
    fn finish(&mut self) -> GameResult {
        self.state = GameState::Finished;

        let winner = self.leader();
        let outcome = if self.is_over() {
            GameOutcome::AllCardsCollected
        } else {
            GameOutcome::RoundLimitReached
        };

        tracing::info!(
            winner = self.players[winner].name(),
            rounds = self.rounds,
            ?outcome,
            "game finished"
        );

        GameResult {
            winner,
            rounds: self.rounds,
            card_counts: self.players.iter().map(Player::card_count).collect(),
            outcome,
        }
    }
}

const fn check_player_count(players: usize) -> Result<(), SetupError> {
    if players < 2 || players > DECK_SIZE {
        return Err(SetupError::InvalidPlayerCount { requested: players });
    }
    Ok(())
}
