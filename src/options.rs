//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use drunkard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_max_rounds(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players seated at the table.
    pub players: usize,
    /// Rounds after which an unfinished game is stopped and scored.
    /// 0 to play without a limit.
    pub max_rounds: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 3,
            max_rounds: 10_000,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use drunkard::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(2);
    /// assert_eq!(options.players, 2);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the round limit.
    ///
    /// War-style games can cycle forever, so the limit bounds [`Game::play`].
    ///
    /// [`Game::play`]: crate::Game::play
    ///
    /// # Example
    ///
    /// ```
    /// use drunkard::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(0);
    /// assert_eq!(options.max_rounds, 0);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
