//! A 36-card Drunkard (War) simulator with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that builds and shuffles a 36-card
//! deck, deals it evenly, and plays rounds until one player holds every
//! dealt card. Each round every player still holding cards reveals their top
//! card, and the strongest rank takes all of them.
//!
//! # Example
//!
//! ```
//! use drunkard::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_players(3), 42).unwrap();
//! let result = game.play().unwrap();
//! println!("Winner: {}", game.players()[result.winner].name());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{RoundError, SetupError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::Player;
pub use result::{GameOutcome, GameResult, PlayedCard, RoundResult};
