//! Command-line Drunkard simulator.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use drunkard::{Game, GameOptions, GameOutcome};

/// Simulate a game of 36-card Drunkard and announce the winner.
#[derive(Debug, Parser)]
#[command(name = "drunkard", version, about, long_about = None)]
struct Cli {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 3)]
    players: usize,

    /// Seed for the shuffle (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many rounds and score by hand size (0 for no limit)
    #[arg(short, long, default_value_t = 10_000)]
    max_rounds: usize,

    /// Print every round and the final hands
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug { "debug" } else { "drunkard=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.debug)
        .init();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::info!(seed, players = cli.players, "starting game");

    let options = GameOptions::default()
        .with_players(cli.players)
        .with_max_rounds(cli.max_rounds);
    let mut game = Game::new(options, seed).context("setting up the game")?;

    if cli.verbose {
        println!("Seed: {seed}");
        for player in game.players() {
            println!("{player}");
        }
    }

    let verbose = cli.verbose;
    let result = game
        .play_with(|game, round| {
            if verbose {
                let played: Vec<String> = round
                    .played
                    .iter()
                    .map(|entry| format!("{} plays {}", game.players()[entry.seat].name(), entry.card))
                    .collect();
                println!(
                    "Round {}: {}; {} takes {} cards",
                    round.round,
                    played.join(", "),
                    game.players()[round.winner].name(),
                    round.played.len()
                );
            }
        })
        .context("playing the game")?;

    if cli.verbose {
        for player in game.players() {
            println!("{player}");
        }
        if result.outcome == GameOutcome::RoundLimitReached {
            println!("Round limit of {} reached", cli.max_rounds);
        }
        println!("Rounds played: {}", result.rounds);
    }

    println!("Winner: {}", game.players()[result.winner].name());

    Ok(())
}
