//! Inverted Games - Unified CLI
//!
//! Plays tic-tac-toe through the generic turn loop.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use inverted_games::{
    GameConfig, GameSummary, InvalidMoveSetting, PlayerKind, ScriptedPlayer, build_game, play,
    scripted_game,
};
use inverted_core::InvalidMovePolicy;
use inverted_tictactoe::{Coord, Mark};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            x_name,
            o_name,
            abort_on_invalid,
            max_attempts,
        } => {
            let mut config = load_config(config)?;
            if let Some(kind) = x {
                config.set_kind(Mark::X, kind);
            }
            if let Some(kind) = o {
                config.set_kind(Mark::O, kind);
            }
            if let Some(name) = x_name {
                config.set_name(Mark::X, name);
            }
            if let Some(name) = o_name {
                config.set_name(Mark::O, name);
            }
            if abort_on_invalid {
                config.set_invalid_move(InvalidMoveSetting::Abort);
            }
            if let Some(max_attempts) = max_attempts {
                config.set_max_attempts(max_attempts);
            }
            run_play(config).await
        }
        Command::Script { x, o, json } => run_script(&x, &o, json).await,
    }
}

/// Loads the config file if one was given, otherwise the defaults.
#[instrument]
fn load_config(path: Option<PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

/// Run an interactive game
#[instrument(skip(config))]
async fn run_play(config: GameConfig) -> Result<()> {
    let humans = [Mark::X, Mark::O]
        .iter()
        .filter(|mark| config.kind(**mark) == PlayerKind::Human)
        .count();
    info!(humans, "Starting interactive game");

    let game = build_game(&config)?;
    let summary = play(game).await?;

    println!("\n{}\n\n{}", summary.board, summary.outcome);
    Ok(())
}

/// Run a game between two scripted players
#[instrument]
async fn run_script(x: &str, o: &str, json: bool) -> Result<()> {
    let x = ScriptedPlayer::<Coord>::parse("X", x).context("Invalid moves for X")?;
    let o = ScriptedPlayer::<Coord>::parse("O", o).context("Invalid moves for O")?;

    let mut game = scripted_game(x, o)?.with_policy(InvalidMovePolicy::Abort);
    let outcome = game.run().await?;
    let summary = GameSummary::new(&game, outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}\n\n{}", summary.board, summary.outcome);
    }
    Ok(())
}
