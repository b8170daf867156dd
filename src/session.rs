//! Wiring concrete players and the tic-tac-toe board into the orchestrator.

use super::config::{GameConfig, PlayerKind};
use super::players::{ConsolePlayer, ScriptedPlayer, SimpleAI};
use inverted_core::{
    EventOf, GameError, GameEvent, MoveRecord, Orchestrator, Outcome, Player, Seat,
};
use inverted_tictactoe::{Coord, InvalidMove, Mark, TicTacToe};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Pause before an AI move in interactive games.
const AI_DELAY: Duration = Duration::from_millis(300);

/// Result of a finished game, ready for printing or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Outcome as text ("X wins", "Draw").
    pub outcome: String,
    /// Winning player's name, if any.
    pub winner: Option<String>,
    /// Applied moves in order.
    pub moves: Vec<MoveRecord<Mark, Coord>>,
    /// Final grid as drawn on the terminal.
    pub board: String,
}

impl GameSummary {
    /// Summarizes a game that ended with `outcome`.
    pub fn new(game: &Orchestrator<TicTacToe>, outcome: Outcome<Mark>) -> Self {
        Self {
            outcome: outcome.to_string(),
            winner: outcome
                .winner()
                .and_then(|mark| game.seat_name(mark))
                .map(str::to_string),
            moves: game.history().to_vec(),
            board: game.state().display(),
        }
    }
}

/// Creates the player configured for `mark`.
#[instrument(skip(config))]
pub fn build_player(config: &GameConfig, mark: Mark) -> Box<dyn Player<TicTacToe>> {
    let name = config.display_name(mark);
    match config.kind(mark) {
        PlayerKind::Human => Box::new(ConsolePlayer::stdio(name)),
        PlayerKind::Ai => Box::new(SimpleAI::new(name).with_delay(AI_DELAY)),
    }
}

/// Builds an orchestrator for the configured seats. X moves first.
#[instrument(skip(config))]
pub fn build_game(config: &GameConfig) -> Result<Orchestrator<TicTacToe>, GameError<InvalidMove>> {
    let game = Orchestrator::new(
        TicTacToe::new(),
        Seat::boxed(Mark::X, build_player(config, Mark::X)),
        Seat::boxed(Mark::O, build_player(config, Mark::O)),
    )?;
    Ok(game.with_policy(config.rules().policy()))
}

/// Builds a game between two scripted players.
#[instrument]
pub fn scripted_game(
    x: ScriptedPlayer<Coord>,
    o: ScriptedPlayer<Coord>,
) -> Result<Orchestrator<TicTacToe>, GameError<InvalidMove>> {
    Orchestrator::new(TicTacToe::new(), Seat::new(Mark::X, x), Seat::new(Mark::O, o))
}

/// Describes an event for the terminal, or `None` if it needs no line.
pub fn describe(event: &EventOf<TicTacToe>) -> Option<String> {
    match event {
        GameEvent::TurnStarted { .. } => None,
        GameEvent::MoveMade { player, mark, mv } => {
            Some(format!("{} ({}) plays {}", player, mark, mv))
        }
        // The rejected player reports the reason itself on its next prompt.
        GameEvent::MoveRejected { .. } => None,
        GameEvent::GameOver { winner: Some(name), .. } => Some(format!("{} wins!", name)),
        GameEvent::GameOver { winner: None, .. } => Some("It's a draw.".to_string()),
    }
}

/// Plays `game` to the end, printing each event as it happens.
#[instrument(skip(game))]
pub async fn play(
    mut game: Orchestrator<TicTacToe>,
) -> Result<GameSummary, GameError<InvalidMove>> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    game = game.with_events(tx);
    info!(policy = ?game.policy(), "Starting interactive game");

    let outcome = loop {
        let phase = game.step().await;
        while let Ok(event) = rx.try_recv() {
            if let Some(line) = describe(&event) {
                println!("{}", line);
            }
        }
        if let inverted_core::Phase::Finished(outcome) = phase? {
            break outcome;
        }
    };

    Ok(GameSummary::new(&game, outcome))
}
