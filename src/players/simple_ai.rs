//! Simple heuristic AI player (no search).

use inverted_core::{Player, PlayerError};
use inverted_tictactoe::{Coord, Grid, Mark, Position, TicTacToe, rules};
use std::time::Duration;
use tracing::debug;

/// Simple AI: win if possible, else block, else center, else first empty square.
#[derive(Debug, Clone)]
pub struct SimpleAI {
    name: String,
    delay: Duration,
}

impl SimpleAI {
    /// Creates a new simple AI that answers immediately.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delay: Duration::ZERO,
        }
    }

    /// Pauses for `delay` before each move so a human can follow along.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Picks a position for `mark`, or `None` on a full grid.
    pub fn pick(grid: &Grid, mark: Mark) -> Option<Position> {
        rules::win::winning_move(grid, mark)
            .or_else(|| rules::win::winning_move(grid, mark.opponent()))
            .or_else(|| grid.is_empty(Position::Center).then_some(Position::Center))
            .or_else(|| grid.empty_positions().first().copied())
    }
}

#[async_trait::async_trait]
impl Player<TicTacToe> for SimpleAI {
    async fn choose_move(&mut self, grid: &Grid, mark: Mark) -> Result<Coord, PlayerError> {
        debug!(ai = %self.name, "AI making move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let position = Self::pick(grid, mark)
            .ok_or_else(|| PlayerError::new("No valid moves available"))?;
        debug!(ai = %self.name, %position, "AI chose position");
        Ok(position.coord())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
