//! Player that replays a fixed list of moves.

use inverted_core::{Board, Player, PlayerError};
use std::collections::VecDeque;
use tracing::debug;

/// Plays queued moves in order, for any board.
///
/// Fails once the queue runs dry. Rejected moves are dropped, so the next
/// queued move is tried on a re-prompt.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer<M> {
    name: String,
    moves: VecDeque<M>,
}

impl<M> ScriptedPlayer<M> {
    /// Creates a scripted player.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = M>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }
}

impl<M: std::str::FromStr> ScriptedPlayer<M> {
    /// Parses a whitespace-separated move list such as `0,0 1,1`.
    pub fn parse(name: impl Into<String>, script: &str) -> Result<Self, M::Err> {
        let moves = script
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<M>, _>>()?;
        Ok(Self::new(name, moves))
    }
}

#[async_trait::async_trait]
impl<B, M> Player<B> for ScriptedPlayer<M>
where
    B: Board<Move = M>,
    M: Copy + std::fmt::Display + Send + Sync + 'static,
{
    async fn choose_move(
        &mut self,
        _state: &B::State,
        mark: B::Mark,
    ) -> Result<B::Move, PlayerError> {
        let mv = self
            .moves
            .pop_front()
            .ok_or_else(|| PlayerError::new(format!("{} has no scripted moves left", self.name)))?;
        debug!(player = %self.name, %mark, %mv, "Scripted move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
