//! Game outcome as judged by a board.

use serde::{Deserialize, Serialize};

/// Result of evaluating a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<M> {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(M),
    /// Game ended with no winner.
    Draw,
}

impl<M: Copy> Outcome<M> {
    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<M> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl<M: std::fmt::Display> std::fmt::Display for Outcome<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
