//! Rejections raised by the tic-tac-toe board.

use super::{Coord, Position};
use derive_more::{Display, Error};

/// A move the board refuses to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The coordinates are off the 3x3 board.
    #[display("Coordinate {} is off the board", _0)]
    OutOfRange(Coord),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}

/// Text that is not a `row,col` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Expected row,col but got {:?}", input)]
pub struct CoordParseError {
    /// The rejected input.
    pub input: String,
}

impl CoordParseError {
    /// Creates a parse error for `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
