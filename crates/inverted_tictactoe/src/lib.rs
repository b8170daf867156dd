//! Pure tic-tac-toe rules behind the `inverted_core` board capability.
//!
//! Nothing here knows about turn orchestration or players. [`TicTacToe`]
//! implements [`inverted_core::Board`] and any orchestrator can drive it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
pub mod rules;
mod types;

pub use board::TicTacToe;
pub use error::{CoordParseError, InvalidMove};
pub use position::{Coord, Position};
pub use types::{Grid, Mark, Square};
