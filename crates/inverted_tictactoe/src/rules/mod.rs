//! Game rules for tic-tac-toe.
//!
//! Pure functions judging a grid. They are kept apart from grid storage so
//! the board capability can compose them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::check_winner;

use super::{Grid, Mark};
use inverted_core::Outcome;
use tracing::instrument;

/// Judges a grid: a line of three wins, a full grid without one draws.
#[instrument(skip(grid))]
pub fn outcome(grid: &Grid) -> Outcome<Mark> {
    if let Some(mark) = check_winner(grid) {
        Outcome::Won(mark)
    } else if is_draw(grid) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
