//! Draw detection logic for tic-tac-toe.

use super::super::{Grid, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the grid is full (all squares occupied).
#[instrument(skip(grid))]
fn is_full(grid: &Grid) -> bool {
    grid.squares().iter().all(|s| *s != Square::Empty)
}

/// A full grid with no winner is a draw.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}
