//! The tic-tac-toe board capability.

use super::{Coord, Grid, InvalidMove, Mark, Square, rules};
use inverted_core::{Board, Outcome};
use tracing::{instrument, trace};

/// Tic-tac-toe rules as a stateless board capability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicTacToe;

impl TicTacToe {
    /// Creates the board capability.
    pub fn new() -> Self {
        Self
    }
}

impl Board for TicTacToe {
    type State = Grid;
    type Move = Coord;
    type Mark = Mark;
    type Error = InvalidMove;

    fn initial_state(&self) -> Grid {
        Grid::new()
    }

    #[instrument(skip(self, state))]
    fn apply(&self, state: &Grid, mv: Coord, mark: Mark) -> Result<Grid, InvalidMove> {
        let position = mv.position().ok_or(InvalidMove::OutOfRange(mv))?;

        if rules::outcome(state).is_terminal() {
            return Err(InvalidMove::GameOver);
        }

        if !state.is_empty(position) {
            return Err(InvalidMove::Occupied(position));
        }

        let mut next = state.clone();
        next.set(position, Square::Occupied(mark));
        trace!(%position, %mark, "Mark placed");
        Ok(next)
    }

    fn outcome(&self, state: &Grid) -> Outcome<Mark> {
        rules::outcome(state)
    }
}
