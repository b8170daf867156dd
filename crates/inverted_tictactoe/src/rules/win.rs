//! Win detection logic for tic-tac-toe.

use super::super::{Grid, Mark, Position, Square};
use tracing::instrument;

/// The eight lines of three.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the grid.
///
/// Returns `Some(mark)` if the mark has three in a row,
/// `None` otherwise.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| match grid.get(a) {
        Square::Occupied(mark) if grid.get(b) == grid.get(a) && grid.get(c) == grid.get(a) => {
            Some(mark)
        }
        _ => None,
    })
}

/// Returns an empty position that would complete a line for `mark`.
#[instrument(skip(grid))]
pub fn winning_move(grid: &Grid, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| grid.get(**pos) == Square::Occupied(mark))
            .count();
        let mut empty = line.iter().copied().filter(|pos| grid.is_empty(*pos));
        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(marks: &[(Position, Mark)]) -> Grid {
        let mut grid = Grid::new();
        for (pos, mark) in marks {
            grid.set(*pos, Square::Occupied(*mark));
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(check_winner(&Grid::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let grid = grid(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&grid), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let grid = grid(&[
            (Position::TopRight, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomLeft, Mark::O),
        ]);
        assert_eq!(check_winner(&grid), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let grid = grid(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_winning_move_found() {
        let grid = grid(&[
            (Position::MiddleLeft, Mark::O),
            (Position::MiddleRight, Mark::O),
        ]);
        assert_eq!(winning_move(&grid, Mark::O), Some(Position::Center));
        assert_eq!(winning_move(&grid, Mark::X), None);
    }

    #[test]
    fn test_winning_move_ignores_blocked_line() {
        let grid = grid(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::O),
        ]);
        assert_eq!(winning_move(&grid, Mark::X), None);
    }
}
