//! The validity rules a grid is played under.
//!
//! The solver itself is rule-agnostic; it asks a [`Rule`] whether a candidate
//! digit may go into a cell given the current (possibly partial) grid state.
//! Two rule sets ship with the crate: [`BlockRule`] for classic sudoku and
//! [`RunRule`] for str8ts. Both share row and column exclusivity and differ
//! only in their third constraint, so they are modeled as implementations of
//! one trait rather than as two engines.

use crate::board::{Cell, Digit, Grid};
use crate::consts::*;

/// A validity predicate for placing a digit into a cell.
///
/// Implementations must be pure: `is_valid` never mutates the grid and its
/// result depends only on the grid state passed in. The solver calls it on
/// free cells; entry validation calls it on occupied cells as well, with the
/// cell's current digit excluded from the row and column scans.
pub trait Rule {
    /// True iff placing `digit` at `cell` violates none of the active
    /// constraints, evaluated against the current state of `grid`.
    fn is_valid(&self, grid: &Grid, cell: Cell, digit: Digit) -> bool;
}

/// Classic sudoku rules: a digit at most once per row, column and 3×3 block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockRule;

impl Rule for BlockRule {
    fn is_valid(&self, grid: &Grid, cell: Cell, digit: Digit) -> bool {
        if !row_and_col_admit(grid, cell, digit) {
            return false;
        }

        // scan the whole 3x3 block, the candidate's own cell included
        let corner = cell.block_corner();
        for row in corner.row()..corner.row() + BLOCK_WIDTH {
            for col in corner.col()..corner.col() + BLOCK_WIDTH {
                if grid.digit(Cell::from_row_col(row, col)) == Some(digit) {
                    return false;
                }
            }
        }
        true
    }
}

/// Str8ts rules: a digit at most once per row and column (wall digits
/// included), and every maximal run between walls must stay completable
/// into consecutive digits.
///
/// The run condition is checked as a window: with `count` cells in the run
/// and `min`/`max` taken over the candidate and the digits already placed in
/// the run, the placement fails iff `max - min > count - 1`. A run of length
/// 1 therefore admits any digit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunRule;

impl Rule for RunRule {
    fn is_valid(&self, grid: &Grid, cell: Cell, digit: Digit) -> bool {
        // a wall never takes a digit; this also keeps the run walk anchored
        // on a non-wall origin
        !grid.state(cell).is_wall()
            && row_and_col_admit(grid, cell, digit)
            && run_admits(grid, cell.col(), |col| Cell::from_row_col(cell.row(), col), digit)
            && run_admits(grid, cell.row(), |row| Cell::from_row_col(row, cell.col()), digit)
    }
}

// Row and column exclusivity shared by both rules. Compares stored digits of
// all other cells; a wall carrying a digit excludes that digit as well.
fn row_and_col_admit(grid: &Grid, cell: Cell, digit: Digit) -> bool {
    for col in 0..GRID_WIDTH {
        let other = Cell::from_row_col(cell.row(), col);
        if other != cell && grid.digit(other) == Some(digit) {
            return false;
        }
    }
    for row in 0..GRID_WIDTH {
        let other = Cell::from_row_col(row, cell.col());
        if other != cell && grid.digit(other) == Some(digit) {
            return false;
        }
    }
    true
}

// The run constraint along one axis. `at` maps a coordinate on that axis to
// the cell, `origin` is the candidate's coordinate. Walks back to the start
// of the run, then forward over it, tracking min/max of the candidate plus
// all digits already placed in the run (the origin's own stored digit, if
// any, is ignored in favor of the candidate).
fn run_admits(grid: &Grid, origin: u8, at: impl Fn(u8) -> Cell, digit: Digit) -> bool {
    let mut start = origin;
    while start > 0 && !grid.state(at(start - 1)).is_wall() {
        start -= 1;
    }

    let mut min = digit.get();
    let mut max = digit.get();
    let mut count = 0u8;
    let mut pos = start;
    while pos < GRID_WIDTH && !grid.state(at(pos)).is_wall() {
        count += 1;
        if pos != origin {
            if let Some(placed) = grid.placed_digit(at(pos)) {
                min = min.min(placed.get());
                max = max.max(placed.get());
            }
        }
        pos += 1;
    }
    // count >= 1: is_valid rejects wall origins before walking the run
    max - min <= count - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState;

    fn digit(d: u8) -> Digit {
        Digit::new(d)
    }

    fn place(grid: &mut Grid, row: u8, col: u8, d: u8) {
        grid.set_state(Cell::from_row_col(row, col), CellState::Digit(digit(d)));
    }

    fn wall(grid: &mut Grid, row: u8, col: u8, d: Option<u8>) {
        grid.set_state(Cell::from_row_col(row, col), CellState::Wall(d.map(digit)));
    }

    #[test]
    fn block_rule_rejects_row_col_block_duplicates() {
        let mut grid = Grid::new();
        place(&mut grid, 0, 0, 5);

        // same row, same column, same block
        assert!(!BlockRule.is_valid(&grid, Cell::from_row_col(0, 8), digit(5)));
        assert!(!BlockRule.is_valid(&grid, Cell::from_row_col(8, 0), digit(5)));
        assert!(!BlockRule.is_valid(&grid, Cell::from_row_col(2, 2), digit(5)));
        // unrelated cell and unrelated digit
        assert!(BlockRule.is_valid(&grid, Cell::from_row_col(4, 4), digit(5)));
        assert!(BlockRule.is_valid(&grid, Cell::from_row_col(0, 8), digit(6)));
    }

    #[test]
    fn block_rule_ignores_own_cell_in_row_and_col() {
        let mut grid = Grid::new();
        place(&mut grid, 0, 0, 5);
        // a different digit may replace the cell's current one at entry time
        assert!(BlockRule.is_valid(&grid, Cell::from_row_col(0, 0), digit(6)));
        // the identical digit trips over the block scan, like the row-major original
        assert!(!BlockRule.is_valid(&grid, Cell::from_row_col(0, 0), digit(5)));
    }

    #[test]
    fn is_valid_does_not_mutate() {
        let mut grid = Grid::new();
        place(&mut grid, 3, 3, 7);
        wall(&mut grid, 3, 4, Some(2));
        let before = grid.clone();
        for cell in Cell::all() {
            for d in Digit::all() {
                BlockRule.is_valid(&grid, cell, d);
                RunRule.is_valid(&grid, cell, d);
            }
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn run_rule_window_scenario() {
        // row 0 walled at col 4, leaving a run over cols 0..=3
        let mut grid = Grid::new();
        wall(&mut grid, 0, 4, None);
        place(&mut grid, 0, 0, 1);
        place(&mut grid, 0, 1, 2);
        place(&mut grid, 0, 2, 3);

        // 9 would stretch the window to 8 > 3
        assert!(!RunRule.is_valid(&grid, Cell::from_row_col(0, 3), digit(9)));
        // 5 still exceeds the window: max-min = 4 > 3
        assert!(!RunRule.is_valid(&grid, Cell::from_row_col(0, 3), digit(5)));
        assert!(RunRule.is_valid(&grid, Cell::from_row_col(0, 3), digit(4)));
    }

    #[test]
    fn run_rule_window_on_vertical_runs() {
        let mut grid = Grid::new();
        wall(&mut grid, 3, 0, None);
        place(&mut grid, 0, 0, 4);
        // column run over rows 0..=2, window of width 3 around 4
        assert!(!RunRule.is_valid(&grid, Cell::from_row_col(1, 0), digit(8)));
        assert!(RunRule.is_valid(&grid, Cell::from_row_col(1, 0), digit(6)));
    }

    #[test]
    fn run_of_length_one_admits_any_digit() {
        let mut grid = Grid::new();
        wall(&mut grid, 0, 1, None);
        wall(&mut grid, 1, 0, None);
        // (0,0) is isolated in both directions
        for d in Digit::all() {
            assert!(RunRule.is_valid(&grid, Cell::from_row_col(0, 0), d));
        }
    }

    #[test]
    fn run_rule_rejects_wall_cells_outright() {
        let mut grid = Grid::new();
        // a wall at the grid corner has no run to walk at all
        wall(&mut grid, 0, 0, None);
        wall(&mut grid, 4, 4, Some(3));
        for d in Digit::all() {
            assert!(!RunRule.is_valid(&grid, Cell::from_row_col(0, 0), d));
            assert!(!RunRule.is_valid(&grid, Cell::from_row_col(4, 4), d));
        }
    }

    #[test]
    fn wall_digit_excludes_value_from_row_and_col() {
        let mut grid = Grid::new();
        wall(&mut grid, 0, 4, Some(7));
        assert!(!RunRule.is_valid(&grid, Cell::from_row_col(0, 0), digit(7)));
        assert!(!RunRule.is_valid(&grid, Cell::from_row_col(8, 4), digit(7)));
        assert!(RunRule.is_valid(&grid, Cell::from_row_col(8, 5), digit(7)));
    }

    #[test]
    fn run_rule_ignores_wall_digits_inside_window_math() {
        // wall digit 9 adjacent to a run must not widen the run's window
        let mut grid = Grid::new();
        wall(&mut grid, 0, 2, Some(9));
        place(&mut grid, 0, 0, 1);
        // run over cols 0..=1; candidate 2 fits next to the 1
        assert!(RunRule.is_valid(&grid, Cell::from_row_col(0, 1), digit(2)));
    }
}
