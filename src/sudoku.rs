use std::fmt;

use crate::board::{Cell, CellState, Digit, Grid, Walls};
use crate::errors::{BlockParseError, EntryError, LineParseError};
use crate::rules::{BlockRule, Rule};
use crate::solver;
use crate::solver::Solution;

/// A classic sudoku: digits 1..=9 at most once per row, column and 3×3 block.
///
/// The grid of a `Sudoku` never contains walls; both parsers reject the wall
/// characters of the str8ts formats.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Sudoku {
    grid: Grid,
}

impl Sudoku {
    /// Creates an empty sudoku.
    pub fn new() -> Self {
        Sudoku { grid: Grid::new() }
    }

    /// Read access to the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Creates a sudoku from its 81-character line representation.
    ///
    /// Accepted cell characters are `1..=9` for placed digits and `.`, `_`
    /// or `0` for empty cells; whitespace is ignored.
    pub fn from_str_line(s: &str) -> Result<Self, LineParseError> {
        Grid::parse_line(s, Walls::Forbidden).map(|grid| Sudoku { grid })
    }

    /// Creates a sudoku from a block of 9 rows. `|` and whitespace padding
    /// are ignored, as are pure separator lines of `-`, `=` and `+`.
    pub fn from_str_block(s: &str) -> Result<Self, BlockParseError> {
        Grid::parse_block(s, Walls::Forbidden).map(|grid| Sudoku { grid })
    }

    /// The 81-character line representation, `.` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.grid.to_line_string()
    }

    /// True iff `digit` may be placed at `cell` given the current entries.
    pub fn is_valid(&self, cell: Cell, digit: Digit) -> bool {
        BlockRule.is_valid(&self.grid, cell, digit)
    }

    /// Places `digit` at `cell` after checking it against the rules.
    ///
    /// A conflicting digit is rejected without touching the board. A valid
    /// digit overwrites whatever the cell held before, like the interactive
    /// entry loop of the original solvers.
    pub fn place(&mut self, cell: Cell, digit: Digit) -> Result<(), EntryError> {
        if !self.is_valid(cell, digit) {
            return Err(EntryError::Conflict { cell, digit });
        }
        self.grid.set_state(cell, CellState::Digit(digit));
        Ok(())
    }

    /// Finds the first solution in tie-break order (ascending cells,
    /// ascending digits). Returns `None` for unsolvable boards.
    pub fn solve_one(&self) -> Option<Solution<Sudoku>> {
        let mut grid = self.grid.clone();
        let outcome = solver::solve(&mut grid, &BlockRule);
        if outcome.solved {
            Some(Solution::new(Sudoku { grid }, outcome.attempts))
        } else {
            None
        }
    }

    /// Tries to solve the sudoku in place. Returns true if a solution was
    /// found. This is a convenience interface over [`Sudoku::solve_one`].
    pub fn solve(&mut self) -> bool {
        match self.solve_one() {
            Some(solution) => {
                *self = solution.into_puzzle();
                true
            }
            None => false,
        }
    }

    /// Whether this board has exactly one completion.
    ///
    /// Probes every free cell with every digit differing from a reference
    /// solution; see the crate documentation for the cost caveat.
    pub fn has_unique_solution(&self) -> bool {
        solver::has_unique_solution(&self.grid, &BlockRule)
    }

    /// Whether the sudoku is completely and consistently filled.
    pub fn is_solved(&self) -> bool {
        self.grid.is_filled() && solver::is_consistent(&self.grid, &BlockRule)
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.format_block(f, true)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sudoku {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_str_line())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sudoku {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let line = <String as serde::Deserialize>::deserialize(deserializer)?;
        Sudoku::from_str_line(&line).map_err(serde::de::Error::custom)
    }
}
