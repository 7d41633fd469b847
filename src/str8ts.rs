use std::fmt;

use crate::board::{Cell, CellState, Digit, Grid, Walls};
use crate::errors::{BlockParseError, EntryError, LineParseError};
use crate::rules::{Rule, RunRule};
use crate::solver;
use crate::solver::Solution;

/// A str8ts board: digits 1..=9 at most once per row and column, and every
/// run of cells between walls must be completable into consecutive digits.
///
/// Walls are part of the board setup, not of the solving process. A wall may
/// carry a digit, which then also excludes that digit from the wall's row
/// and column.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Str8ts {
    grid: Grid,
}

impl Str8ts {
    /// Creates an empty board without walls.
    pub fn new() -> Self {
        Str8ts { grid: Grid::new() }
    }

    /// Read access to the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Creates a board from its 81-character line representation.
    ///
    /// Accepted cell characters are `1..=9` for placed digits, `.`, `_` or
    /// `0` for empty cells, `#` for a bare wall and `a..=i` for a wall
    /// carrying the digit 1..=9; whitespace is ignored.
    pub fn from_str_line(s: &str) -> Result<Self, LineParseError> {
        Grid::parse_line(s, Walls::Allowed).map(|grid| Str8ts { grid })
    }

    /// Creates a board from a block of 9 rows, with the same cell characters
    /// as [`Str8ts::from_str_line`]. `|` and whitespace padding are ignored,
    /// as are pure separator lines of `-`, `=` and `+`.
    pub fn from_str_block(s: &str) -> Result<Self, BlockParseError> {
        Grid::parse_block(s, Walls::Allowed).map(|grid| Str8ts { grid })
    }

    /// The 81-character line representation.
    pub fn to_str_line(&self) -> String {
        self.grid.to_line_string()
    }

    /// True iff `digit` may be placed at `cell` given the current entries.
    pub fn is_valid(&self, cell: Cell, digit: Digit) -> bool {
        RunRule.is_valid(&self.grid, cell, digit)
    }

    /// Places `digit` at `cell` after checking it against the rules.
    ///
    /// A digit aimed at a wall cell or conflicting with existing entries is
    /// rejected without touching the board. A valid digit overwrites
    /// whatever the cell held before.
    pub fn place(&mut self, cell: Cell, digit: Digit) -> Result<(), EntryError> {
        if self.grid.state(cell).is_wall() {
            return Err(EntryError::WallCell { cell });
        }
        if !self.is_valid(cell, digit) {
            return Err(EntryError::Conflict { cell, digit });
        }
        self.grid.set_state(cell, CellState::Digit(digit));
        Ok(())
    }

    /// Turns `cell` into a wall, optionally carrying a digit.
    ///
    /// Walls are board setup and placed unconditionally, replacing whatever
    /// the cell held before.
    pub fn place_wall(&mut self, cell: Cell, digit: Option<Digit>) {
        self.grid.set_state(cell, CellState::Wall(digit));
    }

    /// Finds the first solution in tie-break order (ascending cells,
    /// ascending digits). Returns `None` for unsolvable boards.
    pub fn solve_one(&self) -> Option<Solution<Str8ts>> {
        let mut grid = self.grid.clone();
        let outcome = solver::solve(&mut grid, &RunRule);
        if outcome.solved {
            Some(Solution::new(Str8ts { grid }, outcome.attempts))
        } else {
            None
        }
    }

    /// Tries to solve the board in place. Returns true if a solution was
    /// found. This is a convenience interface over [`Str8ts::solve_one`].
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
        solver::has_unique_solution(&self.grid, &RunRule)
    }

    /// Whether the board is completely and consistently filled.
    pub fn is_solved(&self) -> bool {
        self.grid.is_filled() && solver::is_consistent(&self.grid, &RunRule)
    }
}

impl fmt::Display for Str8ts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.format_block(f, false)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Str8ts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_str_line())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Str8ts {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let line = <String as serde::Deserialize>::deserialize(deserializer)?;
        Str8ts::from_str_line(&line).map_err(serde::de::Error::custom)
    }
}
