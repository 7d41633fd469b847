//! Errors for parsing grids from strings and for rejected entries
use crate::board::{Cell, Digit};

/// Error when reading a grid from its 81-character line representation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted are `1..=9`, `.`, `_` and `0` for empty cells, and for
    /// str8ts additionally `#` and `a..=i` for walls.
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell index from `0..=80`, row-major.
        cell: u8,
        /// The offending character.
        ch: char,
    },
    /// Fewer than 81 cell characters were supplied. Contains the count.
    #[error("grid contains {0} cells instead of the required 81")]
    NotEnoughCells(u8),
    /// More than 81 cell characters were supplied.
    #[error("grid contains more than 81 cells")]
    TooManyCells,
}

/// Error when reading a grid from its block representation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum BlockParseError {
    /// Invalid cell character. Field delimiters in unexpected places also cause this.
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidEntry {
        /// Cell index from `0..=80`, row-major.
        cell: u8,
        /// The offending character.
        ch: char,
    },
    /// A content row does not contain exactly 9 cells. Contains the row index `0..=8`.
    #[error("row {0} does not contain 9 cells")]
    InvalidLineLength(u8),
    /// Input ends with fewer than 9 content rows. Contains the number of rows found.
    #[error("input contains {0} rows instead of the required 9")]
    NotEnoughRows(u8),
    /// More than 9 content rows were supplied.
    #[error("input contains more than 9 rows")]
    TooManyRows,
}

/// Error when an entry is rejected at placement time.
///
/// Both cases are recoverable: the board is left untouched and the entry
/// loop may simply continue with the next entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EntryError {
    /// The digit violates the active rule against the current board state.
    #[error("digit {} at row {}, column {} conflicts with an existing entry", .digit, .cell.row() + 1, .cell.col() + 1)]
    Conflict {
        /// The rejected cell.
        cell: Cell,
        /// The rejected digit.
        digit: Digit,
    },
    /// The target cell is a wall; walls never receive digits through entries.
    #[error("row {}, column {} is a wall", .cell.row() + 1, .cell.col() + 1)]
    WallCell {
        /// The wall cell.
        cell: Cell,
    },
}
