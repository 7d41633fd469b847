use crate::consts::*;

/// The position of a cell on the grid, numbered `0..=80` in row-major order.
///
/// Row-major means `position = row * 9 + col`; cell 0 is the top left
/// corner, cell 8 the top right, cell 80 the bottom right.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a `Cell` from its row-major index.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..=80`.
    pub fn from_index(index: u8) -> Self {
        Self::from_index_checked(index).unwrap()
    }

    /// Constructs a `Cell` from its row-major index.
    /// Returns `None`, if the index is not in the range of `0..=80`.
    pub fn from_index_checked(index: u8) -> Option<Self> {
        if index < N_CELLS {
            Some(Cell(index))
        } else {
            None
        }
    }

    /// Constructs a `Cell` from row and column indices.
    ///
    /// # Panic
    /// Panics, if row or column is not in the range of `0..=8`.
    pub fn from_row_col(row: u8, col: u8) -> Self {
        Self::from_row_col_checked(row, col).unwrap()
    }

    /// Constructs a `Cell` from row and column indices.
    /// Returns `None`, if row or column is not in the range of `0..=8`.
    pub fn from_row_col_checked(row: u8, col: u8) -> Option<Self> {
        if row < GRID_WIDTH && col < GRID_WIDTH {
            Some(Cell(row * GRID_WIDTH + col))
        } else {
            None
        }
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_CELLS).map(Cell)
    }

    /// Row index from `0..=8`, topmost row is 0.
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / GRID_WIDTH
    }

    /// Column index from `0..=8`, leftmost column is 0.
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % GRID_WIDTH
    }

    /// The row-major index from `0..=80`.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// The cell following this one in row-major order, `None` for the last cell.
    pub(crate) fn next(self) -> Option<Self> {
        Self::from_index_checked(self.0 + 1)
    }

    /// Top left cell of the 3×3 block containing this cell.
    pub(crate) fn block_corner(self) -> Self {
        let row = self.row() / BLOCK_WIDTH * BLOCK_WIDTH;
        let col = self.col() / BLOCK_WIDTH * BLOCK_WIDTH;
        Cell(row * GRID_WIDTH + col)
    }
}
