use crate::board::Digit;

/// Contents of a single cell on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum CellState {
    /// Nothing placed yet. The search fills exactly these cells.
    Empty,
    /// A placed digit, either a clue or a tentative placement of the search.
    Digit(Digit),
    /// A wall. Walls split rows and columns into runs and are never touched
    /// by the search. A wall may carry a digit (a black cell with a number in
    /// str8ts), which excludes that digit from the wall's row and column.
    Wall(Option<Digit>),
}

impl CellState {
    /// The digit stored in this cell, wall digits included.
    ///
    /// This is the value row and column exclusivity scans compare against.
    #[inline]
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Digit(digit) | CellState::Wall(Some(digit)) => Some(digit),
            _ => None,
        }
    }

    /// The digit of a regular (non-wall) cell.
    #[inline]
    pub fn placed_digit(self) -> Option<Digit> {
        match self {
            CellState::Digit(digit) => Some(digit),
            _ => None,
        }
    }

    /// True iff the cell holds nothing and may be filled by the search.
    #[inline]
    pub fn is_free(self) -> bool {
        self == CellState::Empty
    }

    /// True iff the cell is a wall.
    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, CellState::Wall(_))
    }
}
