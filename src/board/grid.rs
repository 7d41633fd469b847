use crate::board::{Cell, CellState, Digit};
use crate::consts::*;
use crate::errors::{BlockParseError, LineParseError};

/// A 9×9 grid of cells in row-major order.
///
/// The grid itself is rule-agnostic storage. It knows which cells are free,
/// placed or walls, but not whether a placement is legal; that is the job of
/// a [`Rule`](crate::rules::Rule). Grids are cheap to clone and the solver
/// relies on that: every exploration branch of the uniqueness verifier owns
/// its own copy.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid([CellState; N_CELLS as usize]);

impl Grid {
    /// Creates a grid with all cells empty.
    pub fn new() -> Self {
        Grid([CellState::Empty; N_CELLS as usize])
    }

    /// The state of the given cell.
    #[inline]
    pub fn state(&self, cell: Cell) -> CellState {
        self.0[cell.index() as usize]
    }

    /// Overwrites the state of the given cell.
    #[inline]
    pub fn set_state(&mut self, cell: Cell, state: CellState) {
        self.0[cell.index() as usize] = state;
    }

    /// The digit stored at `cell`, wall digits included.
    #[inline]
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.state(cell).digit()
    }

    /// The digit stored at `cell`, if the cell is a regular (non-wall) cell.
    #[inline]
    pub fn placed_digit(&self, cell: Cell) -> Option<Digit> {
        self.state(cell).placed_digit()
    }

    /// True iff `cell` holds neither a digit nor a wall.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.state(cell).is_free()
    }

    /// The first free cell in row-major order.
    pub fn first_free(&self) -> Option<Cell> {
        Cell::all().find(|&cell| self.is_free(cell))
    }

    /// The first free cell strictly after `cell` in row-major order.
    pub fn next_free_after(&self, cell: Cell) -> Option<Cell> {
        let mut next = cell.next();
        while let Some(cell) = next {
            if self.is_free(cell) {
                return Some(cell);
            }
            next = cell.next();
        }
        None
    }

    /// Iterator over all free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.is_free(cell))
    }

    /// Number of free cells.
    pub fn n_free(&self) -> usize {
        self.free_cells().count()
    }

    /// True iff no free cell remains.
    pub fn is_filled(&self) -> bool {
        self.first_free().is_none()
    }

    pub(crate) fn parse_line(s: &str, walls: Walls) -> Result<Grid, LineParseError> {
        let mut grid = Grid::new();
        let mut n_cells = 0u8;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if n_cells == N_CELLS {
                return Err(LineParseError::TooManyCells);
            }
            let state = state_from_char(ch, walls)
                .ok_or(LineParseError::InvalidEntry { cell: n_cells, ch })?;
            grid.set_state(Cell::from_index(n_cells), state);
            n_cells += 1;
        }
        if n_cells < N_CELLS {
            return Err(LineParseError::NotEnoughCells(n_cells));
        }
        Ok(grid)
    }

    pub(crate) fn parse_block(s: &str, walls: Walls) -> Result<Grid, BlockParseError> {
        let mut grid = Grid::new();
        let mut n_rows = 0u8;
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || is_separator_line(line) {
                continue;
            }
            if n_rows == GRID_WIDTH {
                return Err(BlockParseError::TooManyRows);
            }
            let cells = line.chars().filter(|&ch| ch != '|' && !ch.is_whitespace());
            let mut n_cols = 0u8;
            for ch in cells {
                if n_cols == GRID_WIDTH {
                    return Err(BlockParseError::InvalidLineLength(n_rows));
                }
                let cell = Cell::from_row_col(n_rows, n_cols);
                let state = state_from_char(ch, walls)
                    .ok_or(BlockParseError::InvalidEntry { cell: cell.index(), ch })?;
                grid.set_state(cell, state);
                n_cols += 1;
            }
            if n_cols < GRID_WIDTH {
                return Err(BlockParseError::InvalidLineLength(n_rows));
            }
            n_rows += 1;
        }
        if n_rows < GRID_WIDTH {
            return Err(BlockParseError::NotEnoughRows(n_rows));
        }
        Ok(grid)
    }

    pub(crate) fn to_line_string(&self) -> String {
        Cell::all().map(|cell| char_from_state(self.state(cell))).collect()
    }

    /// Renders the grid as block text. `banded` groups rows into 3-row bands
    /// the way sudoku grids are usually printed; str8ts grids separate every
    /// row uniformly instead.
    pub(crate) fn format_block(&self, f: &mut std::fmt::Formatter<'_>, banded: bool) -> std::fmt::Result {
        let heavy = "=====================================";
        let light = "-------------------------------------";
        writeln!(f, "{}", heavy)?;
        for row in 0..GRID_WIDTH {
            write!(f, "|")?;
            for col in 0..GRID_WIDTH {
                match self.state(Cell::from_row_col(row, col)) {
                    CellState::Empty => write!(f, " _ ")?,
                    CellState::Digit(digit) => write!(f, " {} ", digit)?,
                    CellState::Wall(None) => write!(f, "###")?,
                    CellState::Wall(Some(digit)) => write!(f, "#{}#", digit)?,
                }
                write!(f, "|")?;
            }
            writeln!(f)?;
            if banded && row % BLOCK_WIDTH == BLOCK_WIDTH - 1 {
                writeln!(f, "{}", heavy)?;
            } else {
                writeln!(f, "{}", light)?;
            }
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

/// Whether a parser accepts wall characters (`#` and `a..=i`).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Walls {
    Forbidden,
    Allowed,
}

fn state_from_char(ch: char, walls: Walls) -> Option<CellState> {
    match ch {
        '.' | '_' | '0' => Some(CellState::Empty),
        '1'..='9' => Some(CellState::Digit(Digit::new(ch as u8 - b'0'))),
        '#' if walls == Walls::Allowed => Some(CellState::Wall(None)),
        'a'..='i' if walls == Walls::Allowed => {
            Some(CellState::Wall(Some(Digit::new(ch as u8 - b'a' + 1))))
        }
        _ => None,
    }
}

fn char_from_state(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Digit(digit) => (b'0' + digit.get()) as char,
        CellState::Wall(None) => '#',
        CellState::Wall(Some(digit)) => (b'a' + digit.get() - 1) as char,
    }
}

fn is_separator_line(line: &str) -> bool {
    line.chars().all(|ch| "-=+| \t".contains(ch))
}
