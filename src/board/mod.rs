//! Types for cells, digits and the grid itself
mod cell_state;
mod digit;
mod grid;
mod position;

pub(crate) use self::grid::Walls;

pub use self::{cell_state::CellState, digit::Digit, grid::Grid, position::Cell};
