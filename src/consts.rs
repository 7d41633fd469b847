pub(crate) const GRID_WIDTH: u8 = 9;
pub(crate) const N_CELLS: u8 = GRID_WIDTH * GRID_WIDTH;
pub(crate) const BLOCK_WIDTH: u8 = 3;
