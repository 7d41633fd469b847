//! The backtracking engine shared by both puzzle variants.
//!
//! Search walks the free cells in row-major order and tries the digits 1..=9
//! ascending at each of them, backing out of a placement as soon as no digit
//! completes the remainder. Both orders are fixed; given the same starting
//! grid the engine always finds the same solution first.

use log::trace;

use crate::board::{Cell, CellState, Digit, Grid};
use crate::consts::*;
use crate::rules::Rule;

/// A solved puzzle together with the effort the search spent on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Solution<P> {
    puzzle: P,
    attempts: u32,
}

impl<P> Solution<P> {
    pub(crate) fn new(puzzle: P, attempts: u32) -> Self {
        Solution { puzzle, attempts }
    }

    /// The solved puzzle.
    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }

    /// Consumes the solution and returns the solved puzzle.
    pub fn into_puzzle(self) -> P {
        self.puzzle
    }

    /// Number of tentative placements the search made, counting every digit
    /// that was tried at a cell whether or not it survived.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The attempt count normalized by the grid size of 81 cells.
    ///
    /// A grid whose cells all go in on the first try scores below 1.0;
    /// heavily backtracked grids score far above it.
    pub fn difficulty(&self) -> f32 {
        self.attempts as f32 / f32::from(N_CELLS)
    }
}

/// Transient bookkeeping of one `solve` call. Never shared between calls, so
/// repeated solves and the uniqueness verifier stay independent.
struct SearchState {
    depth: u32,
    attempts: u32,
}

pub(crate) struct SearchOutcome {
    pub(crate) solved: bool,
    pub(crate) attempts: u32,
}

/// Tries to complete `grid` in place under `rule`.
///
/// On success the grid holds the first solution in tie-break order. On
/// failure every cell this call filled has been reverted to empty; cells
/// filled by the caller are never altered either way.
pub(crate) fn solve<R: Rule>(grid: &mut Grid, rule: &R) -> SearchOutcome {
    let mut state = SearchState { depth: 0, attempts: 0 };
    let solved = match grid.first_free() {
        // nothing left to fill
        None => true,
        Some(cell) => Digit::all().any(|digit| try_digit(grid, rule, &mut state, cell, digit)),
    };
    SearchOutcome { solved, attempts: state.attempts }
}

// One tentative placement: count it, check it, recurse behind it, and take
// it back out if the remainder cannot be completed.
fn try_digit<R: Rule>(
    grid: &mut Grid,
    rule: &R,
    state: &mut SearchState,
    cell: Cell,
    digit: Digit,
) -> bool {
    state.depth += 1;
    state.attempts += 1;

    let mut success = false;
    if rule.is_valid(grid, cell, digit) {
        grid.set_state(cell, CellState::Digit(digit));
        success = match grid.next_free_after(cell) {
            None => true,
            Some(next) => {
                Digit::all().any(|next_digit| try_digit(grid, rule, state, next, next_digit))
            }
        };
        if !success {
            grid.set_state(cell, CellState::Empty);
        }
    }

    trace!(
        "depth={} row={} col={} digit={} {}",
        state.depth,
        cell.row(),
        cell.col(),
        digit,
        if success { "kept" } else { "reverted" },
    );

    state.depth -= 1;
    success
}

/// Whether `grid` has exactly one completion under `rule`.
///
/// Solves a copy for a reference solution, then probes every free cell of
/// the original with every digit that differs from the reference and checks
/// whether any such forced grid still completes. The first alternative found
/// settles the question. An unsolvable grid reports `false`: it has no
/// unique solution because it has none at all.
///
/// This runs up to 81×8 independent solves and each of those is worst-case
/// exponential in the number of free cells. It is a diagnostic routine, not
/// something to call in a hot path.
pub(crate) fn has_unique_solution<R: Rule>(grid: &Grid, rule: &R) -> bool {
    let mut reference = grid.clone();
    if !solve(&mut reference, rule).solved {
        return false;
    }

    for cell in grid.free_cells() {
        for digit in Digit::all() {
            if reference.placed_digit(cell) == Some(digit) {
                continue;
            }
            if !rule.is_valid(grid, cell, digit) {
                continue;
            }
            let mut probe = grid.clone();
            probe.set_state(cell, CellState::Digit(digit));
            if solve(&mut probe, rule).solved {
                trace!(
                    "second solution via digit={} at row={} col={}",
                    digit,
                    cell.row(),
                    cell.col(),
                );
                return false;
            }
        }
    }
    true
}

/// Whether every placed digit of `grid` is valid against all other cells.
///
/// Checks each filled cell with itself taken out of the grid, so a complete
/// solution passes even though the rules would reject re-placing a digit
/// over itself.
pub(crate) fn is_consistent<R: Rule>(grid: &Grid, rule: &R) -> bool {
    let mut scratch = grid.clone();
    for cell in Cell::all() {
        if let Some(digit) = grid.placed_digit(cell) {
            scratch.set_state(cell, CellState::Empty);
            let ok = rule.is_valid(&scratch, cell, digit);
            scratch.set_state(cell, CellState::Digit(digit));
            if !ok {
                return false;
            }
        }
    }
    true
}
