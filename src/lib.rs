#![warn(missing_docs)]
//! The ninegrid library
//!
//! ## Overview
//!
//! ninegrid solves 9×9 number puzzles by naive backtracking. One recursive
//! engine serves two rule sets: classic sudoku (row, column and 3×3-block
//! exclusivity) and str8ts (row and column exclusivity plus the "straight"
//! condition on every run of cells between walls). Next to solving, the
//! library can verify that a board has exactly one solution and derives a
//! rough difficulty score from the number of placements the search tried.
//!
//! The search visits free cells in row-major order and candidates in
//! ascending order, so the solution found first is deterministic.
//!
//! ## Example
//!
//! ```
//! use ninegrid::Sudoku;
//!
//! let sudoku_line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//!
//! let sudoku = Sudoku::from_str_line(sudoku_line).unwrap();
//! if let Some(solution) = sudoku.solve_one() {
//!     println!("{}", solution.puzzle());
//!     println!("difficulty: {:.2}", solution.difficulty());
//! }
//! ```
//!
//! Str8ts boards work the same way through [`Str8ts`], with `#` in the
//! string formats for bare walls and `a..=i` for walls carrying a digit:
//!
//! ```
//! use ninegrid::Str8ts;
//!
//! let board = Str8ts::from_str_block(
//!     "12#......
//!      ..#......
//!      |##b......
//!      .........
//!      .........
//!      .........
//!      .........
//!      .........
//!      .........",
//! ).unwrap();
//! assert!(board.solve_one().is_some());
//! ```
//!
//! ## Cost caveat
//!
//! [`Sudoku::has_unique_solution`] and [`Str8ts::has_unique_solution`] probe
//! every free cell with every digit that differs from a reference solution,
//! which means up to 81×8 independent solves, each worst-case exponential in
//! the number of free cells. They are diagnostic tools for board setup, not
//! hot-path operations.

pub mod board;
mod consts;
pub mod errors;
pub mod rules;
mod solver;
mod str8ts;
mod sudoku;

pub use crate::solver::Solution;
pub use crate::str8ts::Str8ts;
pub use crate::sudoku::Sudoku;
