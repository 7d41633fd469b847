//! Interactive entry loop around the solver library.
//!
//! Reads `(row, column, number)` triples from stdin, 1-based, one per line;
//! a row of 0 (or less) ends the entry phase. For str8ts a number of 0 or
//! less places a wall with magnitude `|number|` as its optional wall digit.
//! Bad entries are reported and skipped; the loop keeps going.

use std::io::{self, BufRead};

use clap::{Parser, ValueEnum};

use ninegrid::board::{Cell, Digit};
use ninegrid::{Str8ts, Sudoku};

#[derive(Parser)]
#[command(version, about = "Interactive solver for sudoku and str8ts grids")]
struct Args {
    /// The rule set the grid is played under
    #[arg(value_enum, default_value_t = Variant::Sudoku)]
    variant: Variant,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum Variant {
    Sudoku,
    Str8ts,
}

/// One parsed input triple, still 1-based and unvalidated against the board.
struct RawEntry {
    row: i32,
    col: i32,
    number: i32,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.variant {
        Variant::Sudoku => run_sudoku(),
        Variant::Str8ts => run_str8ts(),
    }
}

fn run_sudoku() -> io::Result<()> {
    let mut sudoku = Sudoku::new();
    println!("Please enter row, column and number (1..9, space separated), 0 to stop");
    for_each_entry(|entry| {
        let (cell, number) = match check_coordinates(&entry) {
            Some(ok) => ok,
            None => return,
        };
        let digit = match to_digit(number) {
            Some(digit) => digit,
            None => {
                println!(" Error: Invalid entry. Number must be in [1..9]");
                return;
            }
        };
        match sudoku.place(cell, digit) {
            Ok(()) => println!("-> ok"),
            Err(err) => println!(" Error: {}", err),
        }
    })?;

    println!("Here the sudoku setup:");
    println!("{}", sudoku);
    report(sudoku)
}

fn run_str8ts() -> io::Result<()> {
    let mut str8ts = Str8ts::new();
    println!("Please enter row, column and number (1..9, 0 or negative for a wall, space separated), 0 to stop");
    for_each_entry(|entry| {
        let (cell, number) = match check_coordinates(&entry) {
            Some(ok) => ok,
            None => return,
        };
        if number <= 0 {
            // wall, optionally carrying the digit |number|
            if number < -9 {
                println!(" Error: Invalid entry. Wall number must be in [-9..0]");
                return;
            }
            str8ts.place_wall(cell, to_digit(-number));
            println!("-> ok");
            return;
        }
        let digit = match to_digit(number) {
            Some(digit) => digit,
            None => {
                println!(" Error: Invalid entry. Number must be in [-9..9]");
                return;
            }
        };
        match str8ts.place(cell, digit) {
            Ok(()) => println!("-> ok"),
            Err(err) => println!(" Error: {}", err),
        }
    })?;

    println!("Here the str8ts setup:");
    println!("{}", str8ts);
    report(str8ts)
}

// The solve/report tail is identical for both variants once the entry phase
// is done, so it is written once against a small adapter trait.
trait Puzzle: std::fmt::Display {
    /// Solves the puzzle in place, handing back the solution's difficulty.
    fn solve_difficulty(&mut self) -> Option<f32>;
    fn has_unique_solution(&self) -> bool;
}

impl Puzzle for Sudoku {
    fn solve_difficulty(&mut self) -> Option<f32> {
        self.solve_one().map(|solution| {
            let difficulty = solution.difficulty();
            *self = solution.into_puzzle();
            difficulty
        })
    }
    fn has_unique_solution(&self) -> bool {
        Sudoku::has_unique_solution(self)
    }
}

impl Puzzle for Str8ts {
    fn solve_difficulty(&mut self) -> Option<f32> {
        self.solve_one().map(|solution| {
            let difficulty = solution.difficulty();
            *self = solution.into_puzzle();
            difficulty
        })
    }
    fn has_unique_solution(&self) -> bool {
        Str8ts::has_unique_solution(self)
    }
}

fn report<P: Puzzle + Clone>(mut puzzle: P) -> io::Result<()> {
    let setup = puzzle.clone();
    match puzzle.solve_difficulty() {
        Some(difficulty) => {
            println!("Result: (difficulty={:.2})", difficulty);
            println!("{}", puzzle);
            if setup.has_unique_solution() {
                println!("This is the only solution");
            } else {
                println!("This is not the only solution");
            }
        }
        None => println!("This grid is not solvable"),
    }
    Ok(())
}

/// Drives `handle` with every well-formed triple until end of input or a
/// non-positive row. Malformed lines are reported and skipped.
fn for_each_entry(mut handle: impl FnMut(RawEntry)) -> io::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut numbers = line.split_whitespace().map(str::parse::<i32>);
        let row = match numbers.next() {
            Some(Ok(row)) => row,
            _ => {
                println!(" Error: Invalid entry. Expected: row column number");
                continue;
            }
        };
        if row <= 0 {
            break;
        }
        match (numbers.next(), numbers.next()) {
            (Some(Ok(col)), Some(Ok(number))) => handle(RawEntry { row, col, number }),
            _ => println!(" Error: Invalid entry. Expected: row column number"),
        }
    }
    Ok(())
}

/// `1..=9` as a digit, anything else (0 included) as `None`.
fn to_digit(number: i32) -> Option<Digit> {
    if (1..=9).contains(&number) {
        Some(Digit::new(number as u8))
    } else {
        None
    }
}

/// Validates the 1-based coordinates of an entry and converts them to a cell.
fn check_coordinates(entry: &RawEntry) -> Option<(Cell, i32)> {
    let row_col = |value: i32| -> Option<u8> {
        if (1..=9).contains(&value) {
            Some(value as u8 - 1)
        } else {
            None
        }
    };
    match (row_col(entry.row), row_col(entry.col)) {
        (Some(row), Some(col)) => Some((Cell::from_row_col(row, col), entry.number)),
        _ => {
            println!(" Error: Invalid entry. Row and column must be in [1..9]");
            None
        }
    }
}
