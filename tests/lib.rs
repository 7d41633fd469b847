use ninegrid::board::{Cell, Digit};
use ninegrid::errors::EntryError;
use ninegrid::{Str8ts, Sudoku};

// A hand-checked solved grid. The four cells marked by HOLES below form an
// unavoidable rectangle (1/4 at rows 0-1, columns 0/3): swapping the pair
// yields a second valid completion.
const SOLVED: &str = "\
123456789\
469178235\
785293641\
214365897\
378921564\
956784123\
531642978\
892537416\
647819352";

// SOLVED with the rectangle cells removed: exactly two completions.
const RECTANGLE_PUZZLE: &str = "\
.23.56789
.69.78235
785293641
214365897
378921564
956784123
531642978
892537416
647819352";

// SOLVED with the bottom right 2×2 corner removed: every hole is forced by
// its row and column, so the completion is unique.
const FORCED_PUZZLE: &str = "\
123456789
469178235
785293641
214365897
378921564
956784123
531642978
8925374..
6478193..";

fn sudoku(block: &str) -> Sudoku {
    Sudoku::from_str_block(block).unwrap_or_else(|err| panic!("{}", err))
}

fn str8ts(block: &str) -> Str8ts {
    Str8ts::from_str_block(block).unwrap_or_else(|err| panic!("{}", err))
}

#[test]
fn solve_fills_the_forced_holes() {
    let solution = sudoku(FORCED_PUZZLE).solve_one().expect("solvable");
    assert_eq!(solution.puzzle().to_str_line(), SOLVED);
    assert!(solution.puzzle().is_solved());
}

#[test]
fn solve_finds_first_solution_in_tiebreak_order() {
    // both rectangle completions are valid; ascending order digs up the
    // original one (1 before 4 at the first hole)
    let solution = sudoku(RECTANGLE_PUZZLE).solve_one().expect("solvable");
    assert_eq!(solution.puzzle().to_str_line(), SOLVED);
}

#[test]
fn attempt_count_is_deterministic() {
    // 1 at (0,0); 1,2,3 rejected then 4 at (0,3); 1,2,3 rejected then 4 at
    // (1,0); 1 at (1,3) -- ten placements under the fixed tie-break
    let puzzle = sudoku(RECTANGLE_PUZZLE);
    let first = puzzle.solve_one().expect("solvable");
    let second = puzzle.solve_one().expect("solvable");
    assert_eq!(first.attempts(), 10);
    assert_eq!(second.attempts(), 10);
    assert_eq!(first.puzzle(), second.puzzle());
    assert!(first.difficulty() < 1.0);
}

#[test]
fn rectangle_puzzle_is_not_unique() {
    assert!(!sudoku(RECTANGLE_PUZZLE).has_unique_solution());
}

#[test]
fn forced_puzzle_is_unique() {
    assert!(sudoku(FORCED_PUZZLE).has_unique_solution());
}

#[test]
fn empty_board_solves_but_is_not_unique() {
    let empty = Sudoku::new();
    let solution = empty.solve_one().expect("the empty board is solvable");
    assert!(solution.puzzle().is_solved());
    // at least one placement per cell
    assert!(solution.attempts() >= 81);
    assert!(solution.difficulty() > 0.0);
    assert!(!empty.has_unique_solution());
}

#[test]
fn solved_output_is_internally_consistent() {
    // clue-preserving and consistent even without knowing the expected solution
    let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    let puzzle = Sudoku::from_str_line(line).unwrap();
    let solution = puzzle.solve_one().expect("solvable");
    assert!(solution.puzzle().is_solved());
    for cell in Cell::all() {
        if let Some(clue) = puzzle.grid().placed_digit(cell) {
            assert_eq!(solution.puzzle().grid().placed_digit(cell), Some(clue));
        }
    }
}

#[test]
fn unsolvable_board_reports_failure_and_non_uniqueness() {
    // row 0 leaves only 9 for its last cell, but column 8 already holds a 9
    let puzzle = sudoku(
        "\
12345678.
.........
.........
.........
.........
.........
.........
.........
........9",
    );
    assert!(puzzle.solve_one().is_none());
    assert!(!puzzle.clone().solve());
    assert!(!puzzle.has_unique_solution());
}

#[test]
fn conflicting_entry_never_reaches_the_board() {
    let mut puzzle = Sudoku::new();
    puzzle.place(Cell::from_row_col(0, 0), Digit::new(5)).unwrap();

    let before = puzzle.clone();
    let err = puzzle
        .place(Cell::from_row_col(0, 3), Digit::new(5))
        .unwrap_err();
    assert_eq!(
        err,
        EntryError::Conflict {
            cell: Cell::from_row_col(0, 3),
            digit: Digit::new(5),
        }
    );
    assert_eq!(puzzle, before);
    assert_eq!(
        err.to_string(),
        "digit 5 at row 1, column 4 conflicts with an existing entry"
    );

    // a non-conflicting digit overwrites the old entry
    puzzle.place(Cell::from_row_col(0, 0), Digit::new(6)).unwrap();
    assert_eq!(
        puzzle.grid().placed_digit(Cell::from_row_col(0, 0)),
        Some(Digit::new(6))
    );
}

#[test]
fn sudoku_rejects_wall_characters() {
    assert!(Sudoku::from_str_line(&format!("#{}", ".".repeat(80))).is_err());
}

const TWO_BY_TWO: &str = "\
..#######
..#######
#########
#########
#########
#########
#########
#########
#########";

#[test]
fn str8ts_two_by_two_corner() {
    // the free 2×2 corner fills as 1,2 / 2,1 under the fixed tie-break
    let board = str8ts(TWO_BY_TWO);
    let solution = board.solve_one().expect("solvable");
    let mut expected = String::from("12#######21#######");
    expected.push_str(&"#".repeat(63));
    assert_eq!(solution.puzzle().to_str_line(), expected);
    assert!(solution.puzzle().is_solved());

    // 2,1 / 1,2 completes as well, so the board is not unique
    assert!(!board.has_unique_solution());
}

#[test]
fn str8ts_forced_neighbor_is_unique() {
    // (1,0) must extend the column run {1,x} and 1 is taken: only 2 fits
    let board = str8ts(
        "\
1########
.########
#########
#########
#########
#########
#########
#########
#########",
    );
    let solution = board.solve_one().expect("solvable");
    assert_eq!(
        solution.puzzle().grid().placed_digit(Cell::from_row_col(1, 0)),
        Some(Digit::new(2))
    );
    assert!(board.has_unique_solution());
}

#[test]
fn str8ts_wall_digit_constrains_entries() {
    // wall carrying 7 at (0,4) excludes 7 from row 0 and column 4
    let mut board = Str8ts::new();
    board.place_wall(Cell::from_row_col(0, 4), Some(Digit::new(7)));

    let err = board
        .place(Cell::from_row_col(0, 0), Digit::new(7))
        .unwrap_err();
    assert!(matches!(err, EntryError::Conflict { .. }));

    let err = board
        .place(Cell::from_row_col(0, 4), Digit::new(3))
        .unwrap_err();
    assert_eq!(
        err,
        EntryError::WallCell {
            cell: Cell::from_row_col(0, 4),
        }
    );

    board.place(Cell::from_row_col(3, 4), Digit::new(3)).unwrap();
}

#[test]
fn str8ts_wall_cell_is_never_a_valid_target() {
    let mut board = Str8ts::new();
    board.place_wall(Cell::from_row_col(0, 0), None);
    assert!(!board.is_valid(Cell::from_row_col(0, 0), Digit::new(5)));
    assert!(matches!(
        board.place(Cell::from_row_col(0, 0), Digit::new(5)),
        Err(EntryError::WallCell { .. })
    ));
}

#[test]
fn str8ts_run_window_rejects_stretched_entries() {
    // row 0 walled at column 4: the run over columns 0..=3 holds 1,2,3 and
    // then admits 4 but not 9
    let mut board = Str8ts::new();
    board.place_wall(Cell::from_row_col(0, 4), None);
    for (col, digit) in (0..3).zip(1..) {
        board.place(Cell::from_row_col(0, col), Digit::new(digit)).unwrap();
    }
    assert!(!board.is_valid(Cell::from_row_col(0, 3), Digit::new(9)));
    assert!(board.is_valid(Cell::from_row_col(0, 3), Digit::new(4)));
    assert!(board
        .place(Cell::from_row_col(0, 3), Digit::new(9))
        .is_err());
    board.place(Cell::from_row_col(0, 3), Digit::new(4)).unwrap();
}

#[test]
fn display_formats() {
    let rendered = sudoku(FORCED_PUZZLE).to_string();
    // banded block output with placeholders for the holes
    assert!(rendered.contains("====="));
    assert!(rendered.contains("| 1 |"));
    assert!(rendered.contains(" _ "));

    let rendered = str8ts(TWO_BY_TWO).to_string();
    assert!(rendered.contains("###"));
    assert!(!rendered.contains(" 0 "));
}

#[test]
fn line_roundtrip_preserves_walls_and_digits() {
    let mut line = String::from("12#######21#######");
    line.push_str(&"#".repeat(63));
    let board = Str8ts::from_str_line(&line).unwrap();
    assert_eq!(board.to_str_line(), line);
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn sudoku_roundtrips_as_line_string() {
        let puzzle = sudoku(RECTANGLE_PUZZLE);
        let json = serde_json::to_string(&puzzle).unwrap();
        assert_eq!(json, format!("\"{}\"", puzzle.to_str_line()));
        let back: Sudoku = serde_json::from_str(&json).unwrap();
        assert_eq!(back, puzzle);
    }

    #[test]
    fn str8ts_roundtrips_as_line_string() {
        let board = str8ts(TWO_BY_TWO);
        let json = serde_json::to_string(&board).unwrap();
        let back: Str8ts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
