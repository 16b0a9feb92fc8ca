// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a small, easy-to-understand 9x9 Sudoku engine. It
//! supports the following key features:
//!
//! * Parsing and validating puzzles given in the common linear 81-character
//! notation, where the digits 1 to 9 are clues and `.` marks a blank cell
//! * Checking whether a candidate digit may be placed at a cell without
//! duplicating a digit in its row, column, or 3x3 region
//! * Solving puzzles completely with a deterministic backtracking search
//!
//! A thin JSON adapter in the [api] module exposes the two engine operations
//! over HTTP; it contains no puzzle logic of its own.
//!
//! # Parsing puzzles
//!
//! See [SudokuGrid::parse] for the exact format of a puzzle string. Parsing
//! rejects inputs of the wrong length or with characters outside `1-9` and
//! `.`, so every [SudokuGrid] is well-formed by construction.
//!
//! ```
//! use sudoku_solver::SudokuGrid;
//!
//! let grid = SudokuGrid::parse(
//!     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945\
//!     ....4.37.4.3..6..").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking placements
//!
//! A placement query asks whether a digit may go at a cell named by a
//! [Coordinate] such as `A1` (row `A` to `I`, column `1` to `9`). The answer
//! lists the axes on which the digit would clash with an existing clue. A
//! digit never clashes with its own cell, so re-checking a clue that is
//! already on the grid reports it as valid.
//!
//! ```
//! use sudoku_solver::{Coordinate, SudokuGrid};
//! use sudoku_solver::constraint::Axis;
//!
//! let grid = SudokuGrid::parse(
//!     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945\
//!     ....4.37.4.3..6..").unwrap();
//! let coordinate = Coordinate::parse("A2").unwrap();
//!
//! assert_eq!(vec![Axis::Region], grid.conflicts(coordinate, 8));
//! ```
//!
//! # Solving puzzles
//!
//! [solver::solve] runs a backtracking search on a private copy of the grid
//! and either returns a completely filled grid or reports that none exists.
//! The search visits blank cells in row-major order and tries digits in
//! ascending order, so the result is deterministic even for puzzles with
//! several completions.
//!
//! ```
//! use sudoku_solver::{solver, SudokuGrid};
//!
//! let grid = SudokuGrid::parse(
//!     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945\
//!     ....4.37.4.3..6..").unwrap();
//! let solution = solver::solve(&grid).unwrap();
//!
//! assert_eq!(
//!     "769235418851496372432178956174569283395842761628713549283657194\
//!     516924837947381625",
//!     solution.to_string());
//! ```

pub mod api;
pub mod constraint;
pub mod error;
pub mod solver;

use error::{PuzzleError, PuzzleResult};

use std::fmt::{self, Display, Formatter, Write};

/// The number of rows and columns of the grid.
pub(crate) const SIZE: usize = 9;

/// The number of rows and columns of one region.
pub(crate) const BLOCK: usize = 3;

/// The total number of cells, which is also the required puzzle length.
pub(crate) const CELL_COUNT: usize = SIZE * SIZE;

/// A 9x9 Sudoku grid whose cells may or may not be occupied by a digit from 1
/// to 9. Cells are stored in row-major order, i.e. the cell in row `row` and
/// column `column` (both starting at 0 in the top-left corner) has the linear
/// index `row * 9 + column`, matching the puzzle notation.
///
/// A grid is only obtainable from [SudokuGrid::parse], which guarantees
/// well-formedness. It is never mutated by the validation and checking
/// operations; only the solver writes to its own private clone.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    cells: [Option<u8>; CELL_COUNT]
}

impl SudokuGrid {

    /// Parses a puzzle string into a grid. The string must consist of exactly
    /// 81 characters, each either a digit from 1 to 9 representing a clue or
    /// the blank marker `.` representing an empty cell. Cells are assigned
    /// left-to-right, top-to-bottom, where each row is completed before the
    /// next one is started.
    ///
    /// # Errors
    ///
    /// * [PuzzleError::InvalidLength] if the input is not exactly 81
    /// characters long. This is checked before the characters themselves.
    /// * [PuzzleError::InvalidCharacters] if any character is not a digit
    /// from 1 to 9 or the blank marker `.`.
    pub fn parse(raw: &str) -> PuzzleResult<SudokuGrid> {
        if raw.chars().count() != CELL_COUNT {
            return Err(PuzzleError::InvalidLength);
        }

        let mut cells = [None; CELL_COUNT];

        for (index, character) in raw.chars().enumerate() {
            match character {
                '.' => { },
                '1'..='9' => cells[index] = Some(character as u8 - b'0'),
                _ => return Err(PuzzleError::InvalidCharacters)
            }
        }

        Ok(SudokuGrid { cells })
    }

    /// Gets the content of the cell at the given coordinate, that is,
    /// `Some(digit)` if the cell holds a clue and `None` if it is blank.
    pub fn get(&self, coordinate: Coordinate) -> Option<u8> {
        self.cells[coordinate.index()]
    }

    /// Gets the content of the cell in the given row and column. Both indices
    /// must be less than 9; all callers operate on indices that are valid by
    /// construction.
    pub(crate) fn cell(&self, row: usize, column: usize) -> Option<u8> {
        self.cells[row * SIZE + column]
    }

    /// Sets the cell in the given row and column to the given digit. Only the
    /// solver mutates grids, on its private working copy.
    pub(crate) fn set(&mut self, row: usize, column: usize, digit: u8) {
        self.cells[row * SIZE + column] = Some(digit);
    }

    /// Clears the cell in the given row and column, used by the solver to
    /// undo a placement while backtracking.
    pub(crate) fn clear(&mut self, row: usize, column: usize) {
        self.cells[row * SIZE + column] = None;
    }

    /// Indicates whether every cell is filled with a digit. A full grid that
    /// satisfies the uniqueness rules on every axis is a solution.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Gets the linear index of the first blank cell at or after `start` in
    /// row-major order, or `None` if all remaining cells are filled.
    pub(crate) fn first_blank_from(&self, start: usize) -> Option<usize> {
        (start..CELL_COUNT).find(|&index| self.cells[index].is_none())
    }
}

impl Display for SudokuGrid {

    /// Formats the grid in the same linear 81-character notation accepted by
    /// [SudokuGrid::parse], so a grid that is formatted and parsed again does
    /// not change.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => f.write_char((b'0' + digit) as char)?,
                None => f.write_char('.')?
            }
        }

        Ok(())
    }
}

/// The address of one cell of a [SudokuGrid], written as a row letter from
/// `A` (top) to `I` (bottom) followed by a column number from `1` (left) to
/// `9` (right). A coordinate is validated at construction, so row and column
/// indices are always within the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Coordinate {
    row: usize,
    column: usize
}

impl Coordinate {

    /// Creates a coordinate from zero-based row and column indices.
    ///
    /// # Errors
    ///
    /// [PuzzleError::InvalidCoordinate] if either index is 9 or greater.
    pub fn new(row: usize, column: usize) -> PuzzleResult<Coordinate> {
        if row >= SIZE || column >= SIZE {
            return Err(PuzzleError::InvalidCoordinate);
        }

        Ok(Coordinate { row, column })
    }

    /// Parses a coordinate of the form `A1` to `I9`. The row letter is
    /// accepted in either case, as in the original service.
    ///
    /// # Errors
    ///
    /// [PuzzleError::InvalidCoordinate] if the input is not exactly a row
    /// letter in `A-I` followed by a column number in `1-9`.
    pub fn parse(code: &str) -> PuzzleResult<Coordinate> {
        let mut characters = code.chars();
        let row_letter = characters.next();
        let column_number = characters.next();

        if characters.next().is_some() {
            return Err(PuzzleError::InvalidCoordinate);
        }

        match (row_letter, column_number) {
            (Some(row_letter), Some(column_number)) => {
                let row_letter = row_letter.to_ascii_uppercase();

                if !('A'..='I').contains(&row_letter) ||
                        !('1'..='9').contains(&column_number) {
                    return Err(PuzzleError::InvalidCoordinate);
                }

                Ok(Coordinate {
                    row: row_letter as usize - 'A' as usize,
                    column: column_number as usize - '1' as usize
                })
            },
            _ => Err(PuzzleError::InvalidCoordinate)
        }
    }

    /// Gets the zero-based row index, where row `A` is 0.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the zero-based column index, where column `1` is 0.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the linear cell index `row * 9 + column`.
    pub fn index(&self) -> usize {
        self.row * SIZE + self.column
    }

    /// Gets the index of the 3x3 region containing this cell, counted
    /// left-to-right, top-to-bottom from 0 in the top-left corner.
    pub fn region(&self) -> usize {
        (self.row / BLOCK) * BLOCK + self.column / BLOCK
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.column + 1)
    }
}

/// Parses the value of a check request, which must be a single digit from 1
/// to 9.
///
/// # Errors
///
/// [PuzzleError::InvalidValue] if the input is anything else, including `0`,
/// multi-character strings, and the empty string.
pub fn parse_value(code: &str) -> PuzzleResult<u8> {
    let mut characters = code.chars();

    match (characters.next(), characters.next()) {
        (Some(digit @ '1'..='9'), None) => Ok(digit as u8 - b'0'),
        _ => Err(PuzzleError::InvalidValue)
    }
}
