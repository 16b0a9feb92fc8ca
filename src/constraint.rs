//! This module contains the placement checks for the classic Sudoku rules,
//! which require every digit to be unique within its row, column, and 3x3
//! region.
//!
//! Each axis can be queried on its own with
//! [SudokuGrid::check_row_placement],
//! [SudokuGrid::check_column_placement], and
//! [SudokuGrid::check_region_placement], while [SudokuGrid::conflicts]
//! answers the combined question by listing every [Axis] on which a candidate
//! digit clashes. All checks are read-only; the grid is never changed by
//! asking.
//!
//! Every scan skips the candidate's own cell. A digit that is already on the
//! grid therefore checks as valid at its own position, while a cell's old
//! digit plays no special role when a different candidate is checked there.

use crate::{Coordinate, SudokuGrid, BLOCK, SIZE};

use serde::Serialize;

use std::fmt::{self, Display, Formatter};

/// One of the three axes along which a placement can duplicate an existing
/// digit. Serializes to the lowercase name used in check responses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {

    /// The nine cells sharing the candidate's row.
    Row,

    /// The nine cells sharing the candidate's column.
    Column,

    /// The nine cells sharing the candidate's 3x3 region.
    Region
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::Region => "region"
        };

        f.write_str(name)
    }
}

impl SudokuGrid {

    /// Indicates whether placing `value` at the given coordinate would leave
    /// its row free of duplicates, that is, the value does not already appear
    /// elsewhere in the same row. `value` must be a digit from 1 to 9, which
    /// callers establish via [crate::parse_value].
    pub fn check_row_placement(&self, coordinate: Coordinate, value: u8)
            -> bool {
        self.row_allows(coordinate.row(), coordinate.column(), value)
    }

    /// Indicates whether placing `value` at the given coordinate would leave
    /// its column free of duplicates. See
    /// [SudokuGrid::check_row_placement] for the requirements on `value`.
    pub fn check_column_placement(&self, coordinate: Coordinate, value: u8)
            -> bool {
        self.column_allows(coordinate.row(), coordinate.column(), value)
    }

    /// Indicates whether placing `value` at the given coordinate would leave
    /// its 3x3 region free of duplicates. See
    /// [SudokuGrid::check_row_placement] for the requirements on `value`.
    pub fn check_region_placement(&self, coordinate: Coordinate, value: u8)
            -> bool {
        self.region_allows(coordinate.row(), coordinate.column(), value)
    }

    /// Lists every axis on which placing `value` at the given coordinate
    /// would duplicate an existing digit, always in the order row, column,
    /// region. The placement is valid if and only if the returned vector is
    /// empty.
    pub fn conflicts(&self, coordinate: Coordinate, value: u8) -> Vec<Axis> {
        let mut conflicting_axes = Vec::new();

        if !self.check_row_placement(coordinate, value) {
            conflicting_axes.push(Axis::Row);
        }

        if !self.check_column_placement(coordinate, value) {
            conflicting_axes.push(Axis::Column);
        }

        if !self.check_region_placement(coordinate, value) {
            conflicting_axes.push(Axis::Region);
        }

        conflicting_axes
    }

    /// Combined check on raw indices for the solver's inner loop, which does
    /// not need to know the individual axes.
    pub(crate) fn placement_allowed(&self, row: usize, column: usize,
            value: u8) -> bool {
        self.row_allows(row, column, value) &&
            self.column_allows(row, column, value) &&
            self.region_allows(row, column, value)
    }

    fn row_allows(&self, row: usize, column: usize, value: u8) -> bool {
        for other_column in 0..SIZE {
            if other_column != column &&
                    self.cell(row, other_column) == Some(value) {
                return false;
            }
        }

        true
    }

    fn column_allows(&self, row: usize, column: usize, value: u8) -> bool {
        for other_row in 0..SIZE {
            if other_row != row && self.cell(other_row, column) == Some(value) {
                return false;
            }
        }

        true
    }

    fn region_allows(&self, row: usize, column: usize, value: u8) -> bool {
        let region_row = (row / BLOCK) * BLOCK;
        let region_column = (column / BLOCK) * BLOCK;

        for other_row in region_row..(region_row + BLOCK) {
            for other_column in region_column..(region_column + BLOCK) {
                if (other_row != row || other_column != column) &&
                        self.cell(other_row, other_column) == Some(value) {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const EXAMPLE_PUZZLE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945\
        ....4.37.4.3..6..";

    fn example_grid() -> SudokuGrid {
        SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap()
    }

    fn coordinate(code: &str) -> Coordinate {
        Coordinate::parse(code).unwrap()
    }

    #[test]
    fn valid_row_placement() {
        assert!(example_grid().check_row_placement(coordinate("A2"), 3));
    }

    #[test]
    fn invalid_row_placement() {
        assert!(!example_grid().check_row_placement(coordinate("A2"), 1));
    }

    #[test]
    fn valid_column_placement() {
        assert!(example_grid().check_column_placement(coordinate("A2"), 8));
    }

    #[test]
    fn invalid_column_placement() {
        assert!(!example_grid().check_column_placement(coordinate("A2"), 5));
    }

    #[test]
    fn valid_region_placement() {
        assert!(example_grid().check_region_placement(coordinate("A1"), 7));
    }

    #[test]
    fn invalid_region_placement() {
        assert!(!example_grid().check_region_placement(coordinate("A1"), 2));
    }

    #[test]
    fn no_conflicts() {
        assert_eq!(Vec::<Axis>::new(),
            example_grid().conflicts(coordinate("A1"), 7));
    }

    #[test]
    fn single_conflict() {
        assert_eq!(vec![Axis::Region],
            example_grid().conflicts(coordinate("A2"), 8));
    }

    #[test]
    fn two_conflicts() {
        let grid = SudokuGrid::parse(
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28..\
            ..419..5....7..13").unwrap();

        assert_eq!(vec![Axis::Row, Axis::Region],
            grid.conflicts(coordinate("A2"), 5));
    }

    #[test]
    fn three_conflicts() {
        let grid = SudokuGrid::parse(
            "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1.\
            .16....926914.37.").unwrap();

        assert_eq!(vec![Axis::Row, Axis::Column, Axis::Region],
            grid.conflicts(coordinate("A2"), 2));
    }

    #[test]
    fn own_clue_is_not_a_conflict() {
        // C1 already holds a 4, so checking 4 there must report no conflict
        // even though the 4 is present on all three of its axes.
        let grid = example_grid();

        assert_eq!(Some(4), grid.get(coordinate("C1")));
        assert_eq!(Vec::<Axis>::new(), grid.conflicts(coordinate("C1"), 4));
    }

    #[test]
    fn occupied_cell_still_conflicts_for_other_values() {
        // A3 holds a 9, but a candidate 5 there still clashes with the 5
        // elsewhere in row A.
        let grid = example_grid();

        assert_eq!(Some(9), grid.get(coordinate("A3")));
        assert!(!grid.check_row_placement(coordinate("A3"), 5));
    }

    #[test]
    fn axes_serialize_lowercase() {
        let serialized =
            serde_json::to_string(&[Axis::Row, Axis::Column, Axis::Region])
                .unwrap();
        assert_eq!(r#"["row","column","region"]"#, serialized);
    }
}
