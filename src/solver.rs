//! This module contains the logic for solving puzzles.
//!
//! [solve] runs a classic recursive backtracking search: the first blank cell
//! in row-major order is filled with the lowest digit that does not violate
//! any placement rule, the search recurses, and the digit is removed again if
//! the recursion fails. The fixed visiting order makes the search
//! deterministic, so a puzzle with several completions always yields the same
//! one.

use crate::error::{PuzzleError, PuzzleResult};
use crate::{SudokuGrid, SIZE};

/// Solves the given puzzle, producing a completely filled grid that contains
/// all of the puzzle's clues and satisfies the uniqueness rules on every row,
/// column, and region. The input grid is not modified; the search operates on
/// a private copy which is returned on success and discarded on failure, so
/// no partially filled grid ever escapes.
///
/// # Errors
///
/// [PuzzleError::Unsolvable] if no completion exists. This includes puzzles
/// whose clues already clash with each other, such as two equal digits in
/// one row.
pub fn solve(grid: &SudokuGrid) -> PuzzleResult<SudokuGrid> {
    // The search only ever checks the digits it places itself, so clue
    // clashes must be rejected up front. Otherwise a contradictory but full
    // grid would be echoed back as its own solution.
    if !clues_consistent(grid) {
        return Err(PuzzleError::Unsolvable);
    }

    let mut working_copy = grid.clone();

    if solve_from(&mut working_copy, 0) {
        Ok(working_copy)
    }
    else {
        Err(PuzzleError::Unsolvable)
    }
}

fn clues_consistent(grid: &SudokuGrid) -> bool {
    for row in 0..SIZE {
        for column in 0..SIZE {
            if let Some(digit) = grid.cell(row, column) {
                if !grid.placement_allowed(row, column, digit) {
                    return false;
                }
            }
        }
    }

    true
}

fn solve_from(grid: &mut SudokuGrid, start: usize) -> bool {
    let index = match grid.first_blank_from(start) {
        Some(index) => index,
        None => return true
    };
    let row = index / SIZE;
    let column = index % SIZE;

    for digit in 1..=(SIZE as u8) {
        if grid.placement_allowed(row, column, digit) {
            grid.set(row, column, digit);

            if solve_from(grid, index + 1) {
                return true;
            }

            grid.clear(row, column);
        }
    }

    false
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::Coordinate;

    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EXAMPLE_PUZZLE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945\
        ....4.37.4.3..6..";
    const EXAMPLE_SOLUTION: &str =
        "7692354188514963724321789561745692833958427616287135492836571945\
        16924837947381625";

    fn assert_valid_solution(puzzle: &SudokuGrid, solution: &SudokuGrid) {
        assert!(solution.is_full(), "Solution contains blank cells.");

        for row in 0..SIZE {
            for column in 0..SIZE {
                let coordinate = Coordinate::new(row, column).unwrap();
                let digit = solution.get(coordinate).unwrap();

                if let Some(clue) = puzzle.get(coordinate) {
                    assert_eq!(clue, digit,
                        "Solution overwrites the clue at {}.", coordinate);
                }

                assert!(solution.placement_allowed(row, column, digit),
                    "Solution duplicates the digit at {}.", coordinate);
            }
        }
    }

    #[test]
    fn solves_example_puzzle() {
        let puzzle = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();
        let solution = solve(&puzzle).unwrap();

        assert_eq!(EXAMPLE_SOLUTION, solution.to_string());
    }

    #[test]
    fn solves_puzzle_with_many_blanks() {
        let puzzle = SudokuGrid::parse(
            "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1.\
            .16....926914.37.").unwrap();
        let solution = solve(&puzzle).unwrap();

        assert_eq!(
            "1357629849463812577284596136945178328129367453578241964732985615\
            81673429269145378",
            solution.to_string());
    }

    #[test]
    fn solving_a_solution_returns_it_unchanged() {
        let solved = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap();

        assert_eq!(Ok(solved.clone()), solve(&solved));
    }

    #[test]
    fn solve_does_not_mutate_the_input() {
        let puzzle = SudokuGrid::parse(EXAMPLE_PUZZLE).unwrap();
        solve(&puzzle).unwrap();

        assert_eq!(EXAMPLE_PUZZLE, puzzle.to_string());
    }

    #[test]
    fn unsolvable_puzzle_is_rejected() {
        // Row A forces two 1s, so no completion can exist.
        let puzzle = SudokuGrid::parse(
            "..911511.85.4....2432......1...69.83.9.....6.62.71...9......1945\
            ....4.37.4.3..6..").unwrap();

        assert_eq!(Err(PuzzleError::Unsolvable), solve(&puzzle));
    }

    #[test]
    fn contradictory_full_grid_is_rejected() {
        // The example solution with its first cell changed from 7 to 6,
        // duplicating the 6 in row A. Without the clue consistency check the
        // grid would be returned as its own solution.
        let mut contradictory = EXAMPLE_SOLUTION.to_owned();
        contradictory.replace_range(0..1, "6");
        let grid = SudokuGrid::parse(&contradictory).unwrap();

        assert_eq!(Err(PuzzleError::Unsolvable), solve(&grid));
    }

    #[test]
    fn empty_grid_solves_deterministically() {
        let empty = SudokuGrid::parse(&".".repeat(81)).unwrap();
        let first = solve(&empty).unwrap();
        let second = solve(&empty).unwrap();

        assert_valid_solution(&empty, &first);
        assert_eq!(first, second);

        // Row-major order and ascending digits fill the first row with the
        // digits 1 to 9 in order.
        assert!(first.to_string().starts_with("123456789"));
    }

    #[test]
    fn reconstructs_randomly_blanked_solutions() {
        let solution = SudokuGrid::parse(EXAMPLE_SOLUTION).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(90);

        for _ in 0..30 {
            let mut indices = (0..81usize).collect::<Vec<_>>();
            indices.shuffle(&mut rng);

            let mut puzzle = solution.clone();

            for &index in &indices[..45] {
                puzzle.clear(index / SIZE, index % SIZE);
            }

            let solved = solve(&puzzle).unwrap();
            assert_valid_solution(&puzzle, &solved);
        }
    }
}
