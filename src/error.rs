//! This module contains the error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An enumeration of everything that can go wrong while validating a puzzle,
/// checking a placement, or solving. Each variant carries a fixed message
/// (available via its `Display` implementation) which is surfaced verbatim by
/// the JSON API.
///
/// All errors are terminal for the call in which they occur. They are detected
/// in a fixed order: missing fields first, then puzzle length, then puzzle
/// characters, then coordinate and value, and finally solvability.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PuzzleError {

    /// Indicates that the puzzle field was absent from a solve request.
    MissingField,

    /// Indicates that at least one of the puzzle, coordinate, and value fields
    /// was absent from a check request. The wording differs from
    /// [PuzzleError::MissingField] because the check endpoint requires more
    /// than one field.
    MissingFields,

    /// Indicates that the puzzle string does not consist of exactly 81
    /// characters.
    InvalidLength,

    /// Indicates that the puzzle string contains a character other than the
    /// digits 1 to 9 and the blank marker `.`.
    InvalidCharacters,

    /// Indicates that a coordinate does not name a cell, i.e. it is not a row
    /// letter in `A-I` followed by a column number in `1-9`.
    InvalidCoordinate,

    /// Indicates that a checked value is not a single digit in `1-9`.
    InvalidValue,

    /// Indicates that a well-formed puzzle admits no complete solution.
    Unsolvable
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let message = match self {
            PuzzleError::MissingField => "Required field missing",
            PuzzleError::MissingFields => "Required field(s) missing",
            PuzzleError::InvalidLength =>
                "Expected puzzle to be 81 characters long",
            PuzzleError::InvalidCharacters => "Invalid characters in puzzle",
            PuzzleError::InvalidCoordinate => "Invalid coordinate",
            PuzzleError::InvalidValue => "Invalid value",
            PuzzleError::Unsolvable => "Puzzle cannot be solved"
        };

        f.write_str(message)
    }
}

impl Error for PuzzleError { }

/// Syntactic sugar for `Result<V, PuzzleError>`.
pub type PuzzleResult<V> = Result<V, PuzzleError>;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn messages_match_the_wire_format() {
        assert_eq!("Required field missing",
            PuzzleError::MissingField.to_string());
        assert_eq!("Required field(s) missing",
            PuzzleError::MissingFields.to_string());
        assert_eq!("Expected puzzle to be 81 characters long",
            PuzzleError::InvalidLength.to_string());
        assert_eq!("Invalid characters in puzzle",
            PuzzleError::InvalidCharacters.to_string());
        assert_eq!("Invalid coordinate",
            PuzzleError::InvalidCoordinate.to_string());
        assert_eq!("Invalid value", PuzzleError::InvalidValue.to_string());
        assert_eq!("Puzzle cannot be solved",
            PuzzleError::Unsolvable.to_string());
    }
}
