//! Error types for board construction and move input.

use std::fmt;

use super::types::Color;

/// Error type for position setup failures. Setup errors are fatal to the
/// game being configured; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The producer marked the board as rejected ('x' in the corner cell)
    Rejected,
    /// A grid cell held a character that names no piece
    UnknownPiece { char: char, file: u8, rank: u8 },
    /// A pawn was placed on rank 1 or rank 8
    PawnOnBackRank { file: u8, rank: u8 },
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    DuplicateKing { color: Color },
    /// A side has more pieces than the sixteen roster slots
    TooManyPieces { color: Color },
    /// The side that just moved is still in check
    OpponentInCheck { color: Color },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Rejected => write!(f, "board configuration was rejected"),
            SetupError::UnknownPiece { char, file, rank } => {
                write!(
                    f,
                    "unknown piece character '{char}' at {}{}",
                    (b'A' + file) as char,
                    rank + 1
                )
            }
            SetupError::PawnOnBackRank { file, rank } => {
                write!(
                    f,
                    "pawn on back rank at {}{}",
                    (b'A' + file) as char,
                    rank + 1
                )
            }
            SetupError::MissingKing { color } => write!(f, "{color} has no king"),
            SetupError::DuplicateKing { color } => write!(f, "{color} has more than one king"),
            SetupError::TooManyPieces { color } => {
                write!(f, "{color} has more than sixteen pieces")
            }
            SetupError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not {color}'s turn")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for square notation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareParseError {
    /// Not a file letter followed by a rank digit
    BadNotation { notation: String },
}

impl fmt::Display for SquareParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareParseError::BadNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareParseError {}

/// Error type for human move input failures. All recoverable: the input
/// loop reports the problem and asks again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Line does not match `<square>-<square>` with optional promotion letter
    BadFormat { line: String },
    /// A square half of the move failed to parse
    BadSquare(SquareParseError),
    /// Trailing promotion letter names neither queen nor knight
    BadPromotion { char: char },
    /// There is no piece of the mover's color on the source square
    NotYourPiece { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::BadFormat { line } => {
                write!(f, "expected a move like e2-e4, got '{line}'")
            }
            MoveParseError::BadSquare(err) => write!(f, "{err}"),
            MoveParseError::BadPromotion { char } => {
                write!(f, "promotion must be q or n, got '{char}'")
            }
            MoveParseError::NotYourPiece { notation } => {
                write!(f, "no piece of yours on {notation}")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

impl From<SquareParseError> for MoveParseError {
    fn from(err: SquareParseError) -> Self {
        MoveParseError::BadSquare(err)
    }
}
