//! Puzzle input validation
//!
//! The solver trusts its inputs. A `Puzzle` is the caller-side check that a board is
//! well formed and that the requested word lengths account for every tile.

use super::{Board, BoardError};
use std::fmt;

/// A validated board plus the word lengths to find on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    board: Board,
    lengths: Vec<usize>,
}

/// Error type for malformed puzzle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    InvalidBoard(BoardError),
    /// A length token that is not a number
    InvalidLength(String),
    ZeroLength,
    NoLengths,
    /// Word lengths do not add up to the number of letters on the board
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoard(e) => write!(f, "Invalid board: {e}"),
            Self::InvalidLength(token) => {
                write!(f, "'{token}' is not a word length, use numbers separated by commas")
            }
            Self::ZeroLength => write!(f, "Word lengths must be at least 1"),
            Self::NoLengths => write!(f, "At least one word length is required"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "Expected a total of {expected}, lengths add up to {found}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBoard(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for PuzzleError {
    fn from(e: BoardError) -> Self {
        Self::InvalidBoard(e)
    }
}

impl Puzzle {
    /// Validate a board and its word lengths
    ///
    /// # Errors
    /// Returns `PuzzleError` if the board is invalid, no lengths are given, any length
    /// is zero, or the lengths do not sum to the board's letter count.
    ///
    /// # Examples
    /// ```
    /// use wordbrain_solver::core::{Board, Puzzle};
    ///
    /// let board = Board::parse("labb,rlti,ecis,mscu");
    /// assert!(Puzzle::new(board.clone(), vec![5, 7, 4]).is_ok());
    /// assert!(Puzzle::new(board, vec![5, 7]).is_err());
    /// ```
    pub fn new(board: Board, lengths: Vec<usize>) -> Result<Self, PuzzleError> {
        board.validate()?;

        if lengths.is_empty() {
            return Err(PuzzleError::NoLengths);
        }
        if lengths.contains(&0) {
            return Err(PuzzleError::ZeroLength);
        }

        let expected = board.letter_count();
        // An overflowing total saturates and never matches
        let found = lengths.iter().fold(0, |total: usize, &len| total.saturating_add(len));
        if found != expected {
            return Err(PuzzleError::LengthMismatch { expected, found });
        }

        Ok(Self { board, lengths })
    }

    /// Parse board text and a comma-separated length list, then validate
    ///
    /// # Errors
    /// Returns `PuzzleError` for any malformed input.
    pub fn parse(board_text: &str, lengths_text: &str) -> Result<Self, PuzzleError> {
        Self::new(Board::parse(board_text), parse_lengths(lengths_text)?)
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }
}

/// Parse a comma-separated list of word lengths such as `"5, 7,4"`
///
/// # Errors
/// Returns `PuzzleError::InvalidLength` for the first token that is not a number.
pub fn parse_lengths(text: &str) -> Result<Vec<usize>, PuzzleError> {
    text.split(',')
        .map(str::trim)
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| PuzzleError::InvalidLength(token.to_string()))
        })
        .collect()
}
