//! Core domain types for WordBrain
//!
//! Coordinates, boards, found words and puzzle validation. Everything here is an
//! immutable value with no external dependencies.

mod board;
mod coord;
mod found_word;
mod puzzle;

pub use board::{Board, BoardError, EMPTY_TILE, ROW_SEPARATORS};
pub use coord::Coord;
pub use found_word::{FoundWord, Solution};
pub use puzzle::{Puzzle, PuzzleError, parse_lengths};
