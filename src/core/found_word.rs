//! Words found on a board and complete solutions

use super::Coord;
use std::fmt;

/// A dictionary word together with the tiles that spell it
///
/// The path has one coordinate per letter, in spelling order. Consecutive tiles are
/// neighbours and no tile appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoundWord {
    word: String,
    path: Vec<Coord>,
}

impl FoundWord {
    /// Pair a word with its tile path
    ///
    /// # Panics
    /// Panics in debug mode if the path length differs from the number of letters.
    #[must_use]
    pub fn new(word: String, path: Vec<Coord>) -> Self {
        debug_assert_eq!(
            word.chars().count(),
            path.len(),
            "path must have one tile per letter"
        );
        Self { word, path }
    }

    /// The spelled word (lowercase)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Tiles used, in spelling order
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the word has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for FoundWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// One found word per requested length, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    words: Vec<FoundWord>,
}

impl Solution {
    #[must_use]
    pub const fn new(words: Vec<FoundWord>) -> Self {
        Self { words }
    }

    /// Found words in stage order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[FoundWord] {
        &self.words
    }

    /// Just the spelled words, dropping tile paths
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(FoundWord::word).collect()
    }

    /// Length of each word, in stage order
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.words.iter().map(FoundWord::len).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// This solution with `first` placed in front
    #[must_use]
    pub fn prepended(mut self, first: FoundWord) -> Self {
        self.words.insert(0, first);
        self
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.texts().join(", "))
    }
}
