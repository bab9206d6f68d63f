//! Formatting utilities for terminal output

use crate::core::{Board, Coord, Solution};
use rustc_hash::FxHashSet;

/// Render a board with the tiles of `path` in uppercase
///
/// Blank tiles are shown as `.` so highlighted words stand out.
#[must_use]
pub fn render_path(board: &Board, path: &[Coord]) -> String {
    (0..board.height())
        .map(|row| {
            (0..board.width())
                .map(|col| {
                    let pos = Coord::new(col, row);
                    match board.letter_at(pos) {
                        Ok(Some(letter)) if path.contains(&pos) => letter.to_ascii_uppercase(),
                        Ok(Some(letter)) => letter,
                        _ => '.',
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a tile path as `(c,r) -> (c,r) -> ...`
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Tracks which word sequences have already been shown
///
/// Different tile paths can spell the same words; presentation only shows the first.
#[derive(Debug, Default)]
pub struct DistinctWords {
    seen: FxHashSet<Vec<String>>,
}

impl DistinctWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a solution, returning `true` the first time its words are seen
    pub fn insert(&mut self, solution: &Solution) -> bool {
        let words = solution.texts().into_iter().map(str::to_string).collect();
        self.seen.insert(words)
    }

    /// Number of distinct word sequences recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
