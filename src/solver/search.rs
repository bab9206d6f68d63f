//! Single-word path search
//!
//! Finds every dictionary word of a fixed length that can be traced from one starting
//! tile through adjacent, unused tiles.

use super::Solver;
use crate::core::{Board, Coord, FoundWord};
use crate::dictionary::{NodeId, PrefixTree};
use log::trace;

/// Mutable state for one depth-first walk
struct Walk<'b> {
    board: &'b Board,
    path: Vec<Coord>,
    letters: String,
    found: Vec<FoundWord>,
}

impl Solver<'_> {
    /// Find every word of exactly `length` letters whose path starts at `start`
    ///
    /// Words are returned in discovery order: neighbours are tried in row-major order
    /// of the 3x3 neighbourhood at every step. Returns nothing if `start` is empty, no
    /// dictionary word begins with its letter, or the board has fewer than `length`
    /// letters.
    ///
    /// # Panics
    /// Panics if the board reports a neighbour outside its own bounds.
    #[must_use]
    pub fn words_at(&self, board: &Board, start: Coord, length: usize) -> Vec<FoundWord> {
        if length == 0 || length > board.letter_count() {
            return Vec::new();
        }
        let Ok(Some(letter)) = board.letter_at(start) else {
            return Vec::new();
        };
        // Nothing in the dictionary starts with this letter
        let Some(node) = self.dictionary.child(PrefixTree::ROOT, letter) else {
            return Vec::new();
        };

        let mut walk = Walk {
            board,
            path: Vec::with_capacity(length),
            letters: String::with_capacity(length),
            found: Vec::new(),
        };
        walk.path.push(start);
        walk.letters.push(letter);

        self.extend(&mut walk, node, length - 1);
        walk.found
    }

    fn extend(&self, walk: &mut Walk<'_>, node: NodeId, remaining: usize) {
        if remaining == 0 {
            if self.dictionary.is_word(node) {
                trace!("found '{}' at {:?}", walk.letters, walk.path);
                walk.found
                    .push(FoundWord::new(walk.letters.clone(), walk.path.clone()));
            }
            return;
        }

        let last = walk.path[walk.path.len() - 1];
        let neighbors = walk
            .board
            .neighbors(last)
            .expect("path tiles come from the board");

        for neighbor in neighbors {
            // A tile may only be used once per word
            if walk.path.contains(&neighbor) {
                continue;
            }
            let Ok(Some(letter)) = walk.board.letter_at(neighbor) else {
                continue;
            };
            let Some(child) = self.dictionary.child(node, letter) else {
                continue;
            };

            walk.path.push(neighbor);
            walk.letters.push(letter);
            self.extend(walk, child, remaining - 1);
            walk.path.pop();
            walk.letters.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[FoundWord]) -> Vec<&str> {
        words.iter().map(FoundWord::word).collect()
    }

    #[test]
    fn finds_word_along_adjacent_tiles() {
        let tree = PrefixTree::from_words(["abe", "aei"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("abc,def,ghi");

        let words = solver.words_at(&board, Coord::new(0, 0), 3);
        assert_eq!(texts(&words), vec!["abe", "aei"]);
        assert_eq!(
            words[1].path(),
            &[Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
        );
    }

    #[test]
    fn rejects_non_adjacent_letters() {
        // 'c' is two columns away from 'a'
        let tree = PrefixTree::from_words(["ac"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("abc,def,ghi");
        assert!(solver.words_at(&board, Coord::new(0, 0), 2).is_empty());
    }

    #[test]
    fn does_not_reuse_tiles() {
        let tree = PrefixTree::from_words(["aba", "ab"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("ab");
        assert!(solver.words_at(&board, Coord::new(0, 0), 3).is_empty());
        assert_eq!(texts(&solver.words_at(&board, Coord::new(0, 0), 2)), vec!["ab"]);
    }

    #[test]
    fn repeated_letters_on_distinct_tiles_are_fine() {
        let tree = PrefixTree::from_words(["aba"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("ab,ba");
        let words = solver.words_at(&board, Coord::new(0, 0), 3);
        // a(0,0) -> b(1,0) -> a(1,1) and a(0,0) -> b(0,1) -> a(1,1)
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn only_exact_length_words() {
        let tree = PrefixTree::from_words(["ab", "abe"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("abc,def,ghi");
        assert_eq!(texts(&solver.words_at(&board, Coord::new(0, 0), 3)), vec!["abe"]);
    }

    #[test]
    fn prunes_unknown_first_letter() {
        let tree = PrefixTree::from_words(["bad"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("abc,def,ghi");
        assert!(solver.words_at(&board, Coord::new(0, 0), 3).is_empty());
    }

    #[test]
    fn empty_start_or_zero_length_finds_nothing() {
        let tree = PrefixTree::from_words(["a"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(" a");
        assert!(solver.words_at(&board, Coord::new(0, 0), 1).is_empty());
        assert!(solver.words_at(&board, Coord::new(1, 0), 0).is_empty());
        assert_eq!(texts(&solver.words_at(&board, Coord::new(1, 0), 1)), vec!["a"]);
    }

    #[test]
    fn length_beyond_letter_count_finds_nothing() {
        let tree = PrefixTree::from_words(["crab"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("crab");
        assert!(solver.words_at(&board, Coord::new(0, 0), 5).is_empty());
        assert!(solver.words_at(&board, Coord::new(0, 0), usize::MAX).is_empty());
        assert_eq!(texts(&solver.words_at(&board, Coord::new(0, 0), 4)), vec!["crab"]);
    }

    #[test]
    fn skips_blank_tiles() {
        let tree = PrefixTree::from_words(["ae"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("a c, ef\ngh ");
        assert_eq!(texts(&solver.words_at(&board, Coord::new(0, 0), 2)), vec!["ae"]);
    }
}
