//! Main WordBrain solver interface

use crate::core::{Board, Solution};
use crate::dictionary::PrefixTree;
use log::debug;
use std::iter;
use std::rc::Rc;

/// Main WordBrain solver
///
/// Holds a read-only dictionary and searches boards stage by stage: find a word of the
/// first length, drop its tiles, then solve the rest of the lengths on the new board.
pub struct Solver<'a> {
    pub(super) dictionary: &'a PrefixTree,
}

/// Lazy sequence of complete solutions
///
/// Solutions are computed as the iterator is pulled; dropping it stops the search.
pub struct Solutions<'a> {
    inner: Box<dyn Iterator<Item = Solution> + 'a>,
}

impl Iterator for Solutions<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a> Solver<'a> {
    /// Create a solver over a dictionary
    #[must_use]
    pub const fn new(dictionary: &'a PrefixTree) -> Self {
        Self { dictionary }
    }

    /// The dictionary words are checked against
    #[must_use]
    pub const fn dictionary(&self) -> &'a PrefixTree {
        self.dictionary
    }

    /// Enumerate every solution for `lengths` on `board`
    ///
    /// Solutions come out in a fixed order: starting tiles row-major, then neighbour
    /// order within each word, then depth-first across stages. Calling this again with
    /// the same inputs yields the same sequence.
    ///
    /// The board and lengths are not validated here; lengths that cannot cover the
    /// board simply produce fewer (or no) solutions. An empty `lengths` yields exactly
    /// one empty solution.
    ///
    /// # Panics
    /// Panics while iterating if the board reports a neighbour outside its own bounds.
    ///
    /// # Examples
    /// ```
    /// use wordbrain_solver::core::Board;
    /// use wordbrain_solver::dictionary::PrefixTree;
    /// use wordbrain_solver::solver::Solver;
    ///
    /// let dictionary = PrefixTree::from_words(["bell", "biscuit", "crab", "meal", "smell"]);
    /// let solver = Solver::new(&dictionary);
    /// let board = Board::parse("labb,rlti,ecis,mscu");
    ///
    /// let solutions: Vec<_> = solver.solve(&board, &[5, 7, 4]).collect();
    /// assert_eq!(solutions.len(), 1);
    /// assert_eq!(solutions[0].texts(), vec!["smell", "biscuit", "crab"]);
    /// ```
    #[must_use]
    pub fn solve<'s>(&'s self, board: &Board, lengths: &'s [usize]) -> Solutions<'s> {
        debug!(
            "solving {} letters for lengths {:?}",
            board.letter_count(),
            lengths
        );
        Solutions {
            inner: self.stage(Rc::new(board.clone()), lengths),
        }
    }

    fn stage<'s>(
        &'s self,
        board: Rc<Board>,
        lengths: &'s [usize],
    ) -> Box<dyn Iterator<Item = Solution> + 's> {
        // Every stage found a word: this branch is a complete solution
        let Some((&length, remaining)) = lengths.split_first() else {
            return Box::new(iter::once(Solution::default()));
        };

        let starts = board.occupied_positions();
        let search_board = Rc::clone(&board);

        Box::new(
            starts
                .into_iter()
                .flat_map(move |start| self.words_at(&search_board, start, length))
                .flat_map(move |word| {
                    let next = board.with_tiles_removed(word.path());
                    self.stage(Rc::new(next), remaining)
                        .map(move |rest| rest.prepended(word.clone()))
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    const BOARD: &str = "labb,rlti,ecis,mscu";
    const LENGTHS: [usize; 3] = [5, 7, 4];

    fn dictionary(words: &[&str]) -> PrefixTree {
        PrefixTree::from_words(words.iter().copied())
    }

    fn all_texts(solver: &Solver<'_>, board: &Board, lengths: &[usize]) -> Vec<Vec<String>> {
        solver
            .solve(board, lengths)
            .map(|s| s.texts().into_iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn empty_lengths_yield_one_empty_solution() {
        let tree = dictionary(&["crab"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        let solutions: Vec<Solution> = solver.solve(&board, &[]).collect();
        assert_eq!(solutions, vec![Solution::default()]);
    }

    #[test]
    fn finds_single_solution() {
        let tree = dictionary(&["bell", "biscuit", "crab", "meal", "smell"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        assert_eq!(
            all_texts(&solver, &board, &LENGTHS),
            vec![vec!["smell", "biscuit", "crab"]]
        );
    }

    #[test]
    fn unreachable_word_gives_no_solution() {
        let tree = dictionary(&["bell", "biscuit", "carb", "meal", "smell"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        assert_eq!(solver.solve(&board, &LENGTHS).count(), 0);
    }

    #[test]
    fn finds_two_solutions_in_board_order() {
        let tree = dictionary(&["llems", "biscuit", "crab", "meal", "smell"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        assert_eq!(
            all_texts(&solver, &board, &LENGTHS),
            vec![
                vec!["llems", "biscuit", "crab"],
                vec!["smell", "biscuit", "crab"],
            ]
        );
    }

    #[test]
    fn solve_is_repeatable() {
        let tree = dictionary(&["llems", "biscuit", "crab", "meal", "smell"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        let first: Vec<Solution> = solver.solve(&board, &LENGTHS).collect();
        let second: Vec<Solution> = solver.solve(&board, &LENGTHS).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn solution_paths_match_lengths_and_adjacency() {
        let tree = dictionary(&["bell", "biscuit", "crab", "meal", "smell"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        for solution in solver.solve(&board, &LENGTHS) {
            assert_eq!(solution.lengths(), LENGTHS.to_vec());
            for word in solution.words() {
                assert!(tree.contains(word.word()));
                assert!(word.path().windows(2).all(|w| w[0].is_adjacent(w[1])));
            }
        }
    }

    #[test]
    fn first_word_path_is_on_original_board() {
        let tree = dictionary(&["bell", "biscuit", "crab", "meal", "smell"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        let solution = solver.solve(&board, &LENGTHS).next().unwrap();
        assert_eq!(
            solution.words()[0].path(),
            &[
                Coord::new(1, 3),
                Coord::new(0, 3),
                Coord::new(0, 2),
                Coord::new(1, 1),
                Coord::new(0, 0),
            ]
        );
    }

    #[test]
    fn partial_cover_still_yields_solutions() {
        // Lengths need not cover the whole board
        let tree = dictionary(&["crab"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("crab");

        assert_eq!(solver.solve(&board, &[4]).count(), 1);
        assert_eq!(solver.solve(&board, &[4, 1]).count(), 0);
    }

    #[test]
    fn consumer_can_stop_early() {
        // Pairing off sixteen identical tiles has millions of orderings; only the first
        // few are ever computed here
        let tree = dictionary(&["aa"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("aaaa,aaaa,aaaa,aaaa");

        let first: Vec<Solution> = solver.solve(&board, &[2; 8]).take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(
            first[0].words()[0].path(),
            &[Coord::new(0, 0), Coord::new(1, 0)]
        );
    }

    #[test]
    fn oversized_length_yields_nothing() {
        let tree = dictionary(&["crab"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("crab");

        assert_eq!(solver.solve(&board, &[usize::MAX]).count(), 0);
        assert_eq!(solver.solve(&board, &[4, usize::MAX]).count(), 0);
        assert!(solver.solve_parallel(&board, &[usize::MAX]).is_empty());
    }
}
