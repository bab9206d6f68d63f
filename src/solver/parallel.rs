//! Parallel search across starting tiles
//!
//! Every stage fans out over its starting tiles with rayon. Boards and the dictionary
//! are read-only, so branches share nothing mutable.

use super::Solver;
use crate::core::{Board, Solution};
use log::debug;
use rayon::prelude::*;

impl Solver<'_> {
    /// Collect every solution using all available cores
    ///
    /// Produces the same solutions as [`Solver::solve`], in the same order (rayon's
    /// `collect` keeps source order), but eagerly: the whole search runs before this
    /// returns.
    ///
    /// # Panics
    /// Panics if the board reports a neighbour outside its own bounds.
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
    /// let solutions = solver.solve_parallel(&board, &[5, 7, 4]);
    /// assert_eq!(solutions.len(), 1);
    /// ```
    #[must_use]
    pub fn solve_parallel(&self, board: &Board, lengths: &[usize]) -> Vec<Solution> {
        let Some((&length, remaining)) = lengths.split_first() else {
            return vec![Solution::default()];
        };

        let solutions: Vec<Solution> = board
            .occupied_positions()
            .into_par_iter()
            .flat_map_iter(|start| self.words_at(board, start, length))
            .flat_map(|word| {
                let next = board.with_tiles_removed(word.path());
                self.solve_parallel(&next, remaining)
                    .into_par_iter()
                    .map(move |rest| rest.prepended(word.clone()))
            })
            .collect();

        debug!(
            "stage of length {length} with {} letters left: {} solutions",
            board.letter_count(),
            solutions.len()
        );
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::PrefixTree;

    const BOARD: &str = "labb,rlti,ecis,mscu";

    #[test]
    fn matches_sequential_order() {
        let tree = PrefixTree::from_words(["llems", "biscuit", "crab", "meal", "smell", "bell"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        let sequential: Vec<Solution> = solver.solve(&board, &[5, 7, 4]).collect();
        let parallel = solver.solve_parallel(&board, &[5, 7, 4]);
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.len(), 2);
    }

    #[test]
    fn empty_lengths_yield_one_empty_solution() {
        let tree = PrefixTree::from_words(["crab"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        assert_eq!(solver.solve_parallel(&board, &[]), vec![Solution::default()]);
    }

    #[test]
    fn no_solutions_is_empty() {
        let tree = PrefixTree::from_words(["bell", "biscuit", "carb", "meal", "smell"]);
        let solver = Solver::new(&tree);
        let board = Board::parse(BOARD);

        assert!(solver.solve_parallel(&board, &[5, 7, 4]).is_empty());
    }

    #[test]
    fn many_branches_match_sequential() {
        let tree = PrefixTree::from_words(["ab", "ba", "aa", "bb"]);
        let solver = Solver::new(&tree);
        let board = Board::parse("ab,ba");

        let sequential: Vec<Solution> = solver.solve(&board, &[2, 2]).collect();
        let parallel = solver.solve_parallel(&board, &[2, 2]);
        assert!(!parallel.is_empty());
        assert_eq!(sequential, parallel);
    }
}
