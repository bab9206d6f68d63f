//! Puzzle solving command
//!
//! Validates puzzle text, runs the search and collects the solutions to show.

use crate::core::{Puzzle, Solution};
use crate::output::DistinctWords;
use crate::solver::{SearchMode, Solver};
use log::info;
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    /// Board rows separated by commas, semicolons, colons or newlines
    pub board: String,
    /// Comma-separated word lengths
    pub lengths: String,
    pub mode: SearchMode,
    /// Stop after this many solutions
    pub limit: Option<usize>,
    /// Drop solutions whose words repeat an earlier one
    pub distinct: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(board: impl Into<String>, lengths: impl Into<String>) -> Self {
        Self {
            board: board.into(),
            lengths: lengths.into(),
            mode: SearchMode::default(),
            limit: None,
            distinct: true,
        }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub puzzle: Puzzle,
    pub solutions: Vec<Solution>,
    pub mode: SearchMode,
    pub duration: Duration,
}

/// Solve a puzzle given as text
///
/// # Errors
///
/// Returns an error if the board is malformed or the word lengths are not numbers,
/// contain a zero, or do not add up to the number of letters on the board.
///
/// # Examples
/// ```
/// use wordbrain_solver::commands::{SolveConfig, solve_puzzle};
/// use wordbrain_solver::dictionary::PrefixTree;
/// use wordbrain_solver::solver::Solver;
///
/// let dictionary = PrefixTree::from_words(["bell", "biscuit", "crab", "meal", "smell"]);
/// let solver = Solver::new(&dictionary);
///
/// let result = solve_puzzle(SolveConfig::new("labb,rlti,ecis,mscu", "5,7,4"), &solver).unwrap();
/// assert_eq!(result.solutions[0].to_string(), "smell, biscuit, crab");
/// ```
pub fn solve_puzzle(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, String> {
    let puzzle = Puzzle::parse(&config.board, &config.lengths).map_err(|e| e.to_string())?;

    let start = Instant::now();
    let limit = config.limit.unwrap_or(usize::MAX);
    let mut seen = DistinctWords::new();
    let keep = |solution: &Solution| !config.distinct || seen.insert(solution);

    let solutions: Vec<Solution> = match config.mode {
        SearchMode::Sequential => solver
            .solve(puzzle.board(), puzzle.lengths())
            .filter(keep)
            .take(limit)
            .collect(),
        SearchMode::Parallel => solver
            .solve_parallel(puzzle.board(), puzzle.lengths())
            .into_iter()
            .filter(keep)
            .take(limit)
            .collect(),
    };
    let duration = start.elapsed();

    info!(
        "{} solution(s) for {:?} in {:.3}s",
        solutions.len(),
        puzzle.lengths(),
        duration.as_secs_f64()
    );

    Ok(SolveResult {
        puzzle,
        solutions,
        mode: config.mode,
        duration,
    })
}
