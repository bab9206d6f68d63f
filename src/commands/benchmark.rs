//! Benchmark command
//!
//! Generates random boards and measures how fast the solver gets through them.

use crate::core::Board;
use crate::solver::{SearchMode, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Approximate English letter frequencies (per 1000 letters)
const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('a', 82),
    ('b', 15),
    ('c', 28),
    ('d', 43),
    ('e', 127),
    ('f', 22),
    ('g', 20),
    ('h', 61),
    ('i', 70),
    ('j', 2),
    ('k', 8),
    ('l', 40),
    ('m', 24),
    ('n', 67),
    ('o', 75),
    ('p', 19),
    ('q', 1),
    ('r', 60),
    ('s', 63),
    ('t', 91),
    ('u', 28),
    ('v', 10),
    ('w', 24),
    ('x', 2),
    ('y', 20),
    ('z', 1),
];

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of random boards to solve
    pub boards: usize,
    /// Side length of each square board
    pub size: usize,
    /// Target word length; the remainder is added to the last word
    pub word_length: usize,
    pub seed: u64,
    pub mode: SearchMode,
    /// Stop each board after this many solutions
    pub limit: Option<usize>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            boards: 50,
            size: 4,
            word_length: 4,
            seed: 0,
            mode: SearchMode::default(),
            limit: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub solved_boards: usize,
    pub total_solutions: usize,
    pub max_solutions: usize,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate a full `size` x `size` board with English-weighted random letters
pub fn random_board<R: Rng>(rng: &mut R, size: usize) -> Board {
    let total: u32 = LETTER_WEIGHTS.iter().map(|&(_, w)| w).sum();

    let rows = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    let mut pick = rng.random_range(0..total);
                    let letter = LETTER_WEIGHTS
                        .iter()
                        .find(|&&(_, weight)| {
                            if pick < weight {
                                true
                            } else {
                                pick -= weight;
                                false
                            }
                        })
                        .map_or('e', |&(letter, _)| letter);
                    Some(letter)
                })
                .collect()
        })
        .collect();

    Board::from_rows(rows)
}

/// Split `total` letters into words of `word_length`, folding any remainder into the
/// last word
///
/// # Examples
/// ```
/// use wordbrain_solver::commands::benchmark::split_lengths;
///
/// assert_eq!(split_lengths(16, 4), vec![4, 4, 4, 4]);
/// assert_eq!(split_lengths(9, 4), vec![4, 5]);
/// assert_eq!(split_lengths(3, 4), vec![3]);
/// ```
#[must_use]
pub fn split_lengths(total: usize, word_length: usize) -> Vec<usize> {
    if total == 0 || word_length == 0 {
        return Vec::new();
    }

    let count = (total / word_length).max(1);
    let mut lengths = vec![word_length; count - 1];
    lengths.push(total - word_length * (count - 1));
    lengths
}

/// Run the solver over a batch of seeded random boards
///
/// The same seed always produces the same boards.
///
/// # Panics
///
/// Panics if the solver encounters a board position outside its bounds.
pub fn run_benchmark(solver: &Solver<'_>, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let lengths = split_lengths(config.size * config.size, config.word_length);

    let pb = if config.show_progress {
        ProgressBar::new(config.boards as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved_boards = 0;
    let mut total_solutions = 0;
    let mut max_solutions = 0;

    for _ in 0..config.boards {
        let board = random_board(&mut rng, config.size);
        let found = config
            .mode
            .run(solver, &board, &lengths, config.limit)
            .len();
        debug!("{found} solution(s) for {}", board.to_string().replace('\n', ","));

        if found > 0 {
            solved_boards += 1;
        }
        total_solutions += found;
        max_solutions = max_solutions.max(found);

        pb.set_message(format!("{solved_boards} solved"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();

    BenchmarkResult {
        boards: config.boards,
        solved_boards,
        total_solutions,
        max_solutions,
        duration,
        boards_per_second: config.boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::EMBEDDED_WORDS;
    use crate::dictionary::loader::tree_from_slice;

    fn quiet(boards: usize, size: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            boards,
            size,
            word_length: 3,
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn random_board_is_full_and_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = random_board(&mut rng, 5);
        assert!(board.is_valid());
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 5);
        assert_eq!(board.letter_count(), 25);
    }

    #[test]
    fn random_board_is_deterministic_per_seed() {
        let a = random_board(&mut StdRng::seed_from_u64(42), 4);
        let b = random_board(&mut StdRng::seed_from_u64(42), 4);
        assert_eq!(a, b);
    }

    #[test]
    fn split_lengths_covers_total() {
        for total in 1..30 {
            for word_length in 1..8 {
                let lengths = split_lengths(total, word_length);
                assert_eq!(lengths.iter().sum::<usize>(), total);
                assert!(lengths.iter().all(|&l| l > 0));
            }
        }
        assert!(split_lengths(0, 4).is_empty());
        assert!(split_lengths(4, 0).is_empty());
    }

    #[test]
    fn benchmark_runs() {
        let tree = tree_from_slice(EMBEDDED_WORDS);
        let solver = Solver::new(&tree);
        let result = run_benchmark(&solver, &quiet(5, 3));

        assert_eq!(result.boards, 5);
        assert!(result.solved_boards <= result.boards);
        assert!(result.max_solutions <= result.total_solutions);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let tree = tree_from_slice(EMBEDDED_WORDS);
        let solver = Solver::new(&tree);

        let first = run_benchmark(&solver, &quiet(5, 3));
        let second = run_benchmark(&solver, &quiet(5, 3));
        assert_eq!(first.total_solutions, second.total_solutions);
        assert_eq!(first.solved_boards, second.solved_boards);
    }

    #[test]
    fn benchmark_modes_agree() {
        let tree = tree_from_slice(EMBEDDED_WORDS);
        let solver = Solver::new(&tree);

        let sequential = run_benchmark(&solver, &quiet(4, 3));
        let parallel = run_benchmark(
            &solver,
            &BenchmarkConfig {
                mode: SearchMode::Parallel,
                ..quiet(4, 3)
            },
        );
        assert_eq!(sequential.total_solutions, parallel.total_solutions);
    }

    #[test]
    fn benchmark_limit_caps_each_board() {
        let tree = tree_from_slice(EMBEDDED_WORDS);
        let solver = Solver::new(&tree);

        let unlimited = run_benchmark(&solver, &quiet(5, 3));
        let limited = run_benchmark(
            &solver,
            &BenchmarkConfig {
                limit: Some(1),
                ..quiet(5, 3)
            },
        );
        assert!(limited.max_solutions <= 1);
        assert_eq!(limited.solved_boards, unlimited.solved_boards);
        assert_eq!(limited.total_solutions, limited.solved_boards);
    }

    #[test]
    fn benchmark_zero_boards() {
        let tree = tree_from_slice(EMBEDDED_WORDS);
        let solver = Solver::new(&tree);
        let result = run_benchmark(&solver, &quiet(0, 3));

        assert_eq!(result.boards, 0);
        assert_eq!(result.total_solutions, 0);
    }
}
