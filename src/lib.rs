//! WordBrain Solver
//!
//! Finds every way to clear a WordBrain board: trace words of the requested lengths
//! through adjacent tiles, letting the remaining letters fall after each word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordbrain_solver::core::Board;
//! use wordbrain_solver::dictionary::PrefixTree;
//! use wordbrain_solver::solver::Solver;
//!
//! let dictionary = PrefixTree::from_words(["bell", "biscuit", "crab", "meal", "smell"]);
//! let solver = Solver::new(&dictionary);
//! let board: Board = "labb,rlti,ecis,mscu".parse().unwrap();
//!
//! for solution in solver.solve(&board, &[5, 7, 4]) {
//!     println!("{solution}");
//! }
//! ```

// Core domain types
pub mod core;

// Prefix-tree dictionary and word lists
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
