//! Command implementations

pub mod benchmark;
pub mod interactive;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use interactive::run_interactive;
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
