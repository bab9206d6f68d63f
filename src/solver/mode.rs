//! Search mode selection

use super::Solver;
use crate::core::{Board, Solution};

/// How the solver schedules its search
///
/// Allows runtime selection while both modes produce the same solutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Lazy, single-threaded; solutions stream out as found (default)
    #[default]
    Sequential,
    /// Eager, rayon across starting tiles
    Parallel,
}

impl SearchMode {
    /// Create a mode from a name string
    ///
    /// Supported names: "sequential", "parallel" (or "par"). Defaults to sequential if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "parallel" | "par" => Self::Parallel,
            _ => Self::Sequential,
        }
    }

    /// Stable name for display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }

    /// Run the search, pulling at most `limit` solutions
    ///
    /// In parallel mode the limit is applied after the search completes.
    #[must_use]
    pub fn run(
        self,
        solver: &Solver<'_>,
        board: &Board,
        lengths: &[usize],
        limit: Option<usize>,
    ) -> Vec<Solution> {
        let limit = limit.unwrap_or(usize::MAX);
        match self {
            Self::Sequential => solver.solve(board, lengths).take(limit).collect(),
            Self::Parallel => {
                let mut solutions = solver.solve_parallel(board, lengths);
                solutions.truncate(limit);
                solutions
            }
        }
    }
}
