//! WordBrain solving algorithms
//!
//! Prefix-tree pruned path search, chained across stages with gravity between them.

mod engine;
mod mode;
mod parallel;
mod search;

pub use engine::{Solutions, Solver};
pub use mode::SearchMode;
