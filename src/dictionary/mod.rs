//! Dictionary for WordBrain solving
//!
//! A prefix tree of valid words, plus an embedded default word list.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use trie::{NodeId, PrefixTree};
