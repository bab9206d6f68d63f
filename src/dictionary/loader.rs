//! Dictionary loading utilities
//!
//! Builds prefix trees from word files or from the embedded list.

use super::PrefixTree;
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a newline-delimited word file
///
/// Lines are trimmed and blank lines skipped. Words are lowercased but otherwise
/// stored as given.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordbrain_solver::dictionary::loader::load_from_file;
///
/// let tree = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", tree.word_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<PrefixTree> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let tree = tree_from_lines(content.lines());

    info!(
        "loaded {} words ({} nodes) from {}",
        tree.word_count(),
        tree.node_count(),
        path.display()
    );
    Ok(tree)
}

/// Build a dictionary from a slice of words
///
/// # Examples
/// ```
/// use wordbrain_solver::dictionary::loader::tree_from_slice;
/// use wordbrain_solver::dictionary::EMBEDDED_WORDS;
///
/// let tree = tree_from_slice(EMBEDDED_WORDS);
/// assert!(tree.contains("smell"));
/// ```
#[must_use]
pub fn tree_from_slice(slice: &[&str]) -> PrefixTree {
    tree_from_lines(slice.iter().copied())
}

fn tree_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> PrefixTree {
    PrefixTree::from_words(lines.map(str::trim).filter(|line| !line.is_empty()))
}
