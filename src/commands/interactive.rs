//! Line-based interactive mode
//!
//! Prompts for a board and its word lengths, prints every distinct solution, and
//! repeats until the user types `exit` or input ends.

use crate::core::{Board, Puzzle, PuzzleError, parse_lengths};
use crate::output::DistinctWords;
use crate::solver::{SearchMode, Solver};
use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

/// Word the user types at any prompt to leave
pub const EXIT: &str = "exit";

/// Run the interactive prompt loop
///
/// Returns the number of puzzles solved before the user left.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use wordbrain_solver::commands::run_interactive;
/// use wordbrain_solver::dictionary::PrefixTree;
/// use wordbrain_solver::solver::{SearchMode, Solver};
///
/// let dictionary = PrefixTree::from_words(["bell", "biscuit", "crab", "meal", "smell"]);
/// let solver = Solver::new(&dictionary);
/// let mut input = Cursor::new("labb,rlti,ecis,mscu\n5,7,4\nexit\n");
/// let mut output = Vec::new();
///
/// let solved = run_interactive(&mut input, &mut output, &solver, SearchMode::Sequential).unwrap();
/// assert_eq!(solved, 1);
/// assert!(String::from_utf8(output).unwrap().contains("smell, biscuit, crab"));
/// ```
pub fn run_interactive<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    solver: &Solver<'_>,
    mode: SearchMode,
) -> Result<usize> {
    let mut solved = 0;

    while let Some(puzzle) = read_puzzle(reader, out)? {
        debug!("solving {:?} ({})", puzzle.lengths(), mode.name());
        print_solutions(out, solver, &puzzle, mode)?;
        solved += 1;
    }

    Ok(solved)
}

/// Prompt until a valid puzzle is entered, or `None` on exit/end of input
fn read_puzzle<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<Option<Puzzle>> {
    writeln!(out, "Enter board as lines separated by commas (or \"{EXIT}\"):")?;

    let board = loop {
        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        if is_exit(&line) {
            return Ok(None);
        }

        match line.parse::<Board>() {
            Ok(board) => break board,
            Err(e) => {
                writeln!(out, "{e}")?;
                writeln!(
                    out,
                    "Board must be rectangular, and contain only letters or spaces:"
                )?;
            }
        }
    };

    writeln!(out, "Enter word lengths, separated by commas:")?;

    loop {
        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        if is_exit(&line) {
            return Ok(None);
        }

        let lengths = match parse_lengths(&line) {
            Ok(lengths) => lengths,
            Err(_) => {
                writeln!(
                    out,
                    "Please enter numbers separated by commas (or \"{EXIT}\"):"
                )?;
                continue;
            }
        };

        match Puzzle::new(board.clone(), lengths) {
            Ok(puzzle) => return Ok(Some(puzzle)),
            Err(PuzzleError::LengthMismatch { expected, .. }) => {
                writeln!(out, "Expected a total of {expected}, try again:")?;
            }
            Err(e) => writeln!(out, "{e}, try again:")?,
        }
    }
}

/// Print each distinct word sequence as soon as it is found
fn print_solutions<W: Write>(
    out: &mut W,
    solver: &Solver<'_>,
    puzzle: &Puzzle,
    mode: SearchMode,
) -> Result<()> {
    let mut seen = DistinctWords::new();

    match mode {
        SearchMode::Sequential => {
            for solution in solver.solve(puzzle.board(), puzzle.lengths()) {
                if seen.insert(&solution) {
                    writeln!(out, "{solution}")?;
                }
            }
        }
        SearchMode::Parallel => {
            for solution in solver.solve_parallel(puzzle.board(), puzzle.lengths()) {
                if seen.insert(&solution) {
                    writeln!(out, "{solution}")?;
                }
            }
        }
    }

    if seen.is_empty() {
        writeln!(out, "No solutions found.")?;
    }
    Ok(())
}

/// Read one line without its terminator; spaces are kept since they mark blank tiles
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT)
}
