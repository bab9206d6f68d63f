//! Display functions for command results

use super::formatters::{format_path, render_path};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a puzzle
///
/// With `show_paths`, each word is followed by its tiles and the board it was found on.
pub fn print_solve_result(result: &SolveResult, show_paths: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board ({} letters), lengths {:?}",
        result.puzzle.board().letter_count(),
        result.puzzle.lengths()
    );
    println!("{}", "─".repeat(60).cyan());
    for line in result.puzzle.board().to_string().lines() {
        println!("  {}", line.bright_white().bold());
    }

    for (i, solution) in result.solutions.iter().enumerate() {
        println!(
            "\n{} {}",
            format!("{:>3}.", i + 1).bright_black(),
            solution.to_string().bright_yellow().bold()
        );

        if show_paths {
            let mut board = result.puzzle.board().clone();
            for word in solution.words() {
                println!("     {}: {}", word.word(), format_path(word.path()));
                for line in render_path(&board, word.path()).lines() {
                    println!("       {line}");
                }
                board = board.with_tiles_removed(word.path());
            }
        }
    }

    println!();
    if result.solutions.is_empty() {
        println!("{}", "❌ No solutions found".red().bold());
    } else {
        println!(
            "{}",
            format!(
                "✅ {} solution(s) in {:.3}s ({} search)",
                result.solutions.len(),
                result.duration.as_secs_f64(),
                result.mode.name()
            )
            .green()
            .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards tested:    {}", result.boards);
    println!(
        "   Boards solved:    {}",
        format!("{}", result.solved_boards).green()
    );
    println!(
        "   Solutions found:  {}",
        format!("{}", result.total_solutions).bright_yellow().bold()
    );
    println!(
        "   Most on a board:  {}",
        format!("{}", result.max_solutions).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);
}
