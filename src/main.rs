//! WordBrain Solver - CLI
//!
//! Solve WordBrain puzzles interactively or from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordbrain_solver::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_interactive, solve_puzzle},
    dictionary::{
        EMBEDDED_WORDS, PrefixTree,
        loader::{load_from_file, tree_from_slice},
    },
    output::{print_benchmark_result, print_solve_result},
    solver::{SearchMode, Solver},
};

#[derive(Parser)]
#[command(
    name = "wordbrain_solver",
    about = "WordBrain puzzle solver: every way to clear the board, word by word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited word file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Search mode: sequential (default, streams results) or parallel
    #[arg(short, long, global = true, default_value = "sequential")]
    mode: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt mode (default)
    Play,

    /// Solve a single puzzle
    Solve {
        /// Board rows separated by commas, e.g. "labb,rlti,ecis,mscu" (space = empty tile)
        board: String,

        /// Word lengths separated by commas, e.g. "5,7,4"
        lengths: String,

        /// Show every solution, including ones repeating the same words via other tiles
        #[arg(short, long)]
        all: bool,

        /// Show the tiles used by each word
        #[arg(short, long)]
        paths: bool,

        /// Stop after this many solutions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Benchmark solver performance on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Side length of each square board
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Length of each word (remainder goes to the last word)
        #[arg(short = 'w', long, default_value = "4")]
        word_length: usize,

        /// Random seed for board generation
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Stop each board after this many solutions
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str) -> Result<PrefixTree> {
    match source {
        "embedded" => Ok(tree_from_slice(EMBEDDED_WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to load dictionary '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary)?;
    let solver = Solver::new(&dictionary);
    let mode = SearchMode::from_name(&cli.mode);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&solver, mode),
        Commands::Solve {
            board,
            lengths,
            all,
            paths,
            limit,
        } => {
            let config = SolveConfig {
                mode,
                limit,
                distinct: !all,
                ..SolveConfig::new(board, lengths)
            };
            run_solve_command(config, paths, &solver)
        }
        Commands::Benchmark {
            count,
            size,
            word_length,
            seed,
            limit,
        } => {
            let config = BenchmarkConfig {
                boards: count,
                size,
                word_length,
                seed,
                mode,
                limit,
                ..BenchmarkConfig::default()
            };
            run_benchmark_command(&config, &solver);
            Ok(())
        }
    }
}

fn run_play_command(solver: &Solver<'_>, mode: SearchMode) -> Result<()> {
    println!(
        "WordBrain Solver - {} words loaded",
        solver.dictionary().word_count()
    );
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout().lock();
    run_interactive(&mut reader, &mut out, solver, mode)?;
    Ok(())
}

fn run_solve_command(config: SolveConfig, show_paths: bool, solver: &Solver<'_>) -> Result<()> {
    let result = solve_puzzle(config, solver).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, show_paths);
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig, solver: &Solver<'_>) {
    println!(
        "Running benchmark on {} random {}x{} boards (seed {})...",
        config.boards, config.size, config.size, config.seed
    );
    let result = run_benchmark(solver, config);
    print_benchmark_result(&result);
}
