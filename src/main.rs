//! Solvify - CLI
//!
//! Interactive and automatic word deduction for Wordle-style puzzles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solvify::{
    Error,
    commands::{SessionEnd, SolveConfig, run_benchmark, run_simple, sample_targets, solve_word},
    core::{FeedbackSymbols, GameSetting},
    output::{print_benchmark_result, print_games, print_solve_result},
    solver::DeductionEngine,
    wordlists::{
        WORDLIST,
        loader::{load_from_file, words_from_slice},
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "solvify",
    about = "Word deduction solver for Wordle-style puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game: wordle (default), 6mal5, wördle
    #[arg(short, long, global = true, default_value = "wordle")]
    game: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter feedback for each proposed guess
    Play,

    /// Solve a specific target word automatically
    Solve {
        /// The target word to solve
        word: String,

        /// Show score and candidate counts per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Auto-solve random words from the list and report statistics
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the built-in games
    Games,
}

/// Load the raw word list based on the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDLIST)),
        path => Ok(load_from_file(path)?),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Games = command {
        print_games(&GameSetting::catalog());
        return Ok(());
    }

    let game = GameSetting::find(&cli.game).ok_or_else(|| Error::UnknownGame(cli.game.clone()))?;
    let words = load_wordlist(&cli.wordlist)?;
    let symbols = FeedbackSymbols::default();

    match command {
        Commands::Play => run_play_command(symbols, game, &words),
        Commands::Solve { word, verbose } => run_solve_command(symbols, game, &words, word, verbose),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(symbols, &game, &words, count, seed);
            Ok(())
        }
        Commands::Games => Ok(()),
    }
}

fn run_play_command(symbols: FeedbackSymbols, game: GameSetting, words: &[String]) -> Result<()> {
    let mut engine = DeductionEngine::new(symbols, game, words);
    match run_simple(&mut engine).context("interactive session failed")? {
        SessionEnd::Won { .. } | SessionEnd::Quit => Ok(()),
        SessionEnd::Exhausted => Err(Error::NoCandidates.into()),
    }
}

fn run_solve_command(
    symbols: FeedbackSymbols,
    game: GameSetting,
    words: &[String],
    word: String,
    verbose: bool,
) -> Result<()> {
    let mut engine = DeductionEngine::new(symbols, game, words);
    let result = solve_word(SolveConfig::new(word), &mut engine)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    symbols: FeedbackSymbols,
    game: &GameSetting,
    words: &[String],
    count: usize,
    seed: Option<u64>,
) {
    let candidates = game.prepare_wordlist(words);
    let targets = sample_targets(&candidates, count, seed);
    println!(
        "Running benchmark on {} random words from {} candidates...",
        targets.len(),
        candidates.len()
    );

    let result = run_benchmark(game, symbols, words, &targets, true);
    print_benchmark_result(&result);
}
