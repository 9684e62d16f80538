//! Wordle Assistant - CLI
//!
//! Letter-frequency Wordle helper with TUI, console, game and batch modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io;
use std::path::PathBuf;
use wordle_assist::{
    commands::{
        SolutionSource, run_assist, run_play, run_test_all, select_solutions, solve_word,
        write_statistics,
    },
    output::print_solve_result,
    solver::{DEFAULT_GUESS_FREQUENCY, DEFAULT_SOLUTION_FREQUENCY, Solver, SolverOptions},
    wordlists::{WordSet, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant ranking guesses by letter and position frequency",
    after_help = "The embedded dictionary is a short list of common words; use -w for a full one.",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hard mode: only suggest and accept words that fit every outcome so far
    #[arg(long, global = true)]
    hard: bool,

    /// Minimum popularity of a word to be guessed (default 1.17, 0 in play mode)
    #[arg(short = 'g', long, global = true)]
    guess_freq: Option<f64>,

    /// Minimum popularity of a word to be a solution
    #[arg(long, global = true, default_value_t = DEFAULT_SOLUTION_FREQUENCY)]
    solution_freq: f64,

    /// Dictionary file with `WORD popularity` lines
    ///
    /// The embedded list holds only a few hundred common words. Pass a full
    /// five-letter vocabulary here for real puzzles and representative tests.
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI assistant (default)
    Tui,

    /// Console assistant: enter guesses and outcomes, get suggestions
    Assist,

    /// Play a game against a random word
    Play,

    /// Self-play a specific solution
    Solve {
        /// The solution to solve
        word: String,

        /// Show suggestions and candidates for each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Self-play a batch of solutions and report statistics
    Test {
        /// Solutions to test
        #[arg(long, num_args = 1..)]
        solutions: Vec<String>,

        /// File with one solution per line
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Number of random solutions to test (0 tests all); also used when
        /// the listed or file solutions are all invalid
        #[arg(short = 'c', long, default_value_t = 1)]
        count: usize,

        /// Repeat for more detail
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },
}

fn load_words(path: Option<&PathBuf>) -> Result<WordSet> {
    let words = match path {
        Some(path) => loader::load_dictionary(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display()))?,
        None => WordSet::embedded(),
    };
    log::debug!("dictionary has {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let words = load_words(cli.wordlist.as_ref())?;
    let default_guess_freq = if matches!(command, Commands::Play) {
        0.0
    } else {
        DEFAULT_GUESS_FREQUENCY
    };
    let options = SolverOptions {
        hard: cli.hard,
        guess_frequency: cli.guess_freq.unwrap_or(default_guess_freq),
        solution_frequency: cli.solution_freq,
        ..SolverOptions::default()
    };
    let solver = Solver::new(&words, options);

    match command {
        Commands::Tui => run_tui_command(solver),
        Commands::Assist => run_assist(&solver, io::stdin().lock(), io::stdout()),
        Commands::Play => run_play(&solver, &mut rand::rng(), io::stdin().lock(), io::stdout()),
        Commands::Solve { word, verbose } => {
            let result =
                solve_word(&solver, &word).with_context(|| format!("Cannot solve '{word}'"))?;
            print_solve_result(&result, verbose)?;
            Ok(())
        }
        Commands::Test {
            solutions,
            file,
            count,
            verbose,
        } => {
            let source = if !solutions.is_empty() {
                SolutionSource::Listed(&solutions)
            } else if let Some(path) = file.as_deref() {
                SolutionSource::File(path)
            } else {
                SolutionSource::Random
            };
            let picked = select_solutions(
                &words,
                source,
                count,
                solver.options().solution_frequency,
                &mut rand::rng(),
            )?;
            let stats = run_test_all(&solver, &picked, true);
            write_statistics(&mut io::stdout().lock(), &stats, verbose)
        }
    }
}

fn run_tui_command(solver: Solver<'_>) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(solver);
    run_tui(app)
}
