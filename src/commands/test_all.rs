//! Batch self-play
//!
//! Runs the solver against many solutions and reports how quickly each one
//! was found.

use super::solve::{SolveResult, solve_with};
use crate::core::Word;
use crate::output::formatters::{alphabet_to_string, create_progress_bar, suggestions_to_string};
use crate::solver::{MAX_GUESSES, Solver};
use crate::wordlists::{WordSet, loader};
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

/// Where the solutions of a batch come from
#[derive(Debug, Clone, Copy)]
pub enum SolutionSource<'a> {
    /// Words named on the command line
    Listed(&'a [String]),
    /// First five characters of each line of a file
    File(&'a Path),
    /// Random dictionary words above the solution frequency
    Random,
}

/// Statistics from one batch
#[derive(Debug)]
pub struct TestStatistics {
    pub results: Vec<SolveResult>,
    pub hard: bool,
    pub elapsed: Duration,
    /// Guess count → number of solutions solved in that many guesses
    pub distribution: FxHashMap<usize, usize>,
}

impl TestStatistics {
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.distribution.values().sum()
    }

    #[must_use]
    pub fn solved_in(&self, guesses: usize) -> usize {
        self.distribution.get(&guesses).copied().unwrap_or(0)
    }

    pub fn unsolved(&self) -> impl Iterator<Item = Word> + '_ {
        self.results
            .iter()
            .filter(|result| !result.solved)
            .map(|result| result.solution)
    }

    fn percent(&self, count: usize) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            count as f64 / self.results.len() as f64 * 100.0
        }
    }
}

/// Pick the solutions for a batch
///
/// Malformed listed words and file lines are skipped. Well-formed words
/// outside the dictionary are kept; the solver cannot find them, so they
/// count as unsolved. When a list or file yields nothing, `count` random
/// solutions are drawn instead (zero draws every one).
///
/// # Errors
///
/// Returns an error if the solutions file cannot be read.
pub fn select_solutions<R: Rng + ?Sized>(
    words: &WordSet,
    source: SolutionSource<'_>,
    count: usize,
    solution_frequency: f64,
    rng: &mut R,
) -> Result<Vec<Word>> {
    let chosen = match source {
        SolutionSource::Listed(texts) => loader::words_from_texts(texts),
        SolutionSource::File(path) => loader::load_solutions(path)
            .with_context(|| format!("Failed to read solutions from {}", path.display()))?,
        SolutionSource::Random => Vec::new(),
    };

    if chosen.is_empty() {
        if !matches!(source, SolutionSource::Random) {
            log::warn!("no valid solutions given, picking {count} at random");
        }
        return Ok(sample_solutions(words, count, solution_frequency, rng));
    }
    for solution in chosen.iter().filter(|solution| !words.contains(solution)) {
        log::warn!("{solution} is not in the dictionary and cannot be solved");
    }
    Ok(chosen)
}

fn sample_solutions<R: Rng + ?Sized>(
    words: &WordSet,
    count: usize,
    solution_frequency: f64,
    rng: &mut R,
) -> Vec<Word> {
    let pool = words.above(solution_frequency);
    if count == 0 || count >= pool.len() {
        return pool.iter().map(|entry| entry.word).collect();
    }
    pool.choose_multiple(rng, count)
        .map(|entry| entry.word)
        .collect()
}

/// Self-play every solution in parallel
#[must_use]
pub fn run_test_all(solver: &Solver<'_>, solutions: &[Word], show_progress: bool) -> TestStatistics {
    log::info!("testing {} solutions", solutions.len());

    let pb = if show_progress {
        ProgressBar::new(solutions.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let initial = solver.initial_suggestions();
    let results: Vec<SolveResult> = solutions
        .par_iter()
        .map(|&solution| {
            let result = solve_with(solver, solution, &initial);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_and_clear();
    let elapsed = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for guesses in results.iter().filter_map(SolveResult::solved_in) {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let stats = TestStatistics {
        results,
        hard: solver.options().hard,
        elapsed,
        distribution,
    };
    log::info!(
        "solved {}/{} in {:.2}s",
        stats.solved(),
        stats.total(),
        stats.elapsed.as_secs_f64()
    );
    stats
}

/// Write the batch report
///
/// Verbosity 1 adds each solution's guesses; 2 adds per-guess detail.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statistics(out: &mut impl Write, stats: &TestStatistics, verbosity: u8) -> Result<()> {
    if verbosity > 0 {
        for result in &stats.results {
            write_result(out, result, verbosity)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", "═".repeat(60))?;
    writeln!(out, " {}", "Test Results".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60))?;
    writeln!(out, "  Words tested: {}", stats.total())?;
    writeln!(out, "  Hard mode:    {}", if stats.hard { "yes" } else { "no" })?;
    writeln!(out, "  Time:         {:.2}s", stats.elapsed.as_secs_f64())?;
    writeln!(out)?;

    let most = stats.distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=MAX_GUESSES {
        let count = stats.solved_in(guesses);
        let bar = create_progress_bar(count as f64, most as f64, 30);
        writeln!(
            out,
            "  Solved in {guesses}: {} {count:5} ({:5.1}%)",
            bar.green(),
            stats.percent(count)
        )?;
    }

    let unsolved: Vec<Word> = stats.unsolved().collect();
    writeln!(
        out,
        "  Unsolved:    {} {:5} ({:5.1}%)",
        " ".repeat(30),
        unsolved.len(),
        stats.percent(unsolved.len())
    )?;
    if !unsolved.is_empty() {
        let list: Vec<&str> = unsolved.iter().map(Word::as_str).collect();
        writeln!(out, "  {}", list.join(" ").red())?;
    }
    Ok(())
}

fn write_result(out: &mut impl Write, result: &SolveResult, verbosity: u8) -> Result<()> {
    let guesses: Vec<&str> = result.steps.iter().map(|s| s.guess.as_str()).collect();
    let status = match result.solved_in() {
        Some(n) => format!("solved in {n}").green(),
        None => "unsolved".red(),
    };
    writeln!(out, "{}: {} ({status})", result.solution, guesses.join(" "))?;

    if verbosity > 1 {
        for (turn, step) in result.steps.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} {} {}  pool {}",
                turn + 1,
                step.guess,
                step.outcome,
                step.outcome.to_emoji(),
                step.pool_size
            )?;
            writeln!(out, "     suggested: {}", suggestions_to_string(&step.suggestions))?;
            let matches: Vec<&str> = step.matches.iter().map(Word::as_str).collect();
            writeln!(out, "     {} matches: {}", step.remaining, matches.join(" "))?;
            writeln!(out, "     {}", alphabet_to_string(&step.alphabet))?;
        }
    }
    Ok(())
}
