//! Console game
//!
//! The program picks a solution and the user guesses it.

use super::console::{Console, is_quit};
use crate::core::{Outcome, Word};
use crate::output::formatters::{alphabet_to_string, tiles_to_string};
use crate::solver::{ConstraintSet, MAX_GUESSES, Solver};
use anyhow::{Result, bail};
use colored::Colorize;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io::{BufRead, Write};

/// How a single game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// Solved with this many guesses
    Won(usize),
    Lost,
    Quit,
}

/// Random dictionary word above the solution frequency
#[must_use]
pub fn pick_solution<R: Rng + ?Sized>(solver: &Solver<'_>, rng: &mut R) -> Option<Word> {
    solver
        .words()
        .above(solver.options().solution_frequency)
        .choose(rng)
        .map(|entry| entry.word)
}

/// Play games with random solutions until the user stops
///
/// # Errors
///
/// Returns an error if no word is frequent enough to be a solution, or if
/// reading input or writing output fails.
pub fn run_play<R: Rng + ?Sized>(
    solver: &Solver<'_>,
    rng: &mut R,
    input: impl BufRead,
    out: impl Write,
) -> Result<()> {
    let mut console = Console::new(input, out);
    writeln!(console.out, "{}", "Guess the word".bright_cyan().bold())?;
    writeln!(
        console.out,
        "{MAX_GUESSES} tries; {}.",
        if solver.options().hard {
            "hard mode: every guess must fit what is already known"
        } else {
            "any dictionary word may be guessed"
        }
    )?;

    loop {
        let Some(solution) = pick_solution(solver, rng) else {
            bail!(
                "No dictionary word has popularity of at least {}",
                solver.options().solution_frequency
            );
        };
        log::debug!("picked solution {solution}");

        if play_game(&mut console, solver, solution)? == GameEnd::Quit {
            break;
        }
        if !console.confirm("Play again?")? {
            break;
        }
    }
    Ok(())
}

/// Play one game against `solution`
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    solver: &Solver<'_>,
    solution: Word,
) -> Result<GameEnd> {
    let mut constraints = ConstraintSet::new();

    for turn in 1..=MAX_GUESSES {
        let Some(guess) = read_guess(console, solver, &constraints, turn)? else {
            return Ok(GameEnd::Quit);
        };

        let outcome = Outcome::compute(&guess, &solution);
        constraints.update(&guess, &outcome);
        writeln!(console.out, "{}", tiles_to_string(&outcome.tiles(&guess)))?;
        writeln!(console.out, "{}", alphabet_to_string(&constraints.alphabet()))?;

        if outcome.is_solved() {
            writeln!(
                console.out,
                "{}",
                format!("Got it in {turn}!").bright_green().bold()
            )?;
            return Ok(GameEnd::Won(turn));
        }
    }

    writeln!(console.out, "Out of tries. The word was {}", solution.to_string().bold())?;
    Ok(GameEnd::Lost)
}

fn read_guess<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    solver: &Solver<'_>,
    constraints: &ConstraintSet,
    turn: usize,
) -> Result<Option<Word>> {
    loop {
        let Some(text) = console.prompt(&format!("Guess {turn}/{MAX_GUESSES}"))? else {
            return Ok(None);
        };
        if is_quit(&text) {
            return Ok(None);
        }

        let word = match Word::new(&text) {
            Ok(word) => word,
            Err(e) => {
                writeln!(console.out, "{}", e.to_string().red())?;
                continue;
            }
        };
        if !solver.is_guessable(&word) {
            writeln!(console.out, "{}", format!("{word} is not in the word list").red())?;
            continue;
        }
        if solver.options().hard && !constraints.is_satisfied_by(&word) {
            writeln!(
                console.out,
                "{}",
                format!("{word} does not fit the earlier outcomes").red()
            )?;
            continue;
        }
        return Ok(Some(word));
    }
}
