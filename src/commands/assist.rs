//! Console solve assistant
//!
//! Suggests guesses for a puzzle played elsewhere: the user reports each
//! guess and its outcome, and the suggestions narrow accordingly.

use super::console::{Console, is_quit};
use crate::core::{Error, Outcome, Word};
use crate::output::formatters::{alphabet_to_string, suggestions_to_string, tiles_to_string};
use crate::solver::{ConstraintSet, MAX_GUESSES, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

enum Flow {
    Next,
    Quit,
}

/// Run the assistant until the user quits or the input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist(solver: &Solver<'_>, input: impl BufRead, out: impl Write) -> Result<()> {
    let mut console = Console::new(input, out);
    writeln!(console.out, "{}", "Wordle assistant".bright_cyan().bold())?;
    writeln!(
        console.out,
        "Enter each guess, then its outcome: 0/-/B absent, 1/Y present, 2/G exact."
    )?;
    writeln!(console.out, "Press Enter to take the top suggestion, 'q' to quit.")?;

    loop {
        if let Flow::Quit = assist_puzzle(&mut console, solver)? {
            break;
        }
        if !console.confirm("Solve another?")? {
            break;
        }
    }
    Ok(())
}

fn assist_puzzle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    solver: &Solver<'_>,
) -> Result<Flow> {
    let mut constraints = ConstraintSet::new();

    for turn in 1..=MAX_GUESSES {
        let candidates = solver.candidates(&constraints);
        let suggestions = solver.suggest_for(&candidates, &constraints, solver.default_pool());
        writeln!(console.out)?;
        if candidates.is_empty() {
            writeln!(console.out, "Turn {turn}: no suggestions")?;
            writeln!(
                console.out,
                "{}",
                "No dictionary word fits those outcomes; the answer may be missing from the \
                 word list or an outcome was mistyped."
                    .red()
            )?;
        } else if let Some(only) = candidates.single() {
            writeln!(console.out, "The answer must be {}", only.word.to_string().green().bold())?;
        } else {
            writeln!(console.out, "Turn {turn}: {} possible answers", candidates.len())?;
            writeln!(console.out, "Suggestions: {}", suggestions_to_string(&suggestions))?;
        }

        let Some(guess) = read_guess(console, suggestions.first().map(|s| s.word))? else {
            return Ok(Flow::Quit);
        };
        let Some(outcome) = read_outcome(console)? else {
            return Ok(Flow::Quit);
        };

        constraints.update(&guess, &outcome);
        writeln!(console.out, "{}", tiles_to_string(&outcome.tiles(&guess)))?;
        writeln!(console.out, "{}", alphabet_to_string(&constraints.alphabet()))?;

        if outcome.is_solved() {
            writeln!(
                console.out,
                "{}",
                format!("Solved in {turn}!").bright_green().bold()
            )?;
            return Ok(Flow::Next);
        }
    }

    writeln!(console.out, "{}", "Out of guesses.".yellow())?;
    Ok(Flow::Next)
}

/// Any well-formed word is accepted, in the dictionary or not
fn read_guess<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    top: Option<Word>,
) -> Result<Option<Word>> {
    loop {
        let Some(text) = console.prompt("Guess")? else {
            return Ok(None);
        };
        if is_quit(&text) {
            return Ok(None);
        }
        if text.is_empty() {
            match top {
                Some(word) => {
                    writeln!(console.out, "Guessing {word}")?;
                    return Ok(Some(word));
                }
                None => continue,
            }
        }
        match Word::new(&text) {
            Ok(word) => return Ok(Some(word)),
            Err(e) => writeln!(console.out, "{}", Error::from(e).to_string().red())?,
        }
    }
}

fn read_outcome<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Outcome>> {
    loop {
        let Some(text) = console.prompt("Outcome")? else {
            return Ok(None);
        };
        if is_quit(&text) {
            return Ok(None);
        }
        match Outcome::parse(&text) {
            Ok(outcome) => return Ok(Some(outcome)),
            Err(e) => writeln!(console.out, "{}", e.to_string().red())?,
        }
    }
}
