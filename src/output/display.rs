//! Display functions for command results

use super::formatters::{alphabet_to_string, suggestions_to_string, tiles_to_string};
use crate::commands::SolveResult;
use crate::core::Word;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of solving a word
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_solve_result(result: &SolveResult, verbose: bool) -> io::Result<()> {
    write_solve_result(&mut io::stdout().lock(), result, verbose)
}

/// Write the path taken to a solution
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_solve_result(
    out: &mut impl Write,
    result: &SolveResult,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Solving: {}",
        result.solution.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        if verbose {
            writeln!(
                out,
                "\nSuggestions from {} words: {}",
                step.pool_size,
                suggestions_to_string(&step.suggestions)
            )?;
        }
        writeln!(
            out,
            "Turn {turn}: {} {}",
            tiles_to_string(&step.outcome.tiles(&step.guess)),
            step.outcome.to_emoji()
        )?;

        if verbose {
            let matches: Vec<&str> = step.matches.iter().map(Word::as_str).collect();
            let more = if step.remaining > matches.len() { " ..." } else { "" };
            writeln!(
                out,
                "  {} candidates: {}{more}",
                step.remaining,
                matches.join(" ")
            )?;
            writeln!(out, "  {}", alphabet_to_string(&step.alphabet))?;
        }
    }

    writeln!(out)?;
    if result.solved {
        writeln!(
            out,
            "{}",
            format!("✅ Solved in {} guesses!", result.guess_count())
                .green()
                .bold()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guess_count())
                .red()
                .bold()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::solve_word;
    use crate::solver::{Solver, SolverOptions};
    use crate::wordlists::WordSet;

    fn render(verbose: bool) -> String {
        colored::control::set_override(false);
        let words = WordSet::embedded();
        let solver = Solver::new(&words, SolverOptions::default());
        let result = solve_word(&solver, "faith").unwrap();

        let mut out = Vec::new();
        write_solve_result(&mut out, &result, verbose).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn brief_path() {
        let text = render(false);
        assert!(text.contains("Solving: FAITH"));
        assert!(text.contains("Turn 1:"));
        assert!(text.contains("Solved in"));
        assert!(!text.contains("candidates:"));
    }

    #[test]
    fn verbose_path_shows_suggestions() {
        let text = render(true);
        assert!(text.contains("Suggestions from"));
        assert!(text.contains("candidates:"));
        assert!(text.contains("🟩🟩🟩🟩🟩"));
    }
}
