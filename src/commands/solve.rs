//! Word solving command
//!
//! Self-plays one puzzle against a known solution and records every step.

use crate::core::{Error, Outcome, Word};
use crate::solver::{
    CandidateSet, ConstraintSet, LetterStatus, MAX_GUESSES, Pool, Solver, WordScore,
};

/// Remaining candidates listed per step
const SHOWN_MATCHES: usize = 5;

/// Result of self-playing one solution
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub solution: Word,
    pub solved: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    /// Top suggestions the guess was picked from
    pub suggestions: Vec<WordScore>,
    /// Number of words the suggestions were scored over
    pub pool_size: usize,
    pub guess: Word,
    pub outcome: Outcome,
    /// Candidates left after this guess
    pub remaining: usize,
    /// First few of those candidates
    pub matches: Vec<Word>,
    pub alphabet: Vec<(u8, LetterStatus)>,
}

impl SolveResult {
    /// Number of guesses made
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    /// Guess count if the puzzle was solved
    #[must_use]
    pub fn solved_in(&self) -> Option<usize> {
        self.solved.then(|| self.steps.len())
    }

    pub fn guesses(&self) -> impl Iterator<Item = Word> + '_ {
        self.steps.iter().map(|step| step.guess)
    }
}

/// Validate `target` against the dictionary and self-play it
///
/// # Errors
///
/// Returns an error if the target is malformed or not a dictionary word.
pub fn solve_word(solver: &Solver<'_>, target: &str) -> Result<SolveResult, Error> {
    let solution = solver.words().validate(target)?;
    Ok(solve_with(solver, solution, &solver.initial_suggestions()))
}

/// Self-play `solution`, opening with the precomputed `initial` suggestions
///
/// After the opening, suggestions come from the guess pool in normal mode and
/// from the candidates in hard mode or on the last guess. The top suggestion
/// is always played. Stops when solved, after `MAX_GUESSES`, or when no
/// candidate is left.
#[must_use]
pub fn solve_with(solver: &Solver<'_>, solution: Word, initial: &[WordScore]) -> SolveResult {
    let options = solver.options();
    let mut constraints = ConstraintSet::new();
    let mut candidates = CandidateSet::full(solver.words(), options.guess_frequency);
    let mut steps = Vec::with_capacity(MAX_GUESSES);
    let mut solved = false;

    for turn in 1..=MAX_GUESSES {
        let pool = if options.hard || turn == MAX_GUESSES {
            Pool::Candidates
        } else {
            Pool::Guesses
        };
        let pool_size = match pool {
            Pool::Candidates => candidates.len(),
            Pool::Guesses => solver.guess_pool().len(),
        };
        let suggestions = if turn == 1 {
            initial.to_vec()
        } else {
            solver.suggest_for(&candidates, &constraints, pool)
        };

        let Some(guess) = suggestions.first().map(|s| s.word) else {
            log::debug!("{solution}: no candidates left after {} guesses", steps.len());
            break;
        };

        let outcome = Outcome::compute(&guess, &solution);
        constraints.update(&guess, &outcome);
        candidates = candidates.refine(&constraints, options.guess_frequency);

        steps.push(GuessStep {
            suggestions,
            pool_size,
            guess,
            outcome,
            remaining: candidates.len(),
            matches: candidates.words().take(SHOWN_MATCHES).copied().collect(),
            alphabet: constraints.alphabet(),
        });

        if outcome.is_solved() {
            solved = true;
            break;
        }
        if candidates.is_empty() {
            break;
        }
    }

    SolveResult {
        solution,
        solved,
        steps,
    }
}
