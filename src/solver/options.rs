//! Solver configuration

/// Minimum popularity for a word to be offered as a guess
pub const DEFAULT_GUESS_FREQUENCY: f64 = 1.17;

/// Minimum popularity for a word to be picked as a solution
pub const DEFAULT_SOLUTION_FREQUENCY: f64 = 3.2;

/// Number of suggestions returned per round
pub const SUGGESTION_COUNT: usize = 5;

/// Guesses allowed per puzzle
pub const MAX_GUESSES: usize = 6;

/// Tuning knobs shared by every front end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Only suggest words that could still be the solution
    pub hard: bool,
    pub guess_frequency: f64,
    pub solution_frequency: f64,
    /// How many suggestions to return
    pub suggestions: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            hard: false,
            guess_frequency: DEFAULT_GUESS_FREQUENCY,
            solution_frequency: DEFAULT_SOLUTION_FREQUENCY,
            suggestions: SUGGESTION_COUNT,
        }
    }
}

impl SolverOptions {
    #[must_use]
    pub const fn with_hard(mut self, hard: bool) -> Self {
        self.hard = hard;
        self
    }

    #[must_use]
    pub const fn with_guess_frequency(mut self, guess_frequency: f64) -> Self {
        self.guess_frequency = guess_frequency;
        self
    }
}
