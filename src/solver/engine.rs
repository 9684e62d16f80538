//! Main solver interface

use super::constraints::ConstraintSet;
use super::filter::{self, CandidateSet};
use super::frequency::FrequencyTable;
use super::options::SolverOptions;
use super::scorer::{self, WordScore};
use crate::core::Word;
use crate::wordlists::{WordEntry, WordSet, meets_threshold};

/// Which words a round of suggestions is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Only words that could still be the solution
    Candidates,
    /// Every word above the guess frequency
    Guesses,
}

/// Suggests guesses for one dictionary and configuration
///
/// Holds no per-puzzle state; the caller owns the `ConstraintSet` of each
/// attempt, so one solver can serve many attempts concurrently.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    words: &'a WordSet,
    guess_pool: Vec<&'a WordEntry>,
    options: SolverOptions,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub fn new(words: &'a WordSet, options: SolverOptions) -> Self {
        let guess_pool = words.above(options.guess_frequency);
        log::debug!(
            "solver ready: {} words, {} above guess frequency {}",
            words.len(),
            guess_pool.len(),
            options.guess_frequency
        );
        Self {
            words,
            guess_pool,
            options,
        }
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &'a WordSet {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Words eligible as guesses
    #[inline]
    #[must_use]
    pub fn guess_pool(&self) -> &[&'a WordEntry] {
        &self.guess_pool
    }

    /// True if `word` is a dictionary word above the guess frequency
    #[must_use]
    pub fn is_guessable(&self, word: &Word) -> bool {
        self.words
            .get(word)
            .is_some_and(|entry| meets_threshold(entry.popularity, self.options.guess_frequency))
    }

    /// Pool used by `suggest` for the configured mode
    #[must_use]
    pub const fn default_pool(&self) -> Pool {
        if self.options.hard {
            Pool::Candidates
        } else {
            Pool::Guesses
        }
    }

    /// Words above the guess frequency that satisfy `constraints`
    #[must_use]
    pub fn candidates(&self, constraints: &ConstraintSet) -> CandidateSet<'a> {
        filter::apply(self.words, constraints, self.options.guess_frequency)
    }

    /// Best next guesses given everything known so far
    ///
    /// Returns an empty vector when no word satisfies `constraints`, and the
    /// single remaining word when only one does.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::solver::{ConstraintSet, Solver, SolverOptions};
    /// use wordle_assist::wordlists::WordSet;
    ///
    /// let words = WordSet::embedded();
    /// let solver = Solver::new(&words, SolverOptions::default());
    ///
    /// let suggestions = solver.suggest(&ConstraintSet::new());
    /// assert_eq!(suggestions.len(), 5);
    /// assert!(suggestions[0].score >= suggestions[4].score);
    /// ```
    #[must_use]
    pub fn suggest(&self, constraints: &ConstraintSet) -> Vec<WordScore> {
        let candidates = self.candidates(constraints);
        self.suggest_for(&candidates, constraints, self.default_pool())
    }

    /// Suggestions for an already filtered candidate set
    ///
    /// `candidates` must be the words satisfying `constraints`.
    #[must_use]
    pub fn suggest_for(
        &self,
        candidates: &CandidateSet<'a>,
        constraints: &ConstraintSet,
        pool: Pool,
    ) -> Vec<WordScore> {
        if candidates.is_empty() {
            log::debug!("no candidates satisfy the constraints");
            return Vec::new();
        }

        // A lone candidate is the answer; nothing left to learn
        if let Some(entry) = candidates.single() {
            return vec![WordScore {
                word: entry.word,
                score: 0,
                popularity: entry.popularity,
            }];
        }

        let table = FrequencyTable::analyze(candidates.words(), constraints);
        let pool = match pool {
            Pool::Candidates => candidates.entries(),
            Pool::Guesses => self.guess_pool(),
        };
        log::debug!(
            "scoring {} pool words against {} candidates",
            pool.len(),
            table.population()
        );

        let mut scores = scorer::rank(pool, &table);
        scores.truncate(self.options.suggestions);
        scores
    }

    /// Suggestions before any guess has been made
    ///
    /// Identical for every attempt with the same options, so callers running
    /// many attempts compute it once.
    #[must_use]
    pub fn initial_suggestions(&self) -> Vec<WordScore> {
        self.suggest(&ConstraintSet::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Word};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn small_set() -> WordSet {
        WordSet::from_pairs(&[
            ("hippy", 2.1),
            ("poppy", 3.0),
            ("apple", 4.6),
            ("plant", 4.4),
            ("crane", 3.5),
            ("slate", 3.3),
        ])
    }

    fn after(guess: &str, solution: &str) -> ConstraintSet {
        let guess = word(guess);
        ConstraintSet::new().with_outcome(&guess, &Outcome::compute(&guess, &word(solution)))
    }

    #[test]
    fn initial_suggestions_are_ranked() {
        let words = WordSet::embedded();
        let solver = Solver::new(&words, SolverOptions::default());
        let suggestions = solver.initial_suggestions();

        assert_eq!(suggestions.len(), 5);
        assert!(suggestions.windows(2).all(|w| w[0].rank_cmp(&w[1]).is_le()));
        for suggestion in &suggestions {
            assert!(suggestion.popularity >= SolverOptions::default().guess_frequency);
        }
    }

    #[test]
    fn single_candidate_bypasses_scoring() {
        let words = small_set();
        let solver = Solver::new(&words, SolverOptions::default());
        let mut constraints = ConstraintSet::new();
        constraints.update_from_str(&word("happy"), "01210").unwrap();

        let suggestions = solver.suggest(&constraints);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, word("apple"));
        assert_eq!(suggestions[0].score, 0);
    }

    #[test]
    fn contradictory_constraints_give_no_suggestions() {
        let words = small_set();
        let solver = Solver::new(&words, SolverOptions::default().with_hard(true));
        let mut constraints = ConstraintSet::new();
        constraints.update_from_str(&word("crane"), "22222").unwrap();
        constraints.update_from_str(&word("slate"), "22222").unwrap();

        assert!(solver.candidates(&constraints).is_empty());
        assert!(solver.suggest(&constraints).is_empty());
    }

    #[test]
    fn hard_mode_suggests_only_candidates() {
        let words = WordSet::embedded();
        let solver = Solver::new(&words, SolverOptions::default().with_hard(true));
        let constraints = after("crane", "slate");

        let candidates = solver.candidates(&constraints);
        assert!(candidates.len() > 1);

        let suggestions = solver.suggest(&constraints);
        assert_eq!(suggestions.len(), candidates.len().min(5));
        assert!(suggestions.iter().all(|s| constraints.is_satisfied_by(&s.word)));
    }

    #[test]
    fn normal_mode_draws_from_guess_pool() {
        let words = WordSet::embedded();
        let solver = Solver::new(&words, SolverOptions::default());
        let constraints = after("crane", "slate");
        let candidates = solver.candidates(&constraints);

        let hard = solver.suggest_for(&candidates, &constraints, Pool::Candidates);
        let normal = solver.suggest_for(&candidates, &constraints, Pool::Guesses);
        assert_eq!(normal.len(), 5);
        assert!(normal[0].score >= hard[0].score);
    }

    #[test]
    fn guess_frequency_limits_pool() {
        let words = small_set();
        let solver = Solver::new(&words, SolverOptions::default().with_guess_frequency(3.2));
        assert_eq!(solver.guess_pool().len(), 4);

        let everything = Solver::new(&words, SolverOptions::default().with_guess_frequency(0.0));
        assert_eq!(everything.guess_pool().len(), words.len());

        assert!(solver.is_guessable(&word("apple")));
        assert!(!solver.is_guessable(&word("hippy")));
        assert!(everything.is_guessable(&word("hippy")));
        assert!(!everything.is_guessable(&word("faith")));
    }

    #[test]
    fn suggest_is_deterministic() {
        let words = WordSet::embedded();
        let solver = Solver::new(&words, SolverOptions::default());
        let constraints = after("rates", "faith");
        assert_eq!(solver.suggest(&constraints), solver.suggest(&constraints));
    }
}
