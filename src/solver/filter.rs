//! Candidate filtering
//!
//! Narrows a dictionary to the words still consistent with a constraint set.

use super::constraints::ConstraintSet;
use crate::core::Word;
use crate::wordlists::{WordEntry, WordSet, meets_threshold};

/// Dictionary entries still consistent with what is known, in dictionary order
#[derive(Debug, Clone, Default)]
pub struct CandidateSet<'a> {
    entries: Vec<&'a WordEntry>,
}

/// Words of `words` satisfying `constraints` with popularity of at least
/// `min_popularity` (zero disables the threshold)
#[must_use]
pub fn apply<'a>(
    words: &'a WordSet,
    constraints: &ConstraintSet,
    min_popularity: f64,
) -> CandidateSet<'a> {
    CandidateSet::from_entries(words.iter(), constraints, min_popularity)
}

impl<'a> CandidateSet<'a> {
    /// Every entry of `words` above `min_popularity`, with no constraints applied
    #[must_use]
    pub fn full(words: &'a WordSet, min_popularity: f64) -> Self {
        Self {
            entries: words.above(min_popularity),
        }
    }

    fn from_entries(
        entries: impl IntoIterator<Item = &'a WordEntry>,
        constraints: &ConstraintSet,
        min_popularity: f64,
    ) -> Self {
        Self {
            entries: entries
                .into_iter()
                .filter(|entry| {
                    meets_threshold(entry.popularity, min_popularity)
                        && constraints.is_satisfied_by(&entry.word)
                })
                .collect(),
        }
    }

    /// Narrow this set further; the result is never larger than `self`
    #[must_use]
    pub fn refine(&self, constraints: &ConstraintSet, min_popularity: f64) -> Self {
        Self::from_entries(self.entries.iter().copied(), constraints, min_popularity)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[&'a WordEntry] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.entries.iter().map(|entry| &entry.word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|entry| entry.word == *word)
    }

    /// The only remaining entry, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<&'a WordEntry> {
        match self.entries.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn happy() -> ConstraintSet {
        let mut constraints = ConstraintSet::new();
        constraints.update_from_str(&word("happy"), "01210").unwrap();
        constraints
    }

    #[test]
    fn filter_keeps_matches() {
        let words = WordSet::from_pairs(&[
            ("hippy", 2.1),
            ("poppy", 3.0),
            ("apple", 4.6),
            ("plant", 4.4),
        ]);
        let candidates = apply(&words, &happy(), 0.0);

        let texts: Vec<&str> = candidates.words().map(Word::as_str).collect();
        assert_eq!(texts, ["APPLE"]);
        assert_eq!(candidates.single().map(|e| e.word), Some(word("apple")));
    }

    #[test]
    fn filter_applies_popularity_threshold() {
        let words = WordSet::from_pairs(&[
            ("faith", 4.5),
            ("habit", 3.8),
            ("vault", 0.9),
            ("tease", 3.0),
        ]);
        let mut constraints = ConstraintSet::new();
        constraints.update_from_str(&word("rates"), "02100").unwrap();

        assert_eq!(apply(&words, &constraints, 0.0).len(), 3);
        assert_eq!(apply(&words, &constraints, 1.17).len(), 2);
        assert_eq!(apply(&words, &constraints, 4.0).len(), 1);
        assert_eq!(apply(&words, &ConstraintSet::new(), 0.0).len(), 4);
    }

    #[test]
    fn full_matches_unconstrained_filter() {
        let words = WordSet::embedded();
        let full = CandidateSet::full(&words, 1.17);
        let filtered = apply(&words, &ConstraintSet::new(), 1.17);
        assert_eq!(full.len(), filtered.len());
    }

    #[test]
    fn refine_never_grows() {
        let words = WordSet::embedded();
        let solution = word("faith");
        let mut constraints = ConstraintSet::new();
        let mut candidates = CandidateSet::full(&words, 0.0);

        for guess in ["rates", "plain", "habit"] {
            let guess = word(guess);
            constraints.update(&guess, &Outcome::compute(&guess, &solution));
            let next = candidates.refine(&constraints, 0.0);
            assert!(next.len() <= candidates.len());
            assert!(next.contains(&solution));
            candidates = next;
        }
    }

    #[test]
    fn contradictory_constraints_leave_no_candidates() {
        let words = WordSet::embedded();
        let mut constraints = ConstraintSet::new();
        constraints.update_from_str(&word("qzptg"), "11111").unwrap();

        let candidates = apply(&words, &constraints, 0.0);
        assert!(candidates.is_empty());
        assert!(candidates.single().is_none());
    }

    proptest! {
        #[test]
        fn monotonic_shrink(
            solution in 0usize..50,
            guesses in prop::collection::vec(0usize..50, 1..5),
        ) {
            let words = WordSet::embedded();
            let entries = words.entries();
            let solution = entries[solution].word;

            let mut constraints = ConstraintSet::new();
            let mut before = apply(&words, &constraints, 0.0).len();
            for guess in guesses {
                let guess = entries[guess].word;
                constraints.update(&guess, &Outcome::compute(&guess, &solution));
                let candidates = apply(&words, &constraints, 0.0);
                prop_assert!(candidates.len() <= before);
                prop_assert!(candidates.contains(&solution));
                before = candidates.len();
            }
        }
    }
}
