//! Letter frequency analysis
//!
//! Counts how many candidates contain each letter, overall and per position,
//! then masks out counts that would only re-discover what the constraints
//! already say.

use super::constraints::ConstraintSet;
use crate::core::{
    ALPHABET_LEN, WORD_LEN, Word, checked_letter_index, index_letter, letter_index,
};

const NO_COUNTS: [u32; WORD_LEN] = [0; WORD_LEN];

/// Letter statistics over a population of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Words containing the letter at least once
    overall: [u32; ALPHABET_LEN],
    /// Words holding the letter at each position
    by_position: [[u32; WORD_LEN]; ALPHABET_LEN],
    population: usize,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self {
            overall: [0; ALPHABET_LEN],
            by_position: [[0; WORD_LEN]; ALPHABET_LEN],
            population: 0,
        }
    }
}

impl FrequencyTable {
    /// Raw counting pass over `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::solver::FrequencyTable;
    ///
    /// let words = [Word::new("happy").unwrap(), Word::new("abbey").unwrap()];
    /// let table = FrequencyTable::count(&words);
    ///
    /// assert_eq!(table.overall(b'A'), 2);
    /// assert_eq!(table.overall(b'P'), 1);
    /// assert_eq!(table.at(b'P', 2), 1);
    /// ```
    #[must_use]
    pub fn count<'w>(words: impl IntoIterator<Item = &'w Word>) -> Self {
        let mut table = Self::default();
        for word in words {
            table.population += 1;
            for letter in word.distinct_letters() {
                table.overall[letter_index(letter)] += 1;
            }
            for (position, &letter) in word.letters().iter().enumerate() {
                table.by_position[letter_index(letter)][position] += 1;
            }
        }
        table
    }

    /// Masking pass: zero every count that `constraints` already settle
    ///
    /// Applying it more than once changes nothing.
    pub fn mask(&mut self, constraints: &ConstraintSet) {
        for index in 0..ALPHABET_LEN {
            let Some(rule) = constraints.rule(index_letter(index)) else {
                continue;
            };

            if rule.is_absent() {
                self.overall[index] = 0;
                self.by_position[index] = [0; WORD_LEN];
                continue;
            }

            if rule.min > 0 {
                self.overall[index] = 0;
            }
            for position in 0..WORD_LEN {
                if rule.is_confirmed_at(position) || rule.is_excluded_at(position) {
                    self.by_position[index][position] = 0;
                }
            }
        }
    }

    /// Count `candidates`, then mask with `constraints`
    #[must_use]
    pub fn analyze<'w>(
        candidates: impl IntoIterator<Item = &'w Word>,
        constraints: &ConstraintSet,
    ) -> Self {
        let mut table = Self::count(candidates);
        table.mask(constraints);
        table
    }

    /// Candidates containing `letter`; zero for non-letters
    #[inline]
    #[must_use]
    pub fn overall(&self, letter: u8) -> u32 {
        checked_letter_index(letter).map_or(0, |index| self.overall[index])
    }

    /// Count of `letter` at `position`
    #[inline]
    #[must_use]
    pub fn at(&self, letter: u8, position: usize) -> u32 {
        self.by_position(letter).get(position).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn by_position(&self, letter: u8) -> &[u32; WORD_LEN] {
        checked_letter_index(letter).map_or(&NO_COUNTS, |index| &self.by_position[index])
    }

    /// Number of words counted
    #[inline]
    #[must_use]
    pub const fn population(&self) -> usize {
        self.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use proptest::prelude::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn happy() -> ConstraintSet {
        let mut constraints = ConstraintSet::new();
        constraints
            .update_from_str(&Word::new("happy").unwrap(), "01210")
            .unwrap();
        constraints
    }

    #[test]
    fn raw_counts() {
        let sample = words(&["happy", "abbey", "pedal"]);
        let table = FrequencyTable::count(&sample);

        assert_eq!(table.population(), 3);
        assert_eq!(table.overall(b'A'), 3);
        assert_eq!(table.overall(b'B'), 1);
        assert_eq!(table.overall(b'H'), 1);
        assert_eq!(table.overall(b'P'), 2);
        assert_eq!(table.overall(b'Y'), 2);
        assert_eq!(table.overall(b'Z'), 0);

        // Repeated letters count once overall but at every position
        assert_eq!(table.by_position(b'A'), &[1, 1, 0, 1, 0]);
        assert_eq!(table.by_position(b'B'), &[0, 1, 1, 0, 0]);
        assert_eq!(table.by_position(b'P'), &[1, 0, 1, 1, 0]);
        assert_eq!(table.by_position(b'Y'), &[0, 0, 0, 0, 2]);
    }

    #[test]
    fn masked_counts() {
        let sample = words(&["happy", "abbey", "pedal"]);
        let table = FrequencyTable::analyze(&sample, &happy());

        // H and Y never occur
        assert_eq!(table.overall(b'H'), 0);
        assert_eq!(table.by_position(b'H'), &[0; WORD_LEN]);
        assert_eq!(table.overall(b'Y'), 0);
        assert_eq!(table.by_position(b'Y'), &[0; WORD_LEN]);

        // A is known present and not at position 1
        assert_eq!(table.overall(b'A'), 0);
        assert_eq!(table.by_position(b'A'), &[1, 0, 0, 1, 0]);

        // P is confirmed at 2 and excluded at 3
        assert_eq!(table.overall(b'P'), 0);
        assert_eq!(table.by_position(b'P'), &[1, 0, 0, 0, 0]);

        // B was never guessed
        assert_eq!(table.overall(b'B'), 1);
        assert_eq!(table.by_position(b'B'), &[0, 1, 1, 0, 0]);
    }

    #[test]
    fn empty_population() {
        let table = FrequencyTable::analyze(std::iter::empty::<&Word>(), &happy());
        assert_eq!(table, FrequencyTable::default());
        assert_eq!(table.population(), 0);
    }

    #[test]
    fn unconstrained_mask_changes_nothing() {
        let sample = words(&["crane", "slate", "sissy"]);
        let raw = FrequencyTable::count(&sample);
        let mut masked = raw.clone();
        masked.mask(&ConstraintSet::new());
        assert_eq!(raw, masked);
    }

    proptest! {
        #[test]
        fn mask_is_idempotent(
            pool in prop::collection::vec("[A-H]{5}", 1..20),
            guess in "[A-H]{5}",
            solution in "[A-H]{5}",
        ) {
            let pool: Vec<Word> = pool.iter().map(|t| Word::new(t).unwrap()).collect();
            let guess = Word::new(&guess).unwrap();
            let solution = Word::new(&solution).unwrap();
            let constraints =
                ConstraintSet::new().with_outcome(&guess, &Outcome::compute(&guess, &solution));

            let once = FrequencyTable::analyze(&pool, &constraints);
            let mut twice = once.clone();
            twice.mask(&constraints);
            prop_assert_eq!(&once, &twice);

            for letter in b'A'..=b'H' {
                if constraints.is_absent(letter) {
                    prop_assert_eq!(once.overall(letter), 0);
                    prop_assert_eq!(once.by_position(letter), &[0; WORD_LEN]);
                }
            }
        }
    }

    #[test]
    fn lookups_of_non_letters_are_zero() {
        let table = FrequencyTable::count(&words(&["happy", "abbey"]));
        assert_eq!(table.overall(b'a'), table.overall(b'A'));
        assert_eq!(table.at(b'p', 2), 1);
        assert_eq!(table.overall(b'#'), 0);
        assert_eq!(table.at(b'{', 0), 0);
        assert_eq!(table.at(b'A', WORD_LEN), 0);
        assert_eq!(table.by_position(0xFF), &[0; WORD_LEN]);
    }
}
