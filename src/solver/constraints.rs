//! Constraints accumulated over one puzzle attempt
//!
//! Each guess/outcome pair tightens a per-letter rule: bounds on how often the
//! letter occurs, positions it is known to occupy, and positions it is known
//! not to occupy. Rules only ever tighten, so a solution that produced the
//! observed outcomes keeps satisfying every rule.

use crate::core::{
    ALPHABET_LEN, Error, Mark, Outcome, WORD_LEN, Word, alphabet, checked_letter_index,
    index_letter, letter_index,
};

/// Everything known about one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterRule {
    /// Minimum number of occurrences
    pub min: u8,
    /// Maximum number of occurrences, once an Absent mark has capped it
    pub max: Option<u8>,
    /// Bitmask of positions that must hold this letter
    pub confirmed: u8,
    /// Bitmask of positions that must not hold this letter
    pub excluded: u8,
}

impl LetterRule {
    /// True if no information has been recorded for the letter
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.min == 0 && self.max.is_none() && self.confirmed == 0 && self.excluded == 0
    }

    /// True if the letter is known not to occur at all
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.max, Some(0))
    }

    #[must_use]
    pub const fn is_confirmed_at(&self, position: usize) -> bool {
        self.confirmed & (1 << position) != 0
    }

    #[must_use]
    pub const fn is_excluded_at(&self, position: usize) -> bool {
        self.excluded & (1 << position) != 0
    }

    /// Check a word's occurrences and positions of `letter` against the rule
    fn allows(&self, letter: u8, word: &Word) -> bool {
        let count = word.count_of(letter);
        if count < self.min || self.max.is_some_and(|max| count > max) {
            return false;
        }

        (0..WORD_LEN).all(|i| {
            let here = word.letter_at(i) == letter;
            (here || !self.is_confirmed_at(i)) && !(here && self.is_excluded_at(i))
        })
    }
}

/// What is known about a letter, for alphabet displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    /// Nothing known yet
    Unknown,
    /// Letter does not occur in the solution
    Absent,
    /// Letter occurs but none of its positions is known
    Present,
    /// At least one position of the letter is known
    Placed,
}

/// The conjunction of every rule derived in one puzzle attempt
///
/// A plain value: clone it to snapshot an attempt (undo), and give each
/// concurrent attempt its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstraintSet {
    rules: [LetterRule; ALPHABET_LEN],
}

impl ConstraintSet {
    /// Empty constraints: every word is allowed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what `outcome` reveals about `guess`
    ///
    /// Per distinct guessed letter, with `hits` = its Exact + Present marks:
    /// - Exact positions are confirmed, Present positions excluded
    /// - the minimum count rises to `hits`
    /// - any Absent mark caps the count at `hits` (zero: the letter never
    ///   occurs) and, when `hits > 0`, excludes the Absent positions too
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Outcome, Word};
    /// use wordle_assist::solver::ConstraintSet;
    ///
    /// let mut constraints = ConstraintSet::new();
    /// let guess = Word::new("rates").unwrap();
    /// constraints.update(&guess, &"02100".parse::<Outcome>().unwrap());
    ///
    /// assert!(constraints.is_satisfied_by(&Word::new("faith").unwrap()));
    /// assert!(!constraints.is_satisfied_by(&Word::new("tease").unwrap()));
    /// ```
    pub fn update(&mut self, guess: &Word, outcome: &Outcome) {
        let hits = outcome.hits_by_letter(guess);

        for letter in guess.distinct_letters() {
            let index = letter_index(letter);
            let letter_hits = hits[index];
            let rule = &mut self.rules[index];
            let mut has_absent = false;

            for i in 0..WORD_LEN {
                if guess.letter_at(i) != letter {
                    continue;
                }
                match outcome.mark_at(i) {
                    Mark::Exact => rule.confirmed |= 1 << i,
                    Mark::Present => rule.excluded |= 1 << i,
                    Mark::Absent => {
                        has_absent = true;
                        if letter_hits > 0 {
                            rule.excluded |= 1 << i;
                        }
                    }
                }
            }

            rule.min = rule
                .min
                .max(letter_hits)
                .max(rule.confirmed.count_ones() as u8);
            if has_absent {
                rule.max = Some(rule.max.map_or(letter_hits, |max| max.min(letter_hits)));
            }
        }
    }

    /// Parse `outcome` and record it
    ///
    /// # Errors
    /// Returns `Error::InvalidOutcome` for malformed outcome text; the
    /// constraints are left untouched.
    pub fn update_from_str(&mut self, guess: &Word, outcome: &str) -> Result<Outcome, Error> {
        let outcome = Outcome::parse(outcome)?;
        self.update(guess, &outcome);
        Ok(outcome)
    }

    /// Return a copy with `outcome` recorded
    #[must_use]
    pub fn with_outcome(&self, guess: &Word, outcome: &Outcome) -> Self {
        let mut next = self.clone();
        next.update(guess, outcome);
        next
    }

    /// True iff `word` could still be the solution
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| !rule.is_unconstrained())
            .all(|(index, rule)| rule.allows(index_letter(index), word))
    }

    /// Slot for `letter` in either case; `None` for non-letters
    fn slot(&self, letter: u8) -> Option<&LetterRule> {
        checked_letter_index(letter).map(|index| &self.rules[index])
    }

    /// Rule recorded for `letter`, if any
    #[must_use]
    pub fn rule(&self, letter: u8) -> Option<&LetterRule> {
        self.slot(letter).filter(|rule| !rule.is_unconstrained())
    }

    /// Letter known to occupy `position`, if any
    #[must_use]
    pub fn fixed_letter(&self, position: usize) -> Option<u8> {
        self.rules
            .iter()
            .position(|rule| rule.is_confirmed_at(position))
            .map(index_letter)
    }

    /// True if `letter` is known not to occur
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.slot(letter).is_some_and(LetterRule::is_absent)
    }

    /// Number of letters with any recorded rule
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.iter().filter(|r| !r.is_unconstrained()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display status of a single letter
    #[must_use]
    pub fn letter_status(&self, letter: u8) -> LetterStatus {
        let Some(rule) = self.slot(letter) else {
            return LetterStatus::Unknown;
        };
        if rule.is_absent() {
            LetterStatus::Absent
        } else if rule.confirmed != 0 {
            LetterStatus::Placed
        } else if rule.min > 0 {
            LetterStatus::Present
        } else {
            LetterStatus::Unknown
        }
    }

    /// Status of every letter A-Z
    #[must_use]
    pub fn alphabet(&self) -> Vec<(u8, LetterStatus)> {
        alphabet()
            .map(|letter| (letter, self.letter_status(letter)))
            .collect()
    }
}
