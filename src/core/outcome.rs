//! Guess outcome calculation and representation
//!
//! An outcome holds one mark per position of a guess:
//! - `Absent` (grey): the letter is not in the solution, or every copy is
//!   already accounted for by other marks
//! - `Present` (yellow): the letter is in the solution at another position
//! - `Exact` (green): the letter is in the correct position

use super::word::{ALPHABET_LEN, WORD_LEN, Word, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

impl Mark {
    /// Parse a single mark character
    ///
    /// Accepts digits (`0`/`1`/`2`), letters (`B`/`Y`/`G`), `-`/`_`/`.` for
    /// grey, and the coloured square emoji.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' | '-' | '_' | '.' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '2' | 'G' | 'g' | '🟩' => Some(Self::Exact),
            _ => None,
        }
    }

    /// Digit used in outcome strings such as `02100`
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Exact => '2',
        }
    }

    /// Coloured square emoji for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Exact => '🟩',
        }
    }

    /// True for `Exact` and `Present`
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// A letter of a guess paired with its mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: u8,
    pub mark: Mark,
}

/// Error type for malformed outcome text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("outcome must have exactly {expected} marks, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("'{0}' is not a valid outcome mark (use 0/1/2, -/Y/G or coloured squares)")]
    InvalidMark(char),
}

/// Marks for every position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome([Mark; WORD_LEN]);

impl Outcome {
    /// All positions exact: the puzzle is solved
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LEN]);

    /// Create an outcome from explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Calculate the outcome when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool of
    ///    unaccounted solution letters
    /// 2. Second pass: mark present letters from the remaining pool, so a
    ///    repeated letter is never marked more often than the solution holds it
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Outcome, Word};
    ///
    /// let guess = Word::new("colin").unwrap();
    /// let solution = Word::new("cynic").unwrap();
    /// assert_eq!(Outcome::compute(&guess, &solution).to_digits(), "20021");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, solution: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut remaining = solution.letter_counts();

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == solution.letter_at(i) {
                *mark = Mark::Exact;
                remaining[letter_index(letter)] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Exact {
                continue;
            }
            let count = &mut remaining[letter_index(guess.letter_at(i))];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Check whether `candidate`, as the solution, would produce this outcome
    #[inline]
    #[must_use]
    pub fn matches(&self, guess: &Word, candidate: &Word) -> bool {
        Self::compute(guess, candidate) == *self
    }

    /// Parse outcome text such as `02100`, `-G-Y-` or `⬜🟩⬜🟨⬜`
    ///
    /// # Errors
    /// Returns `OutcomeError` if the text does not hold exactly `WORD_LEN`
    /// recognised marks.
    pub fn parse(text: &str) -> Result<Self, OutcomeError> {
        let text = text.trim();
        let found = text.chars().count();
        if found != WORD_LEN {
            return Err(OutcomeError::WrongLength {
                expected: WORD_LEN,
                found,
            });
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (slot, ch) in marks.iter_mut().zip(text.chars()) {
            *slot = Mark::from_char(ch).ok_or(OutcomeError::InvalidMark(ch))?;
        }
        Ok(Self(marks))
    }

    /// Get the marks as an array
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Get the mark at a specific position
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Pair each letter of `guess` with its mark
    #[must_use]
    pub fn tiles(&self, guess: &Word) -> [Tile; WORD_LEN] {
        let mut tiles = [Tile {
            letter: b'A',
            mark: Mark::Absent,
        }; WORD_LEN];
        for (i, tile) in tiles.iter_mut().enumerate() {
            *tile = Tile {
                letter: guess.letter_at(i),
                mark: self.0[i],
            };
        }
        tiles
    }

    /// Number of Exact or Present marks per letter of `guess`
    #[must_use]
    pub fn hits_by_letter(&self, guess: &Word) -> [u8; ALPHABET_LEN] {
        let mut hits = [0u8; ALPHABET_LEN];
        for (i, mark) in self.0.iter().enumerate() {
            if mark.is_hit() {
                hits[letter_index(guess.letter_at(i))] += 1;
            }
        }
        hits
    }

    /// Digit string such as `02100`
    #[must_use]
    pub fn to_digits(&self) -> String {
        self.0.iter().map(|m| m.digit()).collect()
    }

    /// Emoji string such as `⬜🟩🟨⬜⬜`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl FromStr for Outcome {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_digits())
    }
}
