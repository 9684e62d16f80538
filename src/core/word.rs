//! Puzzle word representation
//!
//! A Word stores a fixed-length uppercase word as raw ASCII bytes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Puzzle width: every word has exactly this many letters
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A fixed-length puzzle word made of uppercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word '{0}' must contain only the letters A-Z")]
    InvalidCharacters(String),
}

/// Index of an uppercase ASCII letter in the alphabet (A = 0)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

/// Alphabet index of an ASCII letter in either case; `None` for other bytes
#[inline]
#[must_use]
pub const fn checked_letter_index(letter: u8) -> Option<usize> {
    let letter = letter.to_ascii_uppercase();
    if letter.is_ascii_uppercase() {
        Some(letter_index(letter))
    } else {
        None
    }
}

/// Uppercase ASCII letter for an alphabet index (0 = A)
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    b'A' + index as u8
}

/// All uppercase letters in alphabetical order
pub fn alphabet() -> impl Iterator<Item = u8> {
    b'A'..=b'Z'
}

impl Word {
    /// Create a new Word from text in any letter case
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly `WORD_LEN` ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();
        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters(text.to_string()));
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self(letters))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Letters are validated ASCII, so this never falls back
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Number of times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.0.iter().filter(|&&ch| ch == letter).count() as u8
    }

    /// Occurrence count of every letter, indexed by `letter_index`
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &ch in &self.0 {
            counts[letter_index(ch)] += 1;
        }
        counts
    }

    /// Distinct letters of the word, in order of first appearance
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(i, ch)| !self.0[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.as_str(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("crane").unwrap().as_str(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().as_str(), "CRANE");
        assert_eq!(Word::new("  slate\n").unwrap().as_str(), "SLATE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crÄne").is_err());
    }

    #[test]
    fn word_letter_access() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(4), b'E');
        assert!(word.contains(b'R'));
        assert!(!word.contains(b'Z'));
    }

    #[test]
    fn word_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'E'), 2);
        assert_eq!(word.count_of(b'S'), 1);
        assert_eq!(word.count_of(b'Z'), 0);

        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'E')], 2);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), WORD_LEN);
    }

    #[test]
    fn word_distinct_letters() {
        let word = Word::new("happy").unwrap();
        let distinct: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(distinct, b"HAPY");

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.distinct_letters().count(), 1);
    }

    #[test]
    fn letter_index_round_trip() {
        assert_eq!(letter_index(b'A'), 0);
        assert_eq!(letter_index(b'Z'), 25);
        assert_eq!(checked_letter_index(b'z'), Some(25));
        assert_eq!(checked_letter_index(b'['), None);
        assert_eq!(checked_letter_index(b'@'), None);
        assert_eq!(index_letter(7), b'H');
        assert_eq!(alphabet().count(), ALPHABET_LEN);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "faith".parse().unwrap();
        assert_eq!(format!("{word}"), "FAITH");
    }
}
