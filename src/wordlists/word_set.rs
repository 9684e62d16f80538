//! Immutable dictionary of words with popularity values

use crate::core::{Error, Word};
use rustc_hash::FxHashMap;

/// A dictionary word and how common it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordEntry {
    pub word: Word,
    /// Zipf-like commonness, higher = more common
    pub popularity: f64,
}

impl WordEntry {
    #[must_use]
    pub const fn new(word: Word, popularity: f64) -> Self {
        Self { word, popularity }
    }
}

/// Read-only collection of dictionary entries with membership lookup
///
/// Loaded once per process and shared by reference across every puzzle
/// attempt.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    entries: Vec<WordEntry>,
    index: FxHashMap<Word, usize>,
}

/// True if `popularity` passes `min_popularity`; a threshold of zero or less
/// lets every word through
#[inline]
#[must_use]
pub fn meets_threshold(popularity: f64, min_popularity: f64) -> bool {
    min_popularity <= 0.0 || popularity >= min_popularity
}

impl WordSet {
    /// Build a word set, keeping the first entry of any duplicated word
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let mut set = Self::default();
        for entry in entries {
            if set.index.contains_key(&entry.word) {
                log::warn!("duplicate dictionary word {} ignored", entry.word);
                continue;
            }
            set.index.insert(entry.word, set.entries.len());
            set.entries.push(entry);
        }
        set
    }

    /// Build a word set from `(text, popularity)` pairs, skipping invalid words
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::wordlists::WordSet;
    ///
    /// let words = WordSet::from_pairs(&[("crane", 3.5), ("toolong", 1.0)]);
    /// assert_eq!(words.len(), 1);
    /// ```
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self::new(pairs.iter().filter_map(|&(text, popularity)| {
            Word::new(text)
                .map(|word| WordEntry::new(word, popularity))
                .ok()
        }))
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let words = Self::from_pairs(super::WORDS);
        log::debug!("loaded {} embedded dictionary words", words.len());
        words
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

    /// All entries in dictionary order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&WordEntry> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn popularity(&self, word: &Word) -> Option<f64> {
        self.get(word).map(|entry| entry.popularity)
    }

    /// Entries whose popularity passes `min_popularity`
    #[must_use]
    pub fn above(&self, min_popularity: f64) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|entry| meets_threshold(entry.popularity, min_popularity))
            .collect()
    }

    /// Parse `text` and check that it is a dictionary word
    ///
    /// # Errors
    /// `Error::InvalidWord` for malformed text, `Error::UnknownWord` when the
    /// word is well-formed but not in this set.
    pub fn validate(&self, text: &str) -> Result<Word, Error> {
        let word = Word::new(text)?;
        if self.contains(&word) {
            Ok(word)
        } else {
            Err(Error::UnknownWord(word))
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
