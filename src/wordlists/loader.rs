//! Word list loading utilities
//!
//! Reads dictionaries and solution lists from text files.

use super::{WordEntry, WordSet};
use crate::core::{WORD_LEN, Word};
use std::fs;
use std::io;
use std::num::ParseFloatError;
use std::path::Path;
use thiserror::Error;

/// Error type for word list files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: malformed popularity '{value}'")]
    BadPopularity {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parse dictionary text: one `WORD [popularity]` entry per line
///
/// Blank lines and `#` comments are ignored, invalid words are skipped, and a
/// missing popularity column means `0.0`.
///
/// # Errors
///
/// Returns `LoadError::BadPopularity` if a popularity value is not a number.
pub fn parse_dictionary(content: &str) -> Result<WordSet, LoadError> {
    let mut entries = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let Some(text) = parts.next() else { continue };
        let Ok(word) = Word::new(text) else {
            log::warn!("line {}: skipping invalid word '{text}'", number + 1);
            continue;
        };

        let popularity = match parts.next() {
            Some(raw) => raw.parse::<f64>().map_err(|source| LoadError::BadPopularity {
                line: number + 1,
                value: raw.to_string(),
                source,
            })?,
            None => 0.0,
        };

        entries.push(WordEntry::new(word, popularity));
    }

    Ok(WordSet::new(entries))
}

/// Load a dictionary file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or
/// `LoadError::BadPopularity` for a malformed popularity value.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<WordSet, LoadError> {
    let content = fs::read_to_string(path)?;
    let words = parse_dictionary(&content)?;
    log::debug!("loaded {} dictionary words from file", words.len());
    Ok(words)
}

/// Parse solutions text: the first `WORD_LEN` characters of each line
///
/// Lines that are too short or hold anything but letters in those positions
/// are skipped.
#[must_use]
pub fn parse_solutions(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let prefix: String = line.chars().take(WORD_LEN).collect();
            Word::new(&prefix).ok()
        })
        .collect()
}

/// Load a solutions file for batch testing
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_solutions<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    Ok(parse_solutions(&fs::read_to_string(path)?))
}

/// Convert user-supplied texts to words, dropping invalid ones
#[must_use]
pub fn words_from_texts<S: AsRef<str>>(texts: &[S]) -> Vec<Word> {
    texts
        .iter()
        .filter_map(|text| Word::new(text.as_ref()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dictionary_reads_popularity() {
        let words = parse_dictionary("# header\nabout 6.38\n\nCAULK 2.47\nfjord\n").unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words.popularity(&Word::new("about").unwrap()), Some(6.38));
        assert_eq!(words.popularity(&Word::new("fjord").unwrap()), Some(0.0));
    }

    #[test]
    fn parse_dictionary_skips_invalid_words() {
        let words = parse_dictionary("toolong 3.0\nab1de 2.0\nslate 3.3\n").unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn parse_dictionary_rejects_bad_popularity() {
        let err = parse_dictionary("about 6.38\nslate high\n").unwrap_err();
        assert!(matches!(err, LoadError::BadPopularity { line: 2, .. }));
        assert!(err.to_string().contains("'high'"));
    }

    #[test]
    fn parse_solutions_takes_prefixes() {
        let solutions = parse_solutions("shake\ncynicism\nab\ncaulk  # comment\n12345\n");
        let texts: Vec<&str> = solutions.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["SHAKE", "CYNIC", "CAULK"]);
    }

    #[test]
    fn parse_solutions_empty() {
        assert!(parse_solutions("").is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_solutions("no/such/file.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn words_from_texts_drops_invalid() {
        let words = words_from_texts(&["SHAKE", "cynic", "X", "caulk"]);
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].as_str(), "CYNIC");
    }
}
