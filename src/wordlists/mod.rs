//! Dictionary for the solver
//!
//! Provides the embedded dictionary compiled into the binary, loaders for
//! custom word lists, and the `WordSet` every solving operation reads.

mod embedded;
pub mod loader;
mod word_set;

pub use embedded::{WORDS, WORDS_COUNT};
pub use word_set::{WordEntry, WordSet, meets_threshold};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &(text, popularity) in WORDS {
            assert!(Word::new(text).is_ok(), "Word '{text}' is not valid");
            assert!(popularity >= 0.0, "Word '{text}' has negative popularity");
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        assert_eq!(WordSet::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_include_common_words() {
        let words = WordSet::embedded();
        for text in ["ABOUT", "THEIR", "FAITH", "RATES", "HAPPY"] {
            assert!(words.contains(&Word::new(text).unwrap()), "missing {text}");
        }
    }

    #[test]
    fn embedded_words_span_popularity_range() {
        let words = WordSet::embedded();
        assert!(words.above(1.17).len() < words.len());
        assert!(words.above(3.2).len() < words.above(1.17).len());
    }
}
