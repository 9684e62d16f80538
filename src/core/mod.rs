//! Core domain types for the puzzle
//!
//! Words, outcomes and the error taxonomy. Everything here is pure and
//! independent of the dictionary.

mod error;
mod outcome;
mod word;

pub use error::{Error, Result};
pub use outcome::{Mark, Outcome, OutcomeError, Tile};
pub use word::{
    ALPHABET_LEN, WORD_LEN, Word, WordError, alphabet, checked_letter_index, index_letter,
    letter_index,
};
