//! Error taxonomy shared by the solving core

use super::outcome::OutcomeError;
use super::word::{Word, WordError};
use thiserror::Error;

/// Errors surfaced by the solving core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Guess text is not a well-formed word
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    /// Outcome text is malformed
    #[error("invalid outcome: {0}")]
    InvalidOutcome(#[from] OutcomeError),
    /// Guess is well-formed but not in the dictionary
    #[error("'{0}' is not in the word list")]
    UnknownWord(Word),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
