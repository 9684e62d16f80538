//! Constraint inference, filtering, and suggestion
//!
//! One round: record the outcome in a `ConstraintSet`, filter the dictionary,
//! count letter frequencies over the survivors, then rank a pool of guesses.

mod constraints;
mod engine;
pub mod filter;
mod frequency;
mod options;
pub mod scorer;

pub use constraints::{ConstraintSet, LetterRule, LetterStatus};
pub use engine::{Pool, Solver};
pub use filter::CandidateSet;
pub use frequency::FrequencyTable;
pub use options::{
    DEFAULT_GUESS_FREQUENCY, DEFAULT_SOLUTION_FREQUENCY, MAX_GUESSES, SUGGESTION_COUNT,
    SolverOptions,
};
pub use scorer::WordScore;
