//! Wordle Assistant
//!
//! Infers constraints from guess outcomes, filters a popularity-weighted
//! dictionary, and ranks guesses by how common their letters are among the
//! remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Outcome, Word};
//! use wordle_assist::solver::{ConstraintSet, Solver, SolverOptions};
//! use wordle_assist::wordlists::WordSet;
//!
//! let words = WordSet::embedded();
//! let solver = Solver::new(&words, SolverOptions::default());
//!
//! // Score the outcome of a guess against the hidden solution
//! let guess = Word::new("rates").unwrap();
//! let outcome = Outcome::compute(&guess, &Word::new("faith").unwrap());
//! assert_eq!(outcome.to_digits(), "02100");
//!
//! let mut constraints = ConstraintSet::new();
//! constraints.update(&guess, &outcome);
//!
//! let suggestions = solver.suggest(&constraints);
//! assert!(!suggestions.is_empty());
//! ```

// Core domain types
pub mod core;

// Constraint inference, filtering and scoring
pub mod solver;

// Dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
