//! Word scoring and ranking
//!
//! A word scores the candidate frequency of each distinct letter it contains
//! plus the positional frequency of each of its letters.

use super::frequency::FrequencyTable;
use crate::core::Word;
use crate::wordlists::WordEntry;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScore {
    pub word: Word,
    pub score: u32,
    pub popularity: f64,
}

impl WordScore {
    /// Ranking order: higher score first, then more popular, then alphabetical
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.popularity.total_cmp(&self.popularity))
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Score a word against a frequency table
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{FrequencyTable, scorer};
///
/// let pool = [Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let table = FrequencyTable::count(&pool);
///
/// // 7 from distinct letters, 7 from positions
/// assert_eq!(scorer::score(&pool[0], &table), 14);
/// ```
#[must_use]
pub fn score(word: &Word, table: &FrequencyTable) -> u32 {
    let overall: u32 = word.distinct_letters().map(|letter| table.overall(letter)).sum();
    let positional: u32 = word
        .letters()
        .iter()
        .enumerate()
        .map(|(position, &letter)| table.at(letter, position))
        .sum();
    overall + positional
}

/// Score every entry of `pool` and sort best first
#[must_use]
pub fn rank(pool: &[&WordEntry], table: &FrequencyTable) -> Vec<WordScore> {
    let mut scores: Vec<WordScore> = pool
        .par_iter()
        .map(|entry| WordScore {
            word: entry.word,
            score: score(&entry.word, table),
            popularity: entry.popularity,
        })
        .collect();
    scores.sort_unstable_by(WordScore::rank_cmp);
    scores
}
