//! Formatting utilities for terminal output

use crate::core::{Mark, Tile};
use crate::solver::{LetterStatus, WordScore};
use colored::Colorize;

/// Render tiles as coloured letter blocks
#[must_use]
pub fn tiles_to_string(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| {
            let text = format!(" {} ", char::from(tile.letter));
            match tile.mark {
                Mark::Exact => text.black().on_green().bold().to_string(),
                Mark::Present => text.black().on_yellow().bold().to_string(),
                Mark::Absent => text.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Render the alphabet with each letter coloured by what is known about it
#[must_use]
pub fn alphabet_to_string(alphabet: &[(u8, LetterStatus)]) -> String {
    alphabet
        .iter()
        .map(|&(letter, status)| {
            let text = char::from(letter).to_string();
            match status {
                LetterStatus::Placed => text.green().bold().to_string(),
                LetterStatus::Present => text.yellow().bold().to_string(),
                LetterStatus::Absent => text.bright_black().strikethrough().to_string(),
                LetterStatus::Unknown => text,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Suggestions as `WORD (score)` separated by spaces
#[must_use]
pub fn suggestions_to_string(suggestions: &[WordScore]) -> String {
    suggestions
        .iter()
        .map(|s| format!("{} ({})", s.word, s.score))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
