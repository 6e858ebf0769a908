//! Formatting utilities for terminal output

use crate::core::GuessingResult;
use colored::{ColoredString, Colorize};

/// Create a bar of `width` cells, `value / max` of them filled
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Color an outcome message by how the caller should react to it
#[must_use]
pub fn colorize_outcome(result: &GuessingResult, message: &str) -> ColoredString {
    match result {
        GuessingResult::Win => message.bright_green().bold(),
        GuessingResult::Processed => message.cyan(),
        GuessingResult::InvalidWord => message.yellow(),
        GuessingResult::InvalidCharacter
        | GuessingResult::InvalidLength
        | GuessingResult::InconsistentResult { .. } => message.red(),
    }
}
