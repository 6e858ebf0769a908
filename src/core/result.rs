//! Outcome of submitting feedback for a guess

use std::fmt;

/// Result of processing one feedback string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessingResult {
    /// Every letter was a positional match
    Win,
    /// Feedback was accepted and narrows the candidates
    Processed,
    /// Feedback contained a character that is not a feedback symbol
    InvalidCharacter,
    /// Feedback length differs from the guessed word
    InvalidLength,
    /// The guessed word was rejected and will not be proposed again
    InvalidWord,
    /// Feedback contradicts earlier feedback
    InconsistentResult { detail: String },
}

impl GuessingResult {
    /// Win ends the puzzle
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Win)
    }

    /// Outcomes that ask the caller to correct their input
    #[inline]
    #[must_use]
    pub const fn needs_correction(&self) -> bool {
        matches!(
            self,
            Self::InvalidCharacter | Self::InvalidLength | Self::InconsistentResult { .. }
        )
    }

    /// Human-readable message, given the current guess count
    ///
    /// # Examples
    /// ```
    /// use solvify::core::GuessingResult;
    ///
    /// assert_eq!(GuessingResult::Processed.message(2), "Processed guess 2");
    /// assert_eq!(GuessingResult::InvalidWord.message(0), "Damn!");
    /// ```
    #[must_use]
    pub fn message(&self, guess_count: usize) -> String {
        match self {
            Self::Win => {
                format!("You won! It took us {guess_count} guesses to solve the puzzle")
            }
            Self::Processed => format!("Processed guess {guess_count}"),
            Self::InvalidCharacter => "Invalid character entered in result".to_string(),
            Self::InvalidLength => "Result must match length of guessed word".to_string(),
            Self::InvalidWord => "Damn!".to_string(),
            Self::InconsistentResult { detail } => detail.clone(),
        }
    }
}

impl fmt::Display for GuessingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Win => "win",
            Self::Processed => "processed",
            Self::InvalidCharacter => "invalid character",
            Self::InvalidLength => "invalid length",
            Self::InvalidWord => "invalid word",
            Self::InconsistentResult { .. } => "inconsistent result",
        };
        f.write_str(name)
    }
}
