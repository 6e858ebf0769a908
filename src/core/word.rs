//! Word-level domain types
//!
//! Words are compared case-insensitively everywhere. They are folded to lower
//! case once, on the way in, and only the original text is shown on the way out.

use super::Mark;
use rustc_hash::FxHashSet;
use std::fmt;

/// Fold a word to the lower-case form used for all comparisons
#[inline]
#[must_use]
pub fn fold(word: &str) -> String {
    word.to_lowercase()
}

/// Set of characters permitted in candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    text: String,
    chars: FxHashSet<char>,
}

impl Alphabet {
    /// Create an alphabet from a string of valid characters
    ///
    /// # Examples
    /// ```
    /// use solvify::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("ABCdef");
    /// assert!(alphabet.contains('a'));
    /// assert!(alphabet.contains('F'));
    /// assert!(!alphabet.contains('z'));
    /// ```
    #[must_use]
    pub fn new(valid_characters: &str) -> Self {
        let text = fold(valid_characters);
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Check whether a character belongs to the alphabet (case-insensitive)
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch) || ch.to_lowercase().all(|lower| self.chars.contains(&lower))
    }

    /// Check whether every character of `word` belongs to the alphabet
    #[must_use]
    pub fn admits(&self, word: &str) -> bool {
        word.chars().all(|ch| self.contains(ch))
    }

    /// The folded alphabet characters, in the order they were given
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A candidate word together with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>, score: u32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }

    /// Sentinel returned when no candidate remains
    #[must_use]
    pub const fn none() -> Self {
        Self {
            word: String::new(),
            score: 0,
        }
    }

    /// True for the "no word" sentinel
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}

/// One letter of an accepted guess and the mark it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessedCharacter {
    pub position: usize,
    /// Folded (lower-case) letter
    pub character: char,
    pub mark: Mark,
}

impl GuessedCharacter {
    #[must_use]
    pub const fn new(position: usize, character: char, mark: Mark) -> Self {
        Self {
            position,
            character,
            mark,
        }
    }
}
