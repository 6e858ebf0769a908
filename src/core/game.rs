//! Puzzle parameters
//!
//! A [`GameSetting`] describes one supported puzzle: which characters are
//! valid, how long a guess is, and which character sequences are folded
//! before filtering (e.g. umlauts spelled out as ASCII digraphs).

use super::word::{Alphabet, fold};

/// Upper bound on repeated substitution passes over one word
const MAX_SUBSTITUTION_PASSES: usize = 16;

/// Parameters of a single puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetting {
    pub name: String,
    pub alphabet: Alphabet,
    pub guess_length: usize,
    pub maximum_tries: usize,
    /// Ordered `(from, to)` replacements applied before filtering
    pub substitutions: Vec<(String, String)>,
}

impl GameSetting {
    /// Create a game without substitutions
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        valid_characters: &str,
        guess_length: usize,
        maximum_tries: usize,
    ) -> Self {
        Self {
            name: name.into(),
            alphabet: Alphabet::new(valid_characters),
            guess_length,
            maximum_tries,
            substitutions: Vec::new(),
        }
    }

    /// Add a substitution rule
    #[must_use]
    pub fn with_substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitutions.push((from.into(), to.into()));
        self
    }

    /// Built-in puzzles
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::new("wordle", "abcdefghijklmnopqrstuvwxyz", 5, 6),
            Self::new("6mal5", "abcdefghijklmnopqrstuvwxyz", 5, 6)
                .with_substitution("ä", "ae")
                .with_substitution("ö", "oe")
                .with_substitution("ü", "ue")
                .with_substitution("Ä", "Ae")
                .with_substitution("Ö", "Oe")
                .with_substitution("Ü", "Ue")
                .with_substitution("ß", "ss"),
            Self::new("wördle", "abcdefghijklmnopqrstuvwxyzüöäß", 5, 6),
        ]
    }

    /// Look up a built-in puzzle by name (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use solvify::core::GameSetting;
    ///
    /// let game = GameSetting::find("6MAL5").unwrap();
    /// assert_eq!(game.guess_length, 5);
    /// assert!(GameSetting::find("scrabble").is_none());
    /// ```
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        let wanted = fold(name);
        Self::catalog()
            .into_iter()
            .find(|game| fold(&game.name) == wanted)
    }

    /// Apply the substitution table to a single word
    ///
    /// Scans left to right; at each position the first listed key that
    /// matches is replaced. Passes repeat until no key occurs any more.
    #[must_use]
    pub fn substitute(&self, word: &str) -> String {
        let mut text = word.to_string();
        if self.substitutions.is_empty() {
            return text;
        }

        for _ in 0..MAX_SUBSTITUTION_PASSES {
            if !self
                .substitutions
                .iter()
                .any(|(from, _)| !from.is_empty() && text.contains(from.as_str()))
            {
                break;
            }
            text = self.substitute_once(&text);
        }

        text
    }

    fn substitute_once(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(ch) = rest.chars().next() {
            let hit = self
                .substitutions
                .iter()
                .find(|(from, _)| !from.is_empty() && rest.starts_with(from.as_str()));

            match hit {
                Some((from, to)) => {
                    out.push_str(to);
                    rest = &rest[from.len()..];
                }
                None => {
                    out.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }

        out
    }

    /// Check whether a (substituted) word fits this puzzle
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        let folded = fold(word);
        folded.chars().count() == self.guess_length && self.alphabet.admits(&folded)
    }

    /// Turn a raw word list into the candidate list for this puzzle
    ///
    /// Substitutes, then keeps words of the right length made only of valid
    /// characters. Order is preserved.
    ///
    /// # Examples
    /// ```
    /// use solvify::core::GameSetting;
    ///
    /// let game = GameSetting::find("6mal5").unwrap();
    /// let raw = ["Käse", "Apple", "banana", "cherry"];
    /// assert_eq!(game.prepare_wordlist(raw), vec!["Kaese", "Apple"]);
    /// ```
    pub fn prepare_wordlist<I, W>(&self, raw: I) -> Vec<String>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        raw.into_iter()
            .map(|word| self.substitute(word.as_ref()))
            .filter(|word| self.accepts(word))
            .collect()
    }
}

impl std::fmt::Display for GameSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
