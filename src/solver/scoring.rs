//! Letter-rarity scoring
//!
//! Every character gets a score equal to its rank when all characters are
//! sorted by how often they occur across the candidate list. Rank 1 is the
//! rarest character, so a character never outscores a more frequent one.
//! Summing over a word's distinct letters favours words that cover many
//! common letters.

use crate::core::{Alphabet, fold};
use rustc_hash::{FxHashMap, FxHashSet};

/// Scores candidate words for guess selection
///
/// Implementations only read immutable state, so scoring may run in parallel.
pub trait WordScorer: Sync {
    /// Score a word, ignoring the characters in `excluded`
    ///
    /// Returns 0 for words that cannot be scored.
    fn score(&self, word: &str, excluded: &FxHashSet<char>) -> u32;
}

/// Scorer built from character occurrence counts
#[derive(Debug, Clone)]
pub struct FrequencyScorer {
    alphabet: Alphabet,
    scores: FxHashMap<char, u32>,
}

impl FrequencyScorer {
    /// Build the character score table from a word list
    ///
    /// Characters are ranked ascending by occurrence count; equal counts are
    /// ordered alphabetically. A character's score is its 1-based rank.
    ///
    /// # Examples
    /// ```
    /// use solvify::core::Alphabet;
    /// use solvify::solver::FrequencyScorer;
    ///
    /// let scorer = FrequencyScorer::new(["aab", "abc"], &Alphabet::new("abc"));
    /// assert_eq!(scorer.character_score('c'), Some(1)); // 1 occurrence
    /// assert_eq!(scorer.character_score('b'), Some(2)); // 2 occurrences
    /// assert_eq!(scorer.character_score('a'), Some(3)); // 3 occurrences
    /// ```
    pub fn new<I, W>(words: I, alphabet: &Alphabet) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in words {
            for ch in fold(word.as_ref()).chars() {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(char, usize)> = counts.into_iter().collect();
        ranked.sort_unstable_by(|(c1, n1), (c2, n2)| n1.cmp(n2).then(c1.cmp(c2)));

        let scores = ranked
            .into_iter()
            .zip(1..)
            .map(|((ch, _), rank)| (ch, rank))
            .collect();

        Self {
            alphabet: alphabet.clone(),
            scores,
        }
    }

    /// Score of a single (folded) character, if it occurred in the word list
    #[inline]
    #[must_use]
    pub fn character_score(&self, ch: char) -> Option<u32> {
        self.scores.get(&ch).copied()
    }

    /// Number of distinct characters in the score table
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl WordScorer for FrequencyScorer {
    /// Sum the scores of the distinct, non-excluded characters of `word`
    ///
    /// Words with any character outside the alphabet score 0. A valid
    /// character that never occurred in the word list contributes 0.
    fn score(&self, word: &str, excluded: &FxHashSet<char>) -> u32 {
        let folded = fold(word);
        if !self.alphabet.admits(&folded) {
            return 0;
        }

        let distinct: FxHashSet<char> = folded.chars().collect();
        distinct
            .into_iter()
            .filter(|ch| !excluded.contains(ch))
            .map(|ch| self.character_score(ch).unwrap_or(0))
            .sum()
    }
}
