//! Deduction engine
//!
//! Owns the state of one puzzle attempt: accepted feedback records, rejected
//! words, the cached current guess and run counters. Callers alternate
//! between [`DeductionEngine::current_guess`] and
//! [`DeductionEngine::add_current_guess_result`].

use super::constraints::{ConstraintSet, find_inconsistency};
use super::scoring::{FrequencyScorer, WordScorer};
use crate::core::{
    Feedback, FeedbackSymbols, GameSetting, GuessedCharacter, GuessingResult, Mark, ScoredWord, fold,
};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// A prepared candidate word
#[derive(Debug, Clone)]
struct Candidate {
    /// Text as it appeared in the list, after substitution
    text: String,
    folded: String,
}

/// The cached guess and the letters feedback is matched against
#[derive(Debug, Clone)]
struct PendingGuess {
    scored: ScoredWord,
    letters: Vec<char>,
}

/// Word deduction engine for a single puzzle attempt
pub struct DeductionEngine<S: WordScorer = FrequencyScorer> {
    symbols: FeedbackSymbols,
    game: GameSetting,
    scorer: S,
    words: Vec<Candidate>,
    records: Vec<GuessedCharacter>,
    rejected: FxHashSet<String>,
    current_guess: Option<PendingGuess>,
    guess_count: usize,
    active_words_of_last_guess: usize,
    last_result: Option<GuessingResult>,
}

impl DeductionEngine<FrequencyScorer> {
    /// Create an engine scoring by letter frequency
    ///
    /// The raw word list is substituted and filtered to the game's length
    /// and alphabet; the scorer is built from the filtered list.
    ///
    /// # Examples
    /// ```
    /// use solvify::core::{FeedbackSymbols, GameSetting, GuessingResult};
    /// use solvify::solver::DeductionEngine;
    ///
    /// let game = GameSetting::find("wordle").unwrap();
    /// let mut engine = DeductionEngine::new(FeedbackSymbols::default(), game, ["apple", "banana", "cherry"]);
    ///
    /// assert_eq!(engine.current_guess().word, "apple");
    /// assert_eq!(engine.add_current_guess_result("*****"), GuessingResult::Win);
    /// assert_eq!(engine.last_result_message(), "You won! It took us 1 guesses to solve the puzzle");
    /// ```
    pub fn new<I, W>(symbols: FeedbackSymbols, game: GameSetting, raw_words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let prepared = game.prepare_wordlist(raw_words);
        let scorer = FrequencyScorer::new(&prepared, &game.alphabet);
        Self::from_prepared(symbols, game, prepared, scorer)
    }
}

impl<S: WordScorer> DeductionEngine<S> {
    /// Create an engine with a custom scorer
    pub fn with_scorer<I, W>(symbols: FeedbackSymbols, game: GameSetting, raw_words: I, scorer: S) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let prepared = game.prepare_wordlist(raw_words);
        Self::from_prepared(symbols, game, prepared, scorer)
    }

    fn from_prepared(symbols: FeedbackSymbols, game: GameSetting, prepared: Vec<String>, scorer: S) -> Self {
        let words: Vec<Candidate> = prepared
            .into_iter()
            .map(|text| Candidate {
                folded: fold(&text),
                text,
            })
            .collect();

        debug!(game = %game.name, words = words.len(), "deduction engine ready");

        Self {
            symbols,
            game,
            scorer,
            words,
            records: Vec::new(),
            rejected: FxHashSet::default(),
            current_guess: None,
            guess_count: 0,
            active_words_of_last_guess: 0,
            last_result: None,
        }
    }

    /// Best guess for the current state
    ///
    /// Computed on first call and cached until feedback changes the state.
    /// Returns [`ScoredWord::none`] when no candidate remains.
    pub fn current_guess(&mut self) -> ScoredWord {
        self.ensure_guess().scored.clone()
    }

    fn ensure_guess(&mut self) -> &PendingGuess {
        let pending = match self.current_guess.take() {
            Some(pending) => pending,
            None => self.compute_guess(),
        };
        self.current_guess.insert(pending)
    }

    fn compute_guess(&mut self) -> PendingGuess {
        let no_score = self.no_score_characters();

        let (active_count, best) = {
            let active = self.active_word_refs();
            let scorer = &self.scorer;
            let best = active
                .par_iter()
                .map(|&candidate| (candidate, scorer.score(&candidate.folded, &no_score)))
                .min_by(|(w1, s1), (w2, s2)| rank(w1, *s1, w2, *s2))
                .map(|(candidate, score)| PendingGuess {
                    scored: ScoredWord::new(candidate.text.clone(), score),
                    letters: candidate.folded.chars().collect(),
                });
            (active.len(), best)
        };
        self.active_words_of_last_guess = active_count;

        let pending = best.unwrap_or_else(|| PendingGuess {
            scored: ScoredWord::none(),
            letters: Vec::new(),
        });

        debug!(
            guess = %pending.scored.word,
            score = pending.scored.score,
            active = active_count,
            "computed guess"
        );
        pending
    }

    /// Submit feedback for the current guess
    ///
    /// Either the whole feedback string is applied or none of it is.
    pub fn add_current_guess_result(&mut self, feedback: &str) -> GuessingResult {
        let result = self.evaluate(feedback);
        self.last_result = Some(result.clone());
        result
    }

    fn evaluate(&mut self, feedback: &str) -> GuessingResult {
        let PendingGuess { scored, letters } = self.ensure_guess().clone();

        if self.symbols.is_reject(feedback) {
            let word = fold(&scored.word);
            warn!(word = %word, "word rejected");
            self.rejected.insert(word);
            self.invalidate_guess();
            return GuessingResult::InvalidWord;
        }

        // The "no word" sentinel cannot take feedback
        if letters.is_empty() || feedback.chars().count() != letters.len() {
            return GuessingResult::InvalidLength;
        }

        let Some(marks) = self.symbols.parse(feedback) else {
            return GuessingResult::InvalidCharacter;
        };

        if Feedback::is_win(&marks) {
            self.guess_count += 1;
            debug!(guesses = self.guess_count, "puzzle solved");
            return GuessingResult::Win;
        }

        for (position, (&character, &mark)) in letters.iter().zip(&marks).enumerate() {
            if let Some(detail) = find_inconsistency(&self.records, position, character, mark) {
                warn!(%detail, "inconsistent feedback");
                return GuessingResult::InconsistentResult { detail };
            }
        }

        self.guess_count += 1;
        self.records.extend(
            letters
                .into_iter()
                .zip(marks)
                .enumerate()
                .map(|(position, (character, mark))| GuessedCharacter::new(position, character, mark)),
        );
        self.invalidate_guess();

        debug!(
            guesses = self.guess_count,
            records = self.records.len(),
            "feedback processed"
        );
        GuessingResult::Processed
    }

    /// Drop the cached guess so the next call recomputes it
    pub fn invalidate_guess(&mut self) {
        self.current_guess = None;
    }

    /// Message for the most recent outcome; empty before any feedback
    #[must_use]
    pub fn last_result_message(&self) -> String {
        self.last_result
            .as_ref()
            .map(|result| result.message(self.guess_count))
            .unwrap_or_default()
    }

    /// Outcome of the most recent feedback
    #[must_use]
    pub const fn last_result(&self) -> Option<&GuessingResult> {
        self.last_result.as_ref()
    }

    /// Number of guesses that were processed or won
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    /// Size of the active candidate set at the last guess computation
    #[must_use]
    pub const fn active_words_of_last_guess(&self) -> usize {
        self.active_words_of_last_guess
    }

    /// Words still consistent with all feedback, in list order
    #[must_use]
    pub fn active_candidates(&self) -> Vec<&str> {
        self.active_word_refs()
            .into_iter()
            .map(|candidate| candidate.text.as_str())
            .collect()
    }

    /// Accepted feedback records, oldest first
    #[must_use]
    pub fn records(&self) -> &[GuessedCharacter] {
        &self.records
    }

    /// Folded words rejected as not in the dictionary
    #[must_use]
    pub const fn rejected_words(&self) -> &FxHashSet<String> {
        &self.rejected
    }

    /// Size of the prepared candidate list
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn game(&self) -> &GameSetting {
        &self.game
    }

    #[must_use]
    pub const fn symbols(&self) -> &FeedbackSymbols {
        &self.symbols
    }

    /// Letters already pinned to a position; they no longer tell candidates apart
    fn no_score_characters(&self) -> FxHashSet<char> {
        self.records
            .iter()
            .filter(|r| r.mark == Mark::PositionalMatch)
            .map(|r| r.character)
            .collect()
    }

    fn active_word_refs(&self) -> Vec<&Candidate> {
        let constraints = (self.guess_count > 0)
            .then(|| ConstraintSet::from_records(&self.records, self.game.guess_length));

        self.words
            .iter()
            .filter(|candidate| !self.rejected.contains(&candidate.folded))
            .filter(|candidate| self.game.alphabet.admits(&candidate.folded))
            .filter(|candidate| {
                constraints
                    .as_ref()
                    .is_none_or(|constraints| constraints.matches(&candidate.folded))
            })
            .collect()
    }
}

/// Order candidates best first: higher score, then alphabetically
fn rank(w1: &Candidate, s1: u32, w2: &Candidate, s2: u32) -> Ordering {
    s2.cmp(&s1)
        .then_with(|| w1.folded.cmp(&w2.folded))
        .then_with(|| w1.text.cmp(&w2.text))
}
