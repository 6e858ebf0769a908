//! Word solving command
//!
//! Plays a whole puzzle against a known target word, producing the feedback
//! automatically, and returns the solution path.

use crate::core::{Feedback, GuessingResult, Mark, fold};
use crate::error::{Error, Result};
use crate::solver::{DeductionEngine, WordScorer};
use tracing::warn;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Guess limit; the game's maximum tries when `None`
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: None,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = Some(max_guesses);
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub score: u32,
    pub marks: Vec<Mark>,
    /// Feedback string as it was submitted
    pub feedback: String,
    pub active_words: usize,
}

/// Solve a specific word with the given engine
///
/// # Errors
///
/// Returns an error if:
/// - The target word does not fit the engine's game
/// - No candidate remains before the target is found
pub fn solve_word<S: WordScorer>(
    config: SolveConfig,
    engine: &mut DeductionEngine<S>,
) -> Result<SolveResult> {
    let game = engine.game();
    let substituted = game.substitute(&config.target);
    if !game.accepts(&substituted) {
        return Err(Error::InvalidTarget {
            word: config.target,
            reason: format!(
                "must be {} letters from '{}'",
                game.guess_length,
                game.alphabet.as_str()
            ),
        });
    }
    let target = fold(&substituted);
    let max_guesses = config.max_guesses.unwrap_or(game.maximum_tries);

    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut success = false;

    while guesses.len() < max_guesses {
        let guess = engine.current_guess();
        if guess.is_none() {
            return Err(Error::NoCandidates);
        }

        let marks = Feedback::calculate(&fold(&guess.word), &target);
        let feedback = engine.symbols().render(&marks);
        let active_words = engine.active_words_of_last_guess();
        let result = engine.add_current_guess_result(&feedback);

        guesses.push(GuessStep {
            word: guess.word,
            score: guess.score,
            marks,
            feedback,
            active_words,
        });

        match result {
            GuessingResult::Win => {
                success = true;
                break;
            }
            GuessingResult::Processed => {}
            other => {
                warn!(result = %other, "unexpected outcome while auto-solving");
                break;
            }
        }
    }

    Ok(SolveResult {
        success,
        guesses,
        target: config.target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackSymbols, GameSetting};

    fn engine(game: &str, words: &[&str]) -> DeductionEngine {
        let game = GameSetting::find(game).unwrap();
        DeductionEngine::new(FeedbackSymbols::default(), game, words.iter().copied())
    }

    const WORDS: &[&str] = &["crane", "slate", "irate", "crate", "grate"];

    #[test]
    fn solves_target_in_list() {
        let mut engine = engine("wordle", WORDS);
        let result = solve_word(SolveConfig::new("grate".to_string()), &mut engine).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word, "grate");
        assert_eq!(result.guesses.last().unwrap().feedback, "*****");
        assert_eq!(result.guesses[0].word, "crate");
        assert_eq!(result.guesses[0].feedback, "-****");
        assert_eq!(result.guesses[0].active_words, 5);
    }

    #[test]
    fn active_words_never_grow() {
        let mut engine = engine("wordle", WORDS);
        let result = solve_word(SolveConfig::new("slate".to_string()), &mut engine).unwrap();

        assert!(result.success);
        for pair in result.guesses.windows(2) {
            assert!(pair[1].active_words <= pair[0].active_words);
        }
    }

    #[test]
    fn target_is_case_insensitive() {
        let mut engine = engine("wordle", WORDS);
        let result = solve_word(SolveConfig::new("CRANE".to_string()), &mut engine).unwrap();
        assert!(result.success);
        assert_eq!(result.target, "CRANE");
    }

    #[test]
    fn target_is_substituted() {
        let mut engine = engine("6mal5", &["Kaese", "Mause", "Kiste"]);
        let result = solve_word(SolveConfig::new("Käse".to_string()), &mut engine).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word, "Kaese");
    }

    #[test]
    fn rejects_wrong_length_target() {
        let mut engine = engine("wordle", WORDS);
        let err = solve_word(SolveConfig::new("cranes".to_string()), &mut engine);
        assert!(matches!(err, Err(Error::InvalidTarget { .. })));
    }

    #[test]
    fn unknown_target_runs_out_of_candidates() {
        let mut engine = engine("wordle", WORDS);
        let err = solve_word(
            SolveConfig::new("zzzzz".to_string()).with_max_guesses(20),
            &mut engine,
        );
        assert!(matches!(err, Err(Error::NoCandidates)));
    }

    #[test]
    fn respects_guess_limit() {
        let mut engine = engine("wordle", WORDS);
        let result = solve_word(
            SolveConfig::new("grate".to_string()).with_max_guesses(1),
            &mut engine,
        )
        .unwrap();
        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
    }
}
