//! Simple interactive CLI mode
//!
//! Proposes a guess, reads the feedback line, reports the outcome, repeats.

use crate::error::Result;
use crate::output::formatters::colorize_outcome;
use crate::solver::{DeductionEngine, WordScorer};
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The puzzle was solved after this many guesses
    Won { guesses: usize },
    /// The user quit or input ended
    Quit,
    /// No candidate word is left
    Exhausted,
}

/// Run the interactive solver on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: WordScorer>(engine: &mut DeductionEngine<S>) -> Result<SessionEnd> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(engine, stdin.lock(), stdout.lock())
}

/// Run an interactive session over any input and output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<S, R, W>(engine: &mut DeductionEngine<S>, input: R, mut output: W) -> Result<SessionEnd>
where
    S: WordScorer,
    R: BufRead,
    W: Write,
{
    print_instructions(engine, &mut output)?;

    let mut lines = input.lines();

    loop {
        let guess = engine.current_guess();
        if guess.is_none() {
            writeln!(
                output,
                "No candidate words remain. Some feedback may have been wrong."
            )?;
            return Ok(SessionEnd::Exhausted);
        }

        writeln!(
            output,
            "Next guess: {} with a score of {}. {} words are still active.",
            guess.word,
            guess.score,
            engine.active_words_of_last_guess()
        )?;
        write!(output, "Result: ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(SessionEnd::Quit);
        };
        let feedback = line.trim();

        if matches!(feedback, "quit" | "q" | "exit") {
            writeln!(output, "Bye!")?;
            return Ok(SessionEnd::Quit);
        }

        let result = engine.add_current_guess_result(feedback);
        let message = engine.last_result_message();
        writeln!(output, "{}", colorize_outcome(&result, &message))?;

        if result.is_terminal() {
            return Ok(SessionEnd::Won {
                guesses: engine.guess_count(),
            });
        }
        if result.needs_correction() {
            writeln!(output, "Enter the feedback for {} again.", guess.word)?;
        }
    }
}

fn print_instructions<S: WordScorer, W: Write>(engine: &DeductionEngine<S>, output: &mut W) -> io::Result<()> {
    let symbols = engine.symbols();
    writeln!(
        output,
        "Solving {} ({} words, {} letters).",
        engine.game(),
        engine.word_count(),
        engine.game().guess_length
    )?;
    writeln!(
        output,
        "Enter one symbol per letter: '{}' correct position, '{}' elsewhere in the word, '{}' not in the word.",
        symbols.positional_match, symbols.present_elsewhere, symbols.absent
    )?;
    writeln!(
        output,
        "Enter '{}' if the word is not accepted, 'quit' to stop.\n",
        symbols.reject_word
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackSymbols, GameSetting};
    use std::io::Cursor;

    fn engine(words: &[&str]) -> DeductionEngine {
        let game = GameSetting::find("wordle").unwrap();
        DeductionEngine::new(FeedbackSymbols::default(), game, words.iter().copied())
    }

    fn run(words: &[&str], input: &str) -> (SessionEnd, String) {
        let mut engine = engine(words);
        let mut output = Vec::new();
        let end = run_session(&mut engine, Cursor::new(input), &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn wins_on_all_positional() {
        let (end, output) = run(&["apple"], "*****\n");
        assert_eq!(end, SessionEnd::Won { guesses: 1 });
        assert!(output.contains("Next guess: apple"));
        assert!(output.contains("You won! It took us 1 guesses to solve the puzzle"));
    }

    #[test]
    fn retries_after_invalid_input() {
        let (end, output) = run(&["apple"], "ap+le\nappleee\n*****\n");
        assert_eq!(end, SessionEnd::Won { guesses: 1 });
        assert!(output.contains("Invalid character entered in result"));
        assert!(output.contains("Result must match length of guessed word"));
    }

    #[test]
    fn rejecting_only_word_exhausts() {
        let (end, output) = run(&["apple"], "x\n");
        assert_eq!(end, SessionEnd::Exhausted);
        assert!(output.contains("Damn!"));
        assert!(output.contains("No candidate words remain"));
    }

    #[test]
    fn quit_and_eof_end_session() {
        let (end, _) = run(&["apple"], "quit\n");
        assert_eq!(end, SessionEnd::Quit);

        let (end, _) = run(&["apple"], "");
        assert_eq!(end, SessionEnd::Quit);
    }

    #[test]
    fn processes_several_guesses() {
        let (end, output) = run(&["crane", "slate", "irate", "crate", "grate"], "-****\n-****\n*****\n");
        assert_eq!(end, SessionEnd::Won { guesses: 3 });
        assert!(output.contains("Processed guess 1"));
        assert!(output.contains("Processed guess 2"));
        assert!(output.contains("Next guess: grate"));
    }

    #[test]
    fn instructions_name_the_symbols() {
        let (_, output) = run(&["apple"], "");
        assert!(output.contains("'*' correct position"));
        assert!(output.contains("Enter 'x'"));
    }
}
