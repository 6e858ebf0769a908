//! Core domain types for word deduction
//!
//! Pure, dependency-light types: feedback marks and symbols, words and
//! alphabets, puzzle parameters, and guessing outcomes.

mod feedback;
mod game;
mod result;
mod word;

pub use feedback::{Feedback, FeedbackSymbols, Mark};
pub use game::GameSetting;
pub use result::GuessingResult;
pub use word::{Alphabet, GuessedCharacter, ScoredWord, fold};
