//! Solvify
//!
//! A word-elimination solver for Wordle-style puzzles: it narrows a candidate
//! list from per-guess feedback and proposes the next guess by letter rarity.
//!
//! # Quick Start
//!
//! ```rust
//! use solvify::core::{FeedbackSymbols, GameSetting, GuessingResult};
//! use solvify::solver::DeductionEngine;
//!
//! let game = GameSetting::find("wordle").unwrap();
//! let mut engine = DeductionEngine::new(
//!     FeedbackSymbols::default(),
//!     game,
//!     ["crane", "slate", "irate", "crate", "grate"],
//! );
//!
//! let guess = engine.current_guess();
//! assert_eq!(guess.word, "crate");
//!
//! // c is absent, the rest is in place
//! assert_eq!(engine.add_current_guess_result("-****"), GuessingResult::Processed);
//! assert_eq!(engine.last_result_message(), "Processed guess 1");
//! ```

// Core domain types
pub mod core;

// Scoring and deduction
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Errors outside the deduction core
pub mod error;

pub use error::{Error, Result};
