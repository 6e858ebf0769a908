//! Errors from outside the deduction core
//!
//! Feedback problems are reported as [`crate::core::GuessingResult`] values;
//! this type covers loading word lists and driving the commands.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read word list {path}: {source}")]
    WordList {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown game '{0}'")]
    UnknownGame(String),

    #[error("invalid target word '{word}': {reason}")]
    InvalidTarget { word: String, reason: String },

    #[error("no candidate words remain")]
    NoCandidates,

    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
