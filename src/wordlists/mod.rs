//! Word lists for deduction
//!
//! Provides an embedded default list and loading from files. Lists are kept
//! raw here; each engine substitutes and filters them for its own game.

mod embedded;
pub mod loader;

pub use embedded::{WORDLIST, WORDLIST_COUNT};
