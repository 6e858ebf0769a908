//! Word deduction
//!
//! Letter-rarity scoring, the constraint model built from feedback, and the
//! engine that ties them together.

pub mod constraints;
mod engine;
pub mod scoring;

pub use constraints::{ConstraintSet, PositionRule, find_inconsistency};
pub use engine::DeductionEngine;
pub use scoring::{FrequencyScorer, WordScorer};
