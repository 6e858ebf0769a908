//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use simple::{SessionEnd, run_session, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
