//! Benchmark command
//!
//! Auto-solves many target words, each with its own engine, and collects
//! statistics on the number of guesses needed.

use super::solve::{SolveConfig, solve_word};
use crate::core::{FeedbackSymbols, GameSetting};
use crate::solver::DeductionEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed → number of solved targets
    pub distribution: BTreeMap<usize, usize>,
    /// Targets not solved within the game's maximum tries
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the word list
///
/// A seed makes the sample reproducible.
#[must_use]
pub fn sample_targets(words: &[String], count: usize, seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    words
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Run benchmark on a set of target words
///
/// Every target gets a fresh engine built from `words`; targets are solved
/// in parallel.
#[must_use]
pub fn run_benchmark(
    game: &GameSetting,
    symbols: FeedbackSymbols,
    words: &[String],
    targets: &[String],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(String, Option<usize>)> = targets
        .par_iter()
        .map(|target| {
            let mut engine = DeductionEngine::new(symbols, game.clone(), words);
            let guesses = solve_word(SolveConfig::new(target.clone()), &mut engine)
                .ok()
                .filter(|result| result.success)
                .map(|result| result.guesses.len());
            pb.inc(1);
            (target.clone(), guesses)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    summarize(outcomes, duration)
}

fn summarize(outcomes: Vec<(String, Option<usize>)>, duration: Duration) -> BenchmarkResult {
    let total_words = outcomes.len();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for (target, guesses) in outcomes {
        match guesses {
            Some(n) => *distribution.entry(n).or_insert(0) += 1,
            None => failures.push(target),
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(n, count)| n * count).sum();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
