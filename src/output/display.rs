//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Feedback, GameSetting};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}  {}",
            turn,
            step.word.to_uppercase(),
            Feedback::to_emoji(&step.marks),
            step.feedback.bright_black()
        );

        if verbose {
            println!("  Score:      {}", step.score);
            println!("  Candidates: {}", step.active_words);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n😰 {}", "Unsolved:".yellow().bold());
        for word in result.failures.iter().take(10) {
            println!("   {}", word.to_uppercase().yellow());
        }
        if result.failures.len() > 10 {
            println!("   … and {} more", result.failures.len() - 10);
        }
    }
}

/// Print the built-in games
pub fn print_games(games: &[GameSetting]) {
    println!("\n{}", "Available games".bright_cyan().bold());
    for game in games {
        let folding = if game.substitutions.is_empty() {
            String::new()
        } else {
            let rules: Vec<String> = game
                .substitutions
                .iter()
                .map(|(from, to)| format!("{from}→{to}"))
                .collect();
            format!(", folds {}", rules.join(" "))
        };
        println!(
            "  {}: {} letters from '{}', {} tries{}",
            game.name.bright_white().bold(),
            game.guess_length,
            game.alphabet.as_str(),
            game.maximum_tries,
            folding
        );
    }
}
