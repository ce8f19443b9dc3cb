//! Display functions for command results

use super::formatters::{format_seconds, share_bar};
use crate::commands::{BenchReport, CheckResult, RoundOutcome, ScanReport};
use colored::Colorize;
use std::path::Path;

/// Print the puzzle line
///
/// The scrambled letters are the run's one required output. They go to
/// stdout plain, with no styling, so the line stays pipe-clean.
pub fn print_puzzle(puzzle: &str) {
    println!("{puzzle}");
}

/// Print search diagnostics on stderr
///
/// Debug output stays off stdout so it can never mix into the puzzle line.
pub fn print_search_diagnostics(round: &RoundOutcome) {
    eprintln!(
        "{} {} {}",
        "Pangram word is:".dimmed(),
        round.word,
        format!("(line {} of the list)", round.line + 1).dimmed()
    );
    eprintln!(
        "{} {} draws, {} seconds",
        "Found in".dimmed(),
        round.iterations,
        format_seconds(round.elapsed)
    );
}

/// Note where the answer went, on stderr beside the puzzle on stdout
pub fn print_answer_note(path: &Path) {
    eprintln!("{} {}", "Answer stored at".dimmed(), path.display());
}

/// Print the verdict for a checked guess
pub fn print_check_verdict(result: &CheckResult) {
    if result.correct {
        println!(
            "{}",
            format!("✅ {} is the word!", result.guess.to_uppercase())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ {} is not the word", result.guess.to_uppercase()).red()
        );
    }
}

/// Print the result of a word-list scan
pub fn print_scan_report(report: &ScanReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCAN RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Qualifying words:".bright_cyan().bold());
    println!("   Words in list:    {}", report.total_words);
    println!(
        "   Qualifying:       {}",
        report.qualifying.to_string().bright_yellow().bold()
    );
    println!(
        "   Share:            [{}] {:.3}%",
        share_bar(report.qualifying, report.total_words, 30).green(),
        report.share_percent()
    );

    match report.expected_draws() {
        Some(draws) => println!("   Expected draws:   {draws:.1}"),
        None => println!(
            "{}",
            "   No qualifying words - a pick against this list would never finish"
                .red()
                .bold()
        ),
    }
    println!("   Time taken:       {:.2}s", report.elapsed.as_secs_f64());

    if !report.examples.is_empty() {
        println!("\n✨ {}", "Examples:".bright_cyan().bold());
        for word in &report.examples {
            println!("   • {word}");
        }
    }
}

/// Print the result of a search benchmark
pub fn print_bench_report(report: &BenchReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Draws per round:".bright_cyan().bold());
    println!("   Rounds:           {}", report.rounds);
    println!(
        "   Average draws:    {}",
        format!("{:.2}", report.average_iterations)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        report.min_iterations.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        report.max_iterations.to_string().yellow()
    );
    println!("   Total draws:      {}", report.total_iterations);
    println!("   Distinct words:   {}", report.distinct_words);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", report.rounds_per_second);
}
