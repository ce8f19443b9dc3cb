//! Search benchmark
//!
//! Runs the rejection search repeatedly over one index and reports draw
//! statistics across the rounds.

use super::RoundConfig;
use crate::sampler::Sampler;
use crate::wordlist::LineIndex;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Statistics from repeated search rounds
#[derive(Debug)]
pub struct BenchReport {
    pub rounds: u64,
    pub total_iterations: u64,
    pub average_iterations: f64,
    pub min_iterations: u64,
    pub max_iterations: u64,
    pub distinct_words: usize,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Run `rounds` searches and collect draw statistics
///
/// The index is built once and shared across rounds, so the timing covers
/// the searches themselves, not the setup.
///
/// # Errors
/// Returns an error if the list cannot be opened, a line fetch fails, or a
/// configured limit runs out during any round.
pub fn run_bench(config: &RoundConfig, rounds: u64) -> Result<BenchReport, String> {
    let index = LineIndex::open(&config.list_path).map_err(|e| e.to_string())?;
    let mut sampler = Sampler::new(&index, config.criteria, rand::rng());

    let start = Instant::now();
    let mut total_iterations: u64 = 0;
    let mut min_iterations = u64::MAX;
    let mut max_iterations: u64 = 0;
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for _ in 0..rounds {
        let found = sampler.search(&config.limit).map_err(|e| e.to_string())?;

        total_iterations += found.iterations;
        min_iterations = min_iterations.min(found.iterations);
        max_iterations = max_iterations.max(found.iterations);
        seen.insert(found.word);
    }

    let duration = start.elapsed();
    let average_iterations = if rounds == 0 {
        0.0
    } else {
        total_iterations as f64 / rounds as f64
    };
    if min_iterations == u64::MAX {
        min_iterations = 0;
    }

    Ok(BenchReport {
        rounds,
        total_iterations,
        average_iterations,
        min_iterations,
        max_iterations,
        distinct_words: seen.len(),
        duration,
        rounds_per_second: rounds as f64 / duration.as_secs_f64(),
    })
}
