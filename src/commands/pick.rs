//! Puzzle picking
//!
//! The default operation: sample the word list until a pangram word turns
//! up, then scramble its distinct letters into the puzzle string.

use super::RoundConfig;
use crate::core::LetterSet;
use crate::sampler::Sampler;
use crate::wordlist::LineIndex;
use std::time::Duration;

/// Outcome of one picked round
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// The accepted word, exactly as it appears in the list
    pub word: String,
    /// Zero-based line the word came from
    pub line: usize,
    /// The word's distinct letters, scrambled and uppercased
    pub puzzle: String,
    /// Draws the search took
    pub iterations: u64,
    /// Wall-clock time the search took
    pub elapsed: Duration,
}

/// Search the list for a pangram word and scramble its letters
///
/// Opens and indexes the list, runs the rejection search under the
/// configured limit, and derives the puzzle from the accepted word. Nothing
/// is printed; callers decide where the outcome goes.
///
/// # Errors
/// Returns an error if the word list cannot be opened or is empty, if a
/// line fetch fails mid-search, or if a configured limit runs out before
/// any word qualifies.
pub fn pick_round(config: &RoundConfig) -> Result<RoundOutcome, String> {
    let index = LineIndex::open(&config.list_path).map_err(|e| e.to_string())?;

    let mut sampler = Sampler::new(&index, config.criteria, rand::rng());
    let found = sampler.search(&config.limit).map_err(|e| e.to_string())?;

    let puzzle = LetterSet::of(&found.word).scrambled(&mut rand::rng());

    Ok(RoundOutcome {
        word: found.word,
        line: found.line,
        puzzle,
        iterations: found.iterations,
        elapsed: found.elapsed,
    })
}
