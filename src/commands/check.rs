//! Guess checking
//!
//! Compares a guess against the stored answer from a hosted round. The
//! comparison ignores case: the puzzle shows uppercase letters while word
//! lists are usually lowercase.

use crate::answer::read_answer;
use std::path::Path;

/// Verdict for one checked guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The guess as given
    pub guess: String,
    /// Whether it matches the stored answer
    pub correct: bool,
}

/// Compare a guess with the stored answer
///
/// The stored answer itself is never part of the result, so an incorrect
/// guesser learns nothing beyond the verdict.
///
/// # Errors
/// Returns an error if no answer is stored at `path` or it cannot be read.
pub fn check_guess(guess: &str, path: &Path) -> Result<CheckResult, String> {
    let answer =
        read_answer(path).map_err(|e| format!("No stored answer at {}: {e}", path.display()))?;

    let correct = guess.to_lowercase() == answer.to_lowercase();

    Ok(CheckResult {
        guess: guess.to_string(),
        correct,
    })
}
