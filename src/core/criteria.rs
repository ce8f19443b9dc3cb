//! Pangram acceptance criteria
//!
//! "Pangram" here is the game's sense, not the dictionary one: a word
//! qualifies when its count of distinct letters equals a configured target
//! and its length meets a configured minimum. Nothing requires the full
//! alphabet.

use super::LetterSet;

/// Acceptance criteria for a pangram word
///
/// Both conditions are required: the distinct-letter count must equal
/// `unique_letter_count` exactly, and the length must be at least
/// `min_length`. Length alone or uniqueness alone is not enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PangramCriteria {
    /// Exact number of distinct characters the word must have
    pub unique_letter_count: usize,
    /// Lower bound on word length, inclusive, counted in characters
    pub min_length: usize,
}

impl PangramCriteria {
    /// Create criteria from an exact distinct-letter count and a minimum length
    #[must_use]
    pub const fn new(unique_letter_count: usize, min_length: usize) -> Self {
        Self {
            unique_letter_count,
            min_length,
        }
    }

    /// Test a candidate word against the criteria
    ///
    /// # Examples
    /// ```
    /// use pangram_game::core::PangramCriteria;
    ///
    /// let criteria = PangramCriteria::new(7, 12);
    /// assert!(criteria.matches("embezzlement"));
    /// assert!(!criteria.matches("cat"));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() >= self.min_length
            && LetterSet::of(word).len() == self.unique_letter_count
    }
}

impl Default for PangramCriteria {
    /// The game's stock round: 7 distinct letters, at least 12 characters
    fn default() -> Self {
        Self::new(7, 12)
    }
}
