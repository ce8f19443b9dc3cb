//! Distinct-letter set of a word
//!
//! A `LetterSet` holds the distinct characters of a word in first-occurrence
//! order. The set is what becomes the puzzle: a uniformly random permutation
//! of its characters, uppercased.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// The distinct characters of a word
///
/// Distinctness is over all characters, not only alphabetics, and is
/// case-sensitive: `'a'` and `'A'` are different members. Insertion order is
/// the first occurrence in the source word, which only matters until the set
/// is scrambled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Collect the distinct characters of `word`
    ///
    /// # Examples
    /// ```
    /// use pangram_game::core::LetterSet;
    ///
    /// let letters = LetterSet::of("banana");
    /// assert_eq!(letters.chars(), &['b', 'a', 'n']);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut seen = FxHashSet::default();
        let letters = word.chars().filter(|&c| seen.insert(c)).collect();
        Self { letters }
    }

    /// Number of distinct characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the set is empty (only true for the empty word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The distinct characters in first-occurrence order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.letters
    }

    /// Check membership of a single character
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// Produce the puzzle string: a uniformly random permutation of the
    /// distinct characters, uppercased
    ///
    /// Every ordering of the set is equally likely. The original set is left
    /// untouched, so repeated calls give independent scrambles.
    ///
    /// # Examples
    /// ```
    /// use pangram_game::core::LetterSet;
    ///
    /// let letters = LetterSet::of("quartz");
    /// let puzzle = letters.scrambled(&mut rand::rng());
    /// assert_eq!(puzzle.len(), 6);
    /// assert!(puzzle.chars().all(char::is_uppercase));
    /// ```
    #[must_use]
    pub fn scrambled<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut shuffled = self.letters.clone();
        shuffled.shuffle(rng);
        shuffled.into_iter().flat_map(char::to_uppercase).collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
