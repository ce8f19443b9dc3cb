//! Rejection-sampling search over an indexed word list
//!
//! The strategy is deliberately simple: draw a line number uniformly at
//! random, fetch only that line, test it against the criteria, and repeat
//! until a draw is accepted. Sampling is with replacement, so the same line
//! may come up several times before a hit. For a list of `N` lines with `k`
//! qualifying words the expected draw count is `N / k`; the worst case is
//! unbounded, and a list with no qualifying word never terminates unless a
//! `SearchLimit` is configured. That trade keeps the memory cost at one
//! line, with no letter-count index over the file.

use super::SearchLimit;
use crate::core::PangramCriteria;
use crate::wordlist::LineIndex;
use rand::Rng;
use std::fmt;
use std::io;
use std::time::{Duration, Instant};

/// One sampling step: the drawn line and whether it qualified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// Zero-based line number that was drawn
    pub line: usize,
    /// The line's text, terminator stripped
    pub word: String,
    /// Whether the word satisfied the criteria
    pub accepted: bool,
}

/// A successful search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The accepted word, exactly as it appears in the list
    pub word: String,
    /// Zero-based line number the word came from
    pub line: usize,
    /// Total draws performed, counting the accepting one
    pub iterations: u64,
    /// Wall-clock time spent searching (diagnostic only)
    pub elapsed: Duration,
}

/// Error type for a failed search
#[derive(Debug)]
pub enum SearchError {
    /// A line fetch failed
    Io(io::Error),
    /// A configured limit was reached before any word qualified
    LimitReached {
        /// Draws performed before giving up
        iterations: u64,
        /// Time spent before giving up
        elapsed: Duration,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Search failed reading the word list: {e}"),
            Self::LimitReached {
                iterations,
                elapsed,
            } => write!(
                f,
                "No qualifying word within {iterations} draws ({:.6}s)",
                elapsed.as_secs_f64()
            ),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<io::Error> for SearchError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Rejection sampler over an indexed word list
///
/// Generic over the RNG so tests can inject a seeded `StdRng`; production
/// callers hand it `rand::rng()`. The sampler holds no state beyond the RNG
/// stream; every draw is independent.
pub struct Sampler<'a, R: Rng> {
    index: &'a LineIndex,
    criteria: PangramCriteria,
    rng: R,
}

impl<'a, R: Rng> Sampler<'a, R> {
    /// Create a sampler over `index` with the given acceptance criteria
    pub const fn new(index: &'a LineIndex, criteria: PangramCriteria, rng: R) -> Self {
        Self {
            index,
            criteria,
            rng,
        }
    }

    /// Perform one draw: pick a line uniformly, fetch it, test it
    ///
    /// This is the single generator step that `search` repeats. The line
    /// number is drawn from an unbiased uniform distribution over the whole
    /// list.
    ///
    /// # Errors
    /// Returns an I/O error if the line fetch fails.
    pub fn draw(&mut self) -> io::Result<Draw> {
        let line = self.rng.random_range(0..self.index.line_count());
        let word = self.index.line(line)?;
        let accepted = self.criteria.matches(&word);

        Ok(Draw {
            line,
            word,
            accepted,
        })
    }

    /// Repeat draws until a word is accepted
    ///
    /// There is no tie-break among qualifying words: whichever one the
    /// random stream reaches first wins. With `SearchLimit::NONE` the loop
    /// runs until it succeeds; callers own the precondition that at least
    /// one qualifying word exists.
    ///
    /// # Errors
    /// Returns `SearchError::Io` if a fetch fails, or
    /// `SearchError::LimitReached` when a configured cap runs out before any
    /// word qualifies.
    pub fn search(&mut self, limit: &SearchLimit) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        let mut iterations: u64 = 0;

        loop {
            if limit.reached(iterations, start.elapsed()) {
                return Err(SearchError::LimitReached {
                    iterations,
                    elapsed: start.elapsed(),
                });
            }

            let draw = self.draw()?;
            iterations += 1;

            if draw.accepted {
                return Ok(SearchResult {
                    word: draw.word,
                    line: draw.line,
                    iterations,
                    elapsed: start.elapsed(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn list(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn accepted_word_satisfies_both_conditions() {
        let file = list(&[
            "cat", "jackdaws", "love", "my", "big", "sphinx", "of", "quartz",
        ]);
        let index = LineIndex::open(file.path()).unwrap();
        let criteria = PangramCriteria::new(6, 6);

        let mut sampler = Sampler::new(&index, criteria, rand::rng());
        for _ in 0..30 {
            let result = sampler.search(&SearchLimit::NONE).unwrap();
            assert!(result.word.chars().count() >= 6);
            assert_eq!(LetterSet::of(&result.word).len(), 6);
        }
    }

    #[test]
    fn converges_to_the_unique_qualifying_word() {
        // Exactly one line passes (7 distinct letters, length >= 8)
        let file = list(&[
            "cat", "jackdaws", "love", "my", "big", "sphinx", "of", "quartz",
        ]);
        let index = LineIndex::open(file.path()).unwrap();
        let criteria = PangramCriteria::new(7, 8);

        let mut sampler = Sampler::new(&index, criteria, rand::rng());
        for _ in 0..50 {
            let result = sampler.search(&SearchLimit::NONE).unwrap();
            assert_eq!(result.word, "jackdaws");
            assert_eq!(result.line, 1);
        }
    }

    #[test]
    fn all_qualifying_list_accepts_on_the_first_draw() {
        let file = list(&["aa", "bb", "cc"]);
        let index = LineIndex::open(file.path()).unwrap();
        let criteria = PangramCriteria::new(1, 1);

        let mut sampler = Sampler::new(&index, criteria, rand::rng());
        for _ in 0..10 {
            let result = sampler.search(&SearchLimit::NONE).unwrap();
            assert_eq!(result.iterations, 1);
        }
    }

    #[test]
    fn iterations_count_the_accepting_draw() {
        let file = list(&["embezzlement"]);
        let index = LineIndex::open(file.path()).unwrap();

        let mut sampler = Sampler::new(&index, PangramCriteria::default(), rand::rng());
        let result = sampler.search(&SearchLimit::NONE).unwrap();

        assert_eq!(result.word, "embezzlement");
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn impossible_criteria_hit_the_iteration_cap() {
        // No word has 26 distinct letters; unbounded search would spin forever
        let file = list(&["cat", "dog", "bird", "jackdaws"]);
        let index = LineIndex::open(file.path()).unwrap();
        let criteria = PangramCriteria::new(26, 1);

        let mut sampler = Sampler::new(&index, criteria, rand::rng());
        let result = sampler.search(&SearchLimit::iterations(500));

        match result {
            Err(SearchError::LimitReached { iterations, .. }) => {
                assert_eq!(iterations, 500);
            }
            other => panic!("expected LimitReached, got {other:?}"),
        }
    }

    #[test]
    fn zero_iteration_cap_stops_before_any_draw() {
        let file = list(&["embezzlement"]);
        let index = LineIndex::open(file.path()).unwrap();

        let mut sampler = Sampler::new(&index, PangramCriteria::default(), rand::rng());
        let result = sampler.search(&SearchLimit::iterations(0));

        match result {
            Err(SearchError::LimitReached { iterations, .. }) => assert_eq!(iterations, 0),
            other => panic!("expected LimitReached, got {other:?}"),
        }
    }

    #[test]
    fn impossible_criteria_hit_the_time_cap() {
        let file = list(&["cat", "dog"]);
        let index = LineIndex::open(file.path()).unwrap();
        let criteria = PangramCriteria::new(26, 1);
        let cap = Duration::from_millis(20);

        let mut sampler = Sampler::new(&index, criteria, rand::rng());
        let result = sampler.search(&SearchLimit::time(cap));

        match result {
            Err(SearchError::LimitReached { elapsed, .. }) => assert!(elapsed >= cap),
            other => panic!("expected LimitReached, got {other:?}"),
        }
    }

    #[test]
    fn draw_reports_rejections_and_acceptances() {
        let file = list(&["cat"]);
        let index = LineIndex::open(file.path()).unwrap();

        let mut rejecting = Sampler::new(&index, PangramCriteria::new(26, 26), rand::rng());
        let draw = rejecting.draw().unwrap();
        assert_eq!(draw.word, "cat");
        assert_eq!(draw.line, 0);
        assert!(!draw.accepted);

        let mut accepting = Sampler::new(&index, PangramCriteria::new(3, 3), rand::rng());
        assert!(accepting.draw().unwrap().accepted);
    }

    #[test]
    fn samples_spread_across_qualifying_words() {
        let file = list(&["abcd", "efgh", "ijkl"]);
        let index = LineIndex::open(file.path()).unwrap();
        let criteria = PangramCriteria::new(4, 4);

        let mut sampler = Sampler::new(&index, criteria, rand::rng());
        let seen: HashSet<String> = (0..200)
            .map(|_| sampler.search(&SearchLimit::NONE).unwrap().word)
            .collect();

        // 200 uniform draws over three equally likely words
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn seeded_searches_are_reproducible() {
        let file = list(&["cat", "jackdaws", "love", "sphinx", "quartz"]);
        let index = LineIndex::open(file.path()).unwrap();
        let criteria = PangramCriteria::new(7, 8);

        let mut first = Sampler::new(&index, criteria, StdRng::seed_from_u64(42));
        let mut second = Sampler::new(&index, criteria, StdRng::seed_from_u64(42));

        let a = first.search(&SearchLimit::NONE).unwrap();
        let b = second.search(&SearchLimit::NONE).unwrap();

        assert_eq!(a.word, b.word);
        assert_eq!(a.line, b.line);
        assert_eq!(a.iterations, b.iterations);
    }
}
