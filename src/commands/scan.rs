//! Word-list census
//!
//! Walks every line of the list and counts the words that satisfy the
//! criteria, the ground truth the sampler only ever estimates. Worth running
//! before hosting a round: against a list with no qualifying word, a pick
//! would search forever.

use super::RoundConfig;
use crate::wordlist::LineIndex;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// How many qualifying words the report keeps as examples
const EXAMPLE_WORDS: usize = 5;

/// Census of a word list against one set of criteria
#[derive(Debug)]
pub struct ScanReport {
    /// Lines in the list
    pub total_words: usize,
    /// Words satisfying the criteria
    pub qualifying: usize,
    /// The first few qualifying words, in list order
    pub examples: Vec<String>,
    /// Time the walk took
    pub elapsed: Duration,
}

impl ScanReport {
    /// Qualifying words as a percentage of the whole list
    #[must_use]
    pub fn share_percent(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.qualifying as f64 / self.total_words as f64 * 100.0
        }
    }

    /// Expected number of draws a search needs against this list
    ///
    /// `None` when no word qualifies; the search would never finish.
    #[must_use]
    pub fn expected_draws(&self) -> Option<f64> {
        (self.qualifying > 0).then(|| self.total_words as f64 / self.qualifying as f64)
    }
}

/// Walk the whole list and count the words that qualify
///
/// # Errors
/// Returns an error if the list cannot be opened or a line cannot be read.
///
/// # Panics
/// Will not panic - the progress-bar template is a fixed, valid string.
pub fn scan_list(config: &RoundConfig) -> Result<ScanReport, String> {
    let index = LineIndex::open(&config.list_path).map_err(|e| e.to_string())?;
    let total_words = index.line_count();

    let pb = ProgressBar::new(total_words as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut qualifying = 0;
    let mut examples = Vec::new();

    for line in 0..total_words {
        let word = index
            .line(line)
            .map_err(|e| format!("Failed to read line {}: {e}", line + 1))?;

        if config.criteria.matches(&word) {
            qualifying += 1;
            if examples.len() < EXAMPLE_WORDS {
                examples.push(word);
            }
        }

        if line % 1000 == 0 {
            pb.set_message(format!("{qualifying} qualifying"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(ScanReport {
        total_words,
        qualifying,
        examples,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PangramCriteria;
    use crate::sampler::SearchLimit;
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

    fn config_for(file: &NamedTempFile, criteria: PangramCriteria) -> RoundConfig {
        RoundConfig {
            list_path: file.path().to_path_buf(),
            criteria,
            limit: SearchLimit::NONE,
            debug: false,
        }
    }

    #[test]
    fn counts_qualifying_words() {
        // "sphinx" and "quartz" both have 6 distinct letters at length 6
        let file = list(&[
            "cat", "jackdaws", "love", "my", "big", "sphinx", "of", "quartz",
        ]);
        let report = scan_list(&config_for(&file, PangramCriteria::new(6, 6))).unwrap();

        assert_eq!(report.total_words, 8);
        assert_eq!(report.qualifying, 2);
        assert_eq!(report.examples, vec!["sphinx", "quartz"]);
    }

    #[test]
    fn zero_qualifying_reports_no_expected_draws() {
        let file = list(&["cat", "dog"]);
        let report = scan_list(&config_for(&file, PangramCriteria::new(26, 1))).unwrap();

        assert_eq!(report.qualifying, 0);
        assert_eq!(report.expected_draws(), None);
        assert!(report.share_percent().abs() < f64::EPSILON);
        assert!(report.examples.is_empty());
    }

    #[test]
    fn expected_draws_is_list_size_over_qualifying() {
        let file = list(&["abcd", "efgh", "cat", "dog"]);
        let report = scan_list(&config_for(&file, PangramCriteria::new(4, 4))).unwrap();

        assert_eq!(report.qualifying, 2);
        let draws = report.expected_draws().unwrap();
        assert!((draws - 2.0).abs() < f64::EPSILON);
        assert!((report.share_percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn examples_are_capped() {
        let words = vec!["abcdef"; 20];
        let file = list(&words);
        let report = scan_list(&config_for(&file, PangramCriteria::new(6, 6))).unwrap();

        assert_eq!(report.qualifying, 20);
        assert_eq!(report.examples.len(), EXAMPLE_WORDS);
    }

    #[test]
    fn missing_list_is_an_error() {
        let config = RoundConfig {
            list_path: "/definitely/not/a/wordlist".into(),
            criteria: PangramCriteria::default(),
            limit: SearchLimit::NONE,
            debug: false,
        };

        assert!(scan_list(&config).is_err());
    }
}
