//! Hosted rounds
//!
//! The answer-capturing variant: once the puzzle is out, the accepted word
//! goes to the answer file so `check` can verify guesses against it later.

use crate::answer;
use std::path::Path;

/// Store the round's answer word
///
/// Creates or truncates the file at `path`; only the current round's word
/// survives a rewrite. Callers print the puzzle first, so a failed write
/// still leaves a playable round behind.
///
/// # Errors
/// Returns an error if the answer file cannot be written.
pub fn store_answer(word: &str, path: &Path) -> Result<(), String> {
    answer::write_answer(path, word)
        .map_err(|e| format!("Failed to store the answer at {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::read_answer;
    use crate::commands::{RoundConfig, pick_round};
    use crate::core::PangramCriteria;
    use crate::sampler::SearchLimit;
    use std::fs;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    fn list(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn hosted_round_stores_the_accepted_word() {
        let file = list(&["cat", "jackdaws", "of"]);
        let config = RoundConfig {
            list_path: file.path().to_path_buf(),
            criteria: PangramCriteria::new(7, 8),
            limit: SearchLimit::NONE,
            debug: false,
        };
        let dir = tempdir().unwrap();
        let path = dir.path().join(".pangram_answer");

        let round = pick_round(&config).unwrap();
        store_answer(&round.word, &path).unwrap();

        assert_eq!(read_answer(&path).unwrap(), round.word);
        assert_eq!(fs::read_to_string(&path).unwrap(), "jackdaws\n");
    }

    #[test]
    fn storing_twice_keeps_only_the_latest_word() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("answer");

        store_answer("extraordinarily", &path).unwrap();
        store_answer("embezzlement", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "embezzlement\n");
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = store_answer("sphinx", Path::new("/no/such/dir/answer")).unwrap_err();
        assert!(err.contains("Failed to store the answer"));
    }
}
