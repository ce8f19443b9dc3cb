//! Answer-file persistence for hosted rounds
//!
//! The host variant writes the accepted word to a small plain-text file so
//! the puzzle-setter can verify guesses later. One word, one line, fully
//! rewritten each round; no append, no history.

use std::fs;
use std::io;
use std::path::Path;

/// Default location of the stored answer
pub const DEFAULT_ANSWER_PATH: &str = ".pangram_answer";

/// Persist the answer word
///
/// Creates or truncates the file and writes the word verbatim followed by a
/// single newline. Previous content is fully replaced.
///
/// # Errors
/// Any I/O failure propagates; no partial-state recovery is attempted.
pub fn write_answer<P: AsRef<Path>>(path: P, word: &str) -> io::Result<()> {
    fs::write(path, format!("{word}\n"))
}

/// Read the stored answer back, trailing line terminators stripped
///
/// # Errors
/// Returns an I/O error if the file is missing or unreadable.
pub fn read_answer<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.trim_end_matches(['\n', '\r']).to_string())
}
