//! Byte-offset index over a word-list file
//!
//! One streaming pass at open time records where every line starts; after
//! that any line is retrievable with a single seek and read. The list itself
//! is never held in memory, so arbitrarily large dictionaries are fine.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// Random access to the lines of a word-list file
///
/// The index is immutable once built. If the underlying file changes during
/// a run, fetched line content is undefined.
#[derive(Debug)]
pub struct LineIndex {
    file: File,
    offsets: Vec<u64>,
}

/// Error type for opening a word list
#[derive(Debug)]
pub enum WordListError {
    /// The file could not be opened or read
    Io(io::Error),
    /// The file contains no lines, so there is nothing to sample
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for WordListError {}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl LineIndex {
    /// Open a word list and build its line index
    ///
    /// Streams the file once, counting line boundaries and recording the
    /// byte offset of each line start. Memory use grows with the number of
    /// lines, never with their content.
    ///
    /// # Errors
    /// Returns `WordListError::Io` if the path cannot be opened or read, and
    /// `WordListError::Empty` for a zero-line file; the sampling domain
    /// must have at least one line.
    ///
    /// # Examples
    /// ```no_run
    /// use pangram_game::wordlist::LineIndex;
    ///
    /// let index = LineIndex::open("/usr/share/dict/words").unwrap();
    /// println!("{} words", index.line_count());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let file = File::open(path)?;
        let offsets = scan_offsets(&file)?;

        if offsets.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { file, offsets })
    }

    /// Number of lines in the list
    ///
    /// Always at least 1 for a successfully opened index.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Fetch a single line by index, trailing line terminators stripped
    ///
    /// Indices are zero-based and any index may be fetched any number of
    /// times, in any order; sampling with replacement depends on that.
    ///
    /// # Errors
    /// Returns an I/O error if the seek or read fails, or if the line is not
    /// valid UTF-8.
    ///
    /// # Panics
    /// Panics if `index >= line_count()`.
    pub fn line(&self, index: usize) -> io::Result<String> {
        let offset = self.offsets[index];

        let mut reader = BufReader::new(&self.file);
        reader.seek(SeekFrom::Start(offset))?;

        let mut buf = Vec::new();
        reader.read_until(b'\n', &mut buf)?;
        while buf.last().is_some_and(|&b| b == b'\n' || b == b'\r') {
            buf.pop();
        }

        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Record the byte offset of each line start in one pass
fn scan_offsets(file: &File) -> io::Result<Vec<u64>> {
    let mut reader = BufReader::new(file);
    let mut offsets = Vec::new();
    let mut position: u64 = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        offsets.push(position);
        position += read as u64;
    }

    Ok(offsets)
}
