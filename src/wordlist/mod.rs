//! Word-list access
//!
//! A word list is a flat text file, one word per line. The index gives
//! line-count and random line access without loading the file.

mod index;

pub use index::{LineIndex, WordListError};

/// Default word list, the system dictionary
pub const SYSTEM_DICTIONARY: &str = "/usr/share/dict/words";
