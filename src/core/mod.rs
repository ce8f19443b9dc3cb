//! Core domain types for the pangram game
//!
//! The acceptance criteria and the distinct-letter set are pure values with
//! no I/O; everything observable about a round is derived from them.

mod criteria;
mod letters;

pub use criteria::PangramCriteria;
pub use letters::LetterSet;
