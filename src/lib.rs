//! Pangram Game
//!
//! Picks a random pangram word from a word list and prints its distinct
//! letters scrambled and uppercased, as a puzzle for a human solver.
//!
//! "Pangram" here is the game's sense: a word with exactly the configured
//! number of unique letters and at least the configured length, not a
//! sentence using the whole alphabet.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pangram_game::core::{LetterSet, PangramCriteria};
//! use pangram_game::sampler::{Sampler, SearchLimit};
//! use pangram_game::wordlist::LineIndex;
//!
//! // Index the word list once, then sample lines until a pangram turns up
//! let index = LineIndex::open("/usr/share/dict/words").unwrap();
//! let mut sampler = Sampler::new(&index, PangramCriteria::default(), rand::rng());
//! let found = sampler.search(&SearchLimit::NONE).unwrap();
//!
//! // The puzzle: the word's distinct letters, scrambled and uppercased
//! let puzzle = LetterSet::of(&found.word).scrambled(&mut rand::rng());
//! println!("{puzzle}");
//! ```

// Core domain types
pub mod core;

// Word-list access
pub mod wordlist;

// Rejection-sampling search
pub mod sampler;

// Answer persistence
pub mod answer;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
