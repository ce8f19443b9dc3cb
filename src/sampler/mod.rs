//! Rejection-sampling search
//!
//! The search that makes the game: uniform draws over the word list until
//! one satisfies the pangram criteria.

mod engine;
mod limit;

pub use engine::{Draw, Sampler, SearchError, SearchResult};
pub use limit::SearchLimit;
