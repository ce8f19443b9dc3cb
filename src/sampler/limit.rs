//! Optional caps for the sampling search
//!
//! The search contract is unbounded: it runs until a word qualifies, and a
//! list with no qualifying word means it never returns. A `SearchLimit`
//! turns that into a hard stop for tests and cautious callers. Caps are
//! opt-in; nothing is bounded unless asked for.

use std::time::Duration;

/// Optional bounds on a sampling search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimit {
    /// Stop after this many draws, if set
    pub max_iterations: Option<u64>,
    /// Stop once this much wall-clock time has passed, if set
    pub max_time: Option<Duration>,
}

impl SearchLimit {
    /// No bound in either dimension, the faithful default
    pub const NONE: Self = Self {
        max_iterations: None,
        max_time: None,
    };

    /// Cap by draw count only
    #[must_use]
    pub const fn iterations(max: u64) -> Self {
        Self {
            max_iterations: Some(max),
            max_time: None,
        }
    }

    /// Cap by elapsed time only
    #[must_use]
    pub const fn time(max: Duration) -> Self {
        Self {
            max_iterations: None,
            max_time: Some(max),
        }
    }

    /// Whether a search that has made `iterations` draws over `elapsed` time
    /// must stop
    #[must_use]
    pub fn reached(&self, iterations: u64, elapsed: Duration) -> bool {
        self.max_iterations.is_some_and(|max| iterations >= max)
            || self.max_time.is_some_and(|max| elapsed >= max)
    }

    /// Whether any bound is configured
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.max_iterations.is_some() || self.max_time.is_some()
    }
}
