//! Command implementations

use crate::core::PangramCriteria;
use crate::sampler::SearchLimit;
use std::path::PathBuf;

pub mod bench;
pub mod check;
pub mod host;
pub mod pick;
pub mod scan;

pub use bench::{BenchReport, run_bench};
pub use check::{CheckResult, check_guess};
pub use host::store_answer;
pub use pick::{RoundOutcome, pick_round};
pub use scan::{ScanReport, scan_list};

/// Immutable configuration for one run
///
/// Built once from the CLI and passed explicitly to every command; no
/// command reads configuration from ambient state.
#[derive(Debug, Clone)]
pub struct RoundConfig {
    /// Word-list file to sample from
    pub list_path: PathBuf,
    /// Acceptance criteria for the pangram word
    pub criteria: PangramCriteria,
    /// Optional bound on the search, unbounded by default
    pub limit: SearchLimit,
    /// Whether diagnostic output is enabled
    pub debug: bool,
}
