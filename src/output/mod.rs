//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing. The puzzle line
//! itself stays plain; everything decorative goes to reports or stderr.

pub mod display;
pub mod formatters;

pub use display::{
    print_answer_note, print_bench_report, print_check_verdict, print_puzzle, print_scan_report,
    print_search_diagnostics,
};
