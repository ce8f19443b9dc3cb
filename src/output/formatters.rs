//! Formatting utilities for terminal output

use std::time::Duration;

/// Render a count's share of a total as a fixed-width bar
///
/// A non-zero count always shows at least one filled block, so rare
/// qualifying words stay visible against a large list.
#[must_use]
pub fn share_bar(count: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (count * width / total).max(usize::from(count > 0))
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a duration as seconds with microsecond precision
#[must_use]
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}
