//! Formatting utilities for terminal output

/// Render a horizontal bar scaled so that `max` fills `width` cells.
///
/// A non-zero count always shows at least one filled cell.
#[must_use]
pub fn count_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count * width / max).max(usize::from(count > 0)).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
