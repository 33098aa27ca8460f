//! Formatting utilities for terminal output

/// Message shown when a search produced no ladder
pub const NO_LADDER_MESSAGE: &str = "No word ladder found.";

/// Format a ladder as space-separated words
///
/// An empty ladder formats as [`NO_LADDER_MESSAGE`].
#[must_use]
pub fn format_ladder(words: &[String]) -> String {
    if words.is_empty() {
        return NO_LADDER_MESSAGE.to_string();
    }
    words.join(" ")
}

/// Format a vertex path as space-separated indices
#[must_use]
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
