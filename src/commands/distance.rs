//! Edit distance command
//!
//! Compares two words with the edit-distance oracle.

use crate::core::{edit_distance, edit_distance_within};

/// Result of comparing two words
pub struct DistanceReport {
    pub first: String,
    pub second: String,
    pub distance: usize,
    pub max_dist: usize,
    pub within: bool,
}

/// Compare two words, reporting the exact distance and the bounded check
#[must_use]
pub fn analyze_distance(first: &str, second: &str, max_dist: usize) -> DistanceReport {
    DistanceReport {
        first: first.to_string(),
        second: second.to_string(),
        distance: edit_distance(first, second),
        max_dist,
        within: edit_distance_within(first, second, max_dist),
    }
}
