//! Word list loading utilities
//!
//! Provides functions to build a [`Dictionary`] from files or string slices.

use crate::core::Dictionary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Load a dictionary from a file
///
/// Tokens may be separated by any whitespace, one word per line being the
/// usual layout. Each token is lowercased; duplicates collapse.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = dictionary_from_text(&content);

    info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

/// Build a dictionary from whitespace-separated text
#[must_use]
pub fn dictionary_from_text(text: &str) -> Dictionary {
    text.split_whitespace().collect()
}

/// Convert a string slice to a dictionary
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::dictionary_from_slice;
///
/// let dict = dictionary_from_slice(&["Cat", "cot", "cat"]);
/// assert_eq!(dict.len(), 2);
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    slice.iter().copied().collect()
}
