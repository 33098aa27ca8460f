//! Word lists for ladder solving
//!
//! Dictionaries are loaded at runtime from plain word-list files.

pub mod loader;

pub use loader::{dictionary_from_slice, dictionary_from_text, load_from_file};
