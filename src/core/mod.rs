//! Core domain types for word ladders
//!
//! This module contains the edit-distance oracle and the plain data types the
//! solver works on. Nothing here does I/O.

mod dictionary;
mod distance;
mod ladder;

pub use dictionary::{Dictionary, normalize};
pub use distance::{edit_distance, edit_distance_within, is_adjacent};
pub use ladder::Ladder;
