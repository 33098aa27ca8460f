//! Word ladder search
//!
//! Breadth-first search over the implicit graph of dictionary words, with
//! pluggable neighbor enumeration.

mod engine;
mod error;
pub mod strategy;

pub use engine::{LadderSolver, SearchStats, generate_word_ladder};
pub use error::LadderError;
pub use strategy::{
    MutationStrategy, NeighborStrategy, SCAN_THRESHOLD, ScanStrategy, StrategyType,
};
