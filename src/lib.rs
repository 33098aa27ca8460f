//! Word Ladder Solver
//!
//! Finds shortest word ladders, where each word differs from the previous one
//! by a single substitution, insertion or deletion.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Dictionary;
//! use word_ladder::solver::{LadderSolver, StrategyType};
//!
//! let dict = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
//! let solver = LadderSolver::new(StrategyType::auto(&dict), &dict);
//!
//! let ladder = solver.find_ladder("cat", "dog").unwrap();
//! assert_eq!(ladder.to_string(), "cat cot cog dog");
//! ```

// Core domain types
pub mod core;

// Ladder search
pub mod solver;

// Weighted graphs and Dijkstra
pub mod graph;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
