//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_distance_result, print_ladder_result, print_paths_result,
    print_verify_result,
};
pub use formatters::{NO_LADDER_MESSAGE, format_ladder, format_path};
