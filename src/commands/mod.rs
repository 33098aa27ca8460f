//! Command implementations

pub mod benchmark;
pub mod distance;
pub mod ladder;
pub mod paths;
pub mod verify;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, sample_pairs};
pub use distance::{DistanceReport, analyze_distance};
pub use ladder::{LadderConfig, LadderReport, solve_ladder};
pub use paths::{PathsReport, Route, run_paths};
pub use verify::{CaseResult, DEFAULT_CASES, VerifyCase, VerifyReport, run_verify};
