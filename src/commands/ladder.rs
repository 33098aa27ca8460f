//! Ladder solving command
//!
//! Solves one start/end pair and returns the ladder with search details.

use crate::core::Ladder;
use crate::solver::{LadderError, LadderSolver, NeighborStrategy, SearchStats};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct LadderConfig {
    pub start: String,
    pub end: String,
}

impl LadderConfig {
    #[must_use]
    pub const fn new(start: String, end: String) -> Self {
        Self { start, end }
    }
}

/// Result of solving a ladder
pub struct LadderReport {
    pub start: String,
    pub end: String,
    pub outcome: Result<Ladder, LadderError>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl LadderReport {
    /// The ladder words, or an empty slice when no ladder was found
    #[must_use]
    pub fn words(&self) -> &[String] {
        self.outcome.as_ref().map_or(&[], |ladder| ladder.words())
    }
}

/// Solve a ladder with the given solver
pub fn solve_ladder<S: NeighborStrategy>(
    config: LadderConfig,
    solver: &LadderSolver<S>,
) -> LadderReport {
    let started = Instant::now();
    let (outcome, stats) = solver.find_ladder_with_stats(&config.start, &config.end);

    LadderReport {
        start: config.start,
        end: config.end,
        outcome,
        stats,
        duration: started.elapsed(),
    }
}
