//! Ladder self-check command
//!
//! Runs known start/end pairs against a real word list and compares ladder
//! lengths with the expected ones.

use crate::solver::{LadderSolver, NeighborStrategy};

/// A start/end pair with the expected ladder length (word count)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyCase {
    pub start: &'static str,
    pub end: &'static str,
    pub expected_len: usize,
}

impl VerifyCase {
    #[must_use]
    pub const fn new(start: &'static str, end: &'static str, expected_len: usize) -> Self {
        Self {
            start,
            end,
            expected_len,
        }
    }
}

/// Reference pairs for a standard English word list
pub const DEFAULT_CASES: &[VerifyCase] = &[
    VerifyCase::new("cat", "dog", 4),
    VerifyCase::new("marty", "curls", 6),
    VerifyCase::new("code", "data", 6),
    VerifyCase::new("work", "play", 6),
    VerifyCase::new("sleep", "awake", 8),
    VerifyCase::new("car", "cheat", 4),
];

/// Outcome of one case
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case: VerifyCase,
    pub ladder: Vec<String>,
    pub error: Option<String>,
    pub passed: bool,
}

/// Outcome of all cases
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub results: Vec<CaseResult>,
}

impl VerifyReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

/// Run every case, recording the ladder found for each
///
/// A failed search counts as a ladder of length 0.
pub fn run_verify<S: NeighborStrategy>(
    solver: &LadderSolver<S>,
    cases: &[VerifyCase],
) -> VerifyReport {
    let results = cases
        .iter()
        .map(|&case| {
            let (ladder, error) = match solver.find_ladder(case.start, case.end) {
                Ok(ladder) => (ladder.into_words(), None),
                Err(err) => (Vec::new(), Some(err.to_string())),
            };

            CaseResult {
                case,
                passed: ladder.len() == case.expected_len,
                ladder,
                error,
            }
        })
        .collect();

    VerifyReport { results }
}
