//! Benchmark command
//!
//! Solves many random word pairs in parallel and summarizes ladder lengths
//! and throughput.

use crate::core::Dictionary;
use crate::solver::{LadderSolver, NeighborStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: u64,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_pairs: usize,
    pub found: usize,
    pub not_found: usize,
    pub average_length: f64,
    pub max_length: usize,
    /// Ladder length (word count) to number of pairs
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Draw `count` random start/end pairs from the dictionary
///
/// The same seed always yields the same pairs. Returns no pairs for a
/// dictionary with fewer than two words.
#[must_use]
pub fn sample_pairs(dictionary: &Dictionary, count: usize, seed: u64) -> Vec<(String, String)> {
    let words: Vec<&str> = dictionary.iter().collect();
    if words.len() < 2 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    // Grows as pairs are drawn; `count` comes straight from the command line
    let mut pairs = Vec::new();

    while pairs.len() < count {
        let (Some(&start), Some(&end)) = (words.choose(&mut rng), words.choose(&mut rng)) else {
            break;
        };
        if start != end {
            pairs.push((start.to_string(), end.to_string()));
        }
    }

    pairs
}

/// Solve every pair in parallel
pub fn run_benchmark<S: NeighborStrategy + Sync>(
    solver: &LadderSolver<S>,
    pairs: &[(String, String)],
) -> BenchmarkResult {
    let pb = ProgressBar::new(pairs.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let lengths: Vec<Option<usize>> = pairs
        .par_iter()
        .map(|(from, to)| {
            let length = solver.find_ladder(from, to).ok().map(|ladder| ladder.len());
            pb.inc(1);
            length
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &length in lengths.iter().flatten() {
        *distribution.entry(length).or_insert(0) += 1;
    }

    let found: usize = distribution.values().sum();
    let total_length: usize = distribution.iter().map(|(len, count)| len * count).sum();
    let total_pairs = pairs.len();

    BenchmarkResult {
        total_pairs,
        found,
        not_found: total_pairs - found,
        average_length: if found > 0 {
            total_length as f64 / found as f64
        } else {
            0.0
        },
        max_length: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        duration,
        searches_per_second: total_pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ScanStrategy;
    use crate::wordlists::loader::dictionary_from_slice;

    fn dictionary() -> Dictionary {
        dictionary_from_slice(&["cat", "cot", "cog", "dog", "bat", "bag", "xyz"])
    }

    #[test]
    fn sample_pairs_is_reproducible() {
        let dict = dictionary();
        let first = sample_pairs(&dict, 20, 7);
        let second = sample_pairs(&dict, 20, 7);

        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
        assert!(first.iter().all(|(a, b)| a != b));
    }

    #[test]
    fn sample_pairs_repeats_when_count_exceeds_distinct_pairs() {
        let dict = dictionary_from_slice(&["cat", "cot", "dog"]);
        let pairs = sample_pairs(&dict, 50, 3);

        assert_eq!(pairs.len(), 50);
        assert!(pairs.iter().all(|(a, b)| a != b && dict.contains(a) && dict.contains(b)));
        assert!(sample_pairs(&dict, 0, 3).is_empty());
    }

    #[test]
    fn sample_pairs_needs_two_words() {
        let dict = dictionary_from_slice(&["cat"]);
        assert!(sample_pairs(&dict, 5, 1).is_empty());
    }

    #[test]
    fn benchmark_counts_add_up() {
        let dict = dictionary();
        let solver = LadderSolver::new(ScanStrategy, &dict);
        let pairs = sample_pairs(&dict, 30, 42);

        let result = run_benchmark(&solver, &pairs);

        assert_eq!(result.total_pairs, 30);
        assert_eq!(result.found + result.not_found, 30);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.found);
    }

    #[test]
    fn benchmark_known_pairs() {
        let dict = dictionary();
        let solver = LadderSolver::new(ScanStrategy, &dict);
        let pairs = vec![
            ("cat".to_string(), "dog".to_string()),
            ("cat".to_string(), "cot".to_string()),
            ("cat".to_string(), "xyz".to_string()),
        ];

        let result = run_benchmark(&solver, &pairs);

        assert_eq!(result.found, 2);
        assert_eq!(result.not_found, 1);
        assert_eq!(result.max_length, 4);
        assert!((result.average_length - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.distribution.get(&2), Some(&1));
        assert_eq!(result.distribution.get(&4), Some(&1));
    }

    #[test]
    fn benchmark_empty_pairs() {
        let dict = dictionary();
        let solver = LadderSolver::new(ScanStrategy, &dict);

        let result = run_benchmark(&solver, &[]);

        assert_eq!(result.total_pairs, 0);
        assert_eq!(result.found, 0);
        assert!(result.average_length.abs() < f64::EPSILON);
    }
}
