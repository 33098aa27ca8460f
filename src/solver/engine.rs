//! Main ladder search interface

use super::error::LadderError;
use super::strategy::{NeighborStrategy, StrategyType};
use crate::core::{Dictionary, Ladder, normalize};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Ladders taken off the frontier and expanded
    pub expanded: usize,
    /// Ladders pushed onto the frontier (excluding the start)
    pub enqueued: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
}

/// Breadth-first word ladder solver
///
/// Coordinates the search over a borrowed dictionary using a given neighbor
/// strategy. The solver holds no per-search state, so one instance can serve
/// many searches, including concurrent ones.
pub struct LadderSolver<'a, S: NeighborStrategy> {
    strategy: S,
    dictionary: &'a Dictionary,
    expansion_limit: Option<usize>,
}

impl<'a, S: NeighborStrategy> LadderSolver<'a, S> {
    /// Create a new solver with the given strategy and dictionary
    pub const fn new(strategy: S, dictionary: &'a Dictionary) -> Self {
        Self {
            strategy,
            dictionary,
            expansion_limit: None,
        }
    }

    /// Stop searches after expanding `limit` ladders
    ///
    /// `None` (the default) searches until the frontier is exhausted, which
    /// always terminates because each word is enqueued at most once.
    #[must_use]
    pub const fn with_expansion_limit(mut self, limit: Option<usize>) -> Self {
        self.expansion_limit = limit;
        self
    }

    /// The dictionary this solver searches
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Find a shortest ladder from `start` to `end`
    ///
    /// Both words are trimmed and lowercased first. Among several shortest
    /// ladders, the one reached first by expanding neighbors in
    /// lexicographic order is returned.
    ///
    /// # Errors
    ///
    /// - [`LadderError::TrivialRequest`] if start and end are the same word
    /// - [`LadderError::WordNotFound`] if either word is not in the dictionary
    /// - [`LadderError::NoLadderFound`] if no ladder connects them
    /// - [`LadderError::SearchLimitReached`] if the expansion limit was hit
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    /// use word_ladder::solver::{LadderSolver, ScanStrategy};
    ///
    /// let dict = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
    /// let solver = LadderSolver::new(ScanStrategy, &dict);
    ///
    /// let ladder = solver.find_ladder("cat", "dog").unwrap();
    /// assert_eq!(ladder.to_string(), "cat cot cog dog");
    /// ```
    pub fn find_ladder(&self, start: &str, end: &str) -> Result<Ladder, LadderError> {
        self.find_ladder_with_stats(start, end).0
    }

    /// Like [`find_ladder`](Self::find_ladder), also returning search counters
    pub fn find_ladder_with_stats(
        &self,
        start: &str,
        end: &str,
    ) -> (Result<Ladder, LadderError>, SearchStats) {
        let mut stats = SearchStats::default();
        let result = self.search(&normalize(start), &normalize(end), &mut stats);

        debug!(
            start,
            end,
            expanded = stats.expanded,
            enqueued = stats.enqueued,
            found = result.is_ok(),
            "ladder search finished"
        );

        (result, stats)
    }

    fn search(
        &self,
        start: &str,
        end: &str,
        stats: &mut SearchStats,
    ) -> Result<Ladder, LadderError> {
        if start == end {
            return Err(LadderError::TrivialRequest {
                word: start.to_string(),
            });
        }

        let start_word = self
            .dictionary
            .get(start)
            .ok_or_else(|| LadderError::WordNotFound {
                word: start.to_string(),
            })?;
        let end_word = self
            .dictionary
            .get(end)
            .ok_or_else(|| LadderError::WordNotFound {
                word: end.to_string(),
            })?;

        // Every visited word maps to the word it was reached from
        let mut parents: FxHashMap<&'a str, Option<&'a str>> = FxHashMap::default();
        parents.insert(start_word, None);

        let mut frontier: VecDeque<&'a str> = VecDeque::from([start_word]);

        while let Some(last) = frontier.pop_front() {
            if let Some(limit) = self
                .expansion_limit
                .filter(|&limit| stats.expanded >= limit)
            {
                return Err(LadderError::SearchLimitReached { limit });
            }
            stats.expanded += 1;

            for candidate in self.strategy.neighbors(last, self.dictionary) {
                if parents.contains_key(candidate) {
                    continue;
                }
                parents.insert(candidate, Some(last));

                if candidate == end_word {
                    return Ok(rebuild_ladder(&parents, candidate));
                }

                frontier.push_back(candidate);
                stats.enqueued += 1;
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        Err(LadderError::NoLadderFound {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

/// Walk parent links back from `last` to the start word
fn rebuild_ladder(parents: &FxHashMap<&str, Option<&str>>, last: &str) -> Ladder {
    let mut words = vec![last.to_string()];
    let mut cursor = parents.get(last).copied().flatten();

    while let Some(word) = cursor {
        words.push(word.to_string());
        cursor = parents.get(word).copied().flatten();
    }

    words.reverse();
    Ladder::new(words)
}

/// Shortest ladder from `start` to `end`, or an empty vector
///
/// Picks a neighbor strategy by dictionary size. Failures are reported as a
/// `tracing` warning and never abort; the caller only sees the empty result.
///
/// # Examples
/// ```
/// use word_ladder::core::Dictionary;
/// use word_ladder::solver::generate_word_ladder;
///
/// let dict = Dictionary::from_words(["hot", "dot", "dog"]);
/// assert_eq!(generate_word_ladder("hot", "dog", &dict), ["hot", "dot", "dog"]);
/// assert!(generate_word_ladder("hot", "xyz", &dict).is_empty());
/// ```
#[must_use]
pub fn generate_word_ladder(start: &str, end: &str, dictionary: &Dictionary) -> Vec<String> {
    let solver = LadderSolver::new(StrategyType::auto(dictionary), dictionary);

    match solver.find_ladder(start, end) {
        Ok(ladder) => ladder.into_words(),
        Err(err) => {
            warn!("Cannot create word ladder from {start} to {end}: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{MutationStrategy, ScanStrategy};

    fn words(ladder: &Ladder) -> Vec<&str> {
        ladder.iter().map(String::as_str).collect()
    }

    #[test]
    fn cat_to_dog() {
        let dict = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        let ladder = solver.find_ladder("cat", "dog").unwrap();
        assert_eq!(words(&ladder), vec!["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn hot_to_dog() {
        let dict = Dictionary::from_words(["hot", "dot", "dog"]);
        let solver = LadderSolver::new(MutationStrategy, &dict);

        let ladder = solver.find_ladder("hot", "dog").unwrap();
        assert_eq!(words(&ladder), vec!["hot", "dot", "dog"]);
    }

    #[test]
    fn missing_end_word() {
        let dict = Dictionary::from_words(["cat", "dog"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        assert_eq!(
            solver.find_ladder("cat", "xyz"),
            Err(LadderError::WordNotFound {
                word: "xyz".to_string()
            })
        );
    }

    #[test]
    fn missing_start_word_reported_first() {
        let dict = Dictionary::from_words(["cat"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        assert_eq!(
            solver.find_ladder("abc", "xyz"),
            Err(LadderError::WordNotFound {
                word: "abc".to_string()
            })
        );
    }

    #[test]
    fn same_word_is_trivial() {
        let dict = Dictionary::from_words(["cat", "cot"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        assert!(matches!(
            solver.find_ladder("cat", "CAT"),
            Err(LadderError::TrivialRequest { .. })
        ));
        // Trivial even when the word is not in the dictionary
        assert!(matches!(
            solver.find_ladder("zzz", "zzz"),
            Err(LadderError::TrivialRequest { .. })
        ));
    }

    #[test]
    fn disconnected_words() {
        let dict = Dictionary::from_words(["cat", "cot", "dog", "dig"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        assert_eq!(
            solver.find_ladder("cat", "dig"),
            Err(LadderError::NoLadderFound {
                start: "cat".to_string(),
                end: "dig".to_string()
            })
        );
    }

    #[test]
    fn adjacent_words_give_two_word_ladder() {
        let dict = Dictionary::from_words(["cat", "cart"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        let ladder = solver.find_ladder("cat", "cart").unwrap();
        assert_eq!(words(&ladder), vec!["cat", "cart"]);
        assert_eq!(ladder.steps(), 1);
    }

    #[test]
    fn input_is_normalized() {
        let dict = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        let ladder = solver.find_ladder("  CAT", "Dog ").unwrap();
        assert_eq!(words(&ladder), vec!["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn ties_break_lexicographically() {
        // cat -> bot through either bat or cot; bat sorts first
        let dict = Dictionary::from_words(["cat", "cot", "bat", "bot"]);

        for ladder in [
            LadderSolver::new(ScanStrategy, &dict).find_ladder("cat", "bot"),
            LadderSolver::new(MutationStrategy, &dict).find_ladder("cat", "bot"),
        ] {
            assert_eq!(words(&ladder.unwrap()), vec!["cat", "bat", "bot"]);
        }
    }

    #[test]
    fn ladder_uses_insertions_and_deletions() {
        let dict = Dictionary::from_words(["car", "cat", "chat", "cheat", "cheap"]);
        let solver = LadderSolver::new(MutationStrategy, &dict);

        let ladder = solver.find_ladder("car", "cheat").unwrap();
        assert_eq!(words(&ladder), vec!["car", "cat", "chat", "cheat"]);
        assert!(ladder.is_connected());
    }

    #[test]
    fn prefers_shorter_ladder_over_first_branch() {
        // bat sorts first but only reaches cog in four steps
        let dict = Dictionary::from_words(["cat", "bat", "bag", "bog", "cot", "cog"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        let ladder = solver.find_ladder("cat", "cog").unwrap();
        assert_eq!(words(&ladder), vec!["cat", "cot", "cog"]);
    }

    #[test]
    fn expansion_limit_stops_search() {
        let dict = Dictionary::from_words(["cat", "cot", "cog", "dog"]);

        let limited = LadderSolver::new(ScanStrategy, &dict).with_expansion_limit(Some(1));
        assert_eq!(
            limited.find_ladder("cat", "dog"),
            Err(LadderError::SearchLimitReached { limit: 1 })
        );

        let enough = LadderSolver::new(ScanStrategy, &dict).with_expansion_limit(Some(3));
        assert!(enough.find_ladder("cat", "dog").is_ok());
    }

    #[test]
    fn stats_count_expansions() {
        let dict = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let solver = LadderSolver::new(ScanStrategy, &dict);

        let (result, stats) = solver.find_ladder_with_stats("cat", "dog");
        assert!(result.is_ok());
        assert_eq!(stats.expanded, 3);
        assert_eq!(stats.enqueued, 2);
        assert_eq!(stats.max_frontier, 1);
    }

    #[test]
    fn generate_returns_empty_on_failure() {
        let dict = Dictionary::from_words(["cat", "dog"]);

        assert!(generate_word_ladder("cat", "xyz", &dict).is_empty());
        assert!(generate_word_ladder("cat", "dog", &dict).is_empty());
        assert!(generate_word_ladder("cat", "cat", &dict).is_empty());
    }

    #[test]
    fn generate_returns_words() {
        let dict = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        assert_eq!(
            generate_word_ladder("cat", "dog", &dict),
            vec!["cat", "cot", "cog", "dog"]
        );
    }

    #[test]
    fn solver_is_reusable() {
        let dict = Dictionary::from_words(["cat", "cot", "cog", "dog"]);
        let solver = LadderSolver::new(StrategyType::auto(&dict), &dict);

        let first = solver.find_ladder("cat", "dog").unwrap();
        let second = solver.find_ladder("dog", "cat").unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(solver.dictionary().len(), 4);
    }
}
