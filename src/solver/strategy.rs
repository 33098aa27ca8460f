//! Neighbor enumeration strategies
//!
//! Defines the `NeighborStrategy` trait and concrete implementations. Both
//! strategies return the same candidate set; they differ only in cost.
//! Scanning is proportional to the dictionary size, mutation to word length
//! times alphabet size.

use crate::core::{Dictionary, is_adjacent};
use std::collections::BTreeSet;
use tracing::warn;

/// Dictionaries at or below this size are scanned; larger ones are searched
/// with generated mutations.
pub const SCAN_THRESHOLD: usize = 2_000;

/// A strategy for listing the dictionary words adjacent to a word
pub trait NeighborStrategy {
    /// All dictionary words one edit away from `word`
    ///
    /// `word` is already normalized. The result is sorted lexicographically,
    /// free of duplicates, and never contains `word` itself.
    fn neighbors<'d>(&self, word: &str, dictionary: &'d Dictionary) -> Vec<&'d str>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Test every word of compatible length with the edit-distance oracle
    Scan(ScanStrategy),
    /// Generate single-character edits and look them up in the dictionary
    Mutation(MutationStrategy),
}

impl NeighborStrategy for StrategyType {
    fn neighbors<'d>(&self, word: &str, dictionary: &'d Dictionary) -> Vec<&'d str> {
        match self {
            Self::Scan(s) => s.neighbors(word, dictionary),
            Self::Mutation(s) => s.neighbors(word, dictionary),
        }
    }
}

impl StrategyType {
    /// Pick the cheaper strategy for a dictionary of this size
    #[must_use]
    pub const fn auto(dictionary: &Dictionary) -> Self {
        if dictionary.len() <= SCAN_THRESHOLD {
            Self::Scan(ScanStrategy)
        } else {
            Self::Mutation(MutationStrategy)
        }
    }

    /// Create strategy from name string
    ///
    /// Supported names: "scan", "mutation", "auto". Any other name logs a
    /// warning and selects by dictionary size like "auto".
    #[must_use]
    pub fn from_name(name: &str, dictionary: &Dictionary) -> Self {
        match name {
            "scan" => Self::Scan(ScanStrategy),
            "mutation" | "mutate" => Self::Mutation(MutationStrategy),
            "auto" => Self::auto(dictionary),
            other => {
                let fallback = Self::auto(dictionary);
                warn!(
                    name = other,
                    fallback = fallback.name(),
                    "unknown strategy, selecting by dictionary size"
                );
                fallback
            }
        }
    }

    /// Short name used in logs and reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scan(_) => "scan",
            Self::Mutation(_) => "mutation",
        }
    }
}

/// Dictionary scan strategy
///
/// Only buckets of length n-1, n and n+1 can hold neighbors, so the rest of
/// the dictionary is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStrategy;

impl NeighborStrategy for ScanStrategy {
    fn neighbors<'d>(&self, word: &str, dictionary: &'d Dictionary) -> Vec<&'d str> {
        let length = word.chars().count();

        let mut found: Vec<&'d str> = (length.saturating_sub(1)..=length + 1)
            .flat_map(|len| dictionary.words_of_length(len))
            .map(String::as_str)
            .filter(|&candidate| candidate != word && is_adjacent(word, candidate))
            .collect();

        found.sort_unstable();
        found.dedup();
        found
    }
}

/// Direct mutation strategy
///
/// Generates every deletion, every insertion and every substitution over the
/// dictionary's alphabet, keeping those that are dictionary words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationStrategy;

impl NeighborStrategy for MutationStrategy {
    fn neighbors<'d>(&self, word: &str, dictionary: &'d Dictionary) -> Vec<&'d str> {
        let chars: Vec<char> = word.chars().collect();
        let alphabet = dictionary.alphabet();
        let mut found: BTreeSet<&'d str> = BTreeSet::new();
        let mut buffer = String::with_capacity(word.len() + 4);

        let mut lookup = |candidate: &[char], buffer: &mut String| {
            buffer.clear();
            buffer.extend(candidate);
            if let Some(hit) = dictionary.get(buffer) {
                found.insert(hit);
            }
        };

        let mut candidate: Vec<char> = Vec::with_capacity(chars.len() + 1);

        // Deletions
        for i in 0..chars.len() {
            candidate.clear();
            candidate.extend_from_slice(&chars[..i]);
            candidate.extend_from_slice(&chars[i + 1..]);
            lookup(&candidate, &mut buffer);
        }

        // Insertions
        for i in 0..=chars.len() {
            for &c in alphabet {
                candidate.clear();
                candidate.extend_from_slice(&chars[..i]);
                candidate.push(c);
                candidate.extend_from_slice(&chars[i..]);
                lookup(&candidate, &mut buffer);
            }
        }

        // Substitutions
        for i in 0..chars.len() {
            for &c in alphabet {
                if c == chars[i] {
                    continue;
                }
                candidate.clear();
                candidate.extend_from_slice(&chars);
                candidate[i] = c;
                lookup(&candidate, &mut buffer);
            }
        }

        found.remove(word);
        found.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "at", "cat", "cot", "cog", "dog", "cart", "chat", "scat", "ca", "bat", "act",
        ])
    }

    #[test]
    fn scan_finds_all_edit_kinds() {
        let dict = dictionary();
        let found = ScanStrategy.neighbors("cat", &dict);
        assert_eq!(found, vec!["at", "bat", "ca", "cart", "chat", "cot", "scat"]);
    }

    #[test]
    fn mutation_matches_scan() {
        let dict = dictionary();
        for word in dict.iter() {
            assert_eq!(
                MutationStrategy.neighbors(word, &dict),
                ScanStrategy.neighbors(word, &dict),
                "neighbors of {word}"
            );
        }
    }

    #[test]
    fn mutation_handles_words_outside_dictionary() {
        let dict = dictionary();
        assert_eq!(MutationStrategy.neighbors("cit", &dict), vec!["cat", "cot"]);
        assert_eq!(ScanStrategy.neighbors("cit", &dict), vec!["cat", "cot"]);
    }

    #[test]
    fn mutation_deduplicates_repeated_letters() {
        let dict = Dictionary::from_words(["tool", "tol", "toll"]);
        assert_eq!(MutationStrategy.neighbors("tool", &dict), vec!["tol", "toll"]);
        assert_eq!(MutationStrategy.neighbors("tol", &dict), vec!["toll", "tool"]);
    }

    #[test]
    fn neighbors_exclude_word_itself() {
        let dict = dictionary();
        assert!(!ScanStrategy.neighbors("cat", &dict).contains(&"cat"));
        assert!(!MutationStrategy.neighbors("cat", &dict).contains(&"cat"));
    }

    #[test]
    fn empty_dictionary_has_no_neighbors() {
        let dict = Dictionary::default();
        assert!(ScanStrategy.neighbors("cat", &dict).is_empty());
        assert!(MutationStrategy.neighbors("cat", &dict).is_empty());
    }

    #[test]
    fn auto_picks_by_size() {
        let small = dictionary();
        assert_eq!(StrategyType::auto(&small).name(), "scan");

        let large = Dictionary::from_words((0..=SCAN_THRESHOLD).map(|i| format!("w{i}")));
        assert_eq!(StrategyType::auto(&large).name(), "mutation");
    }

    #[test]
    fn from_name_parses_known_names() {
        let dict = dictionary();
        assert_eq!(StrategyType::from_name("scan", &dict).name(), "scan");
        assert_eq!(StrategyType::from_name("mutation", &dict).name(), "mutation");
        assert_eq!(StrategyType::from_name("mutate", &dict).name(), "mutation");
        assert_eq!(StrategyType::from_name("auto", &dict).name(), "scan");
    }

    #[test]
    fn from_name_falls_back_on_unknown_name() {
        let small = dictionary();
        assert_eq!(StrategyType::from_name("sacn", &small), StrategyType::auto(&small));

        let large = Dictionary::from_words((0..=SCAN_THRESHOLD).map(|i| format!("w{i}")));
        assert_eq!(StrategyType::from_name("", &large), StrategyType::auto(&large));
        assert_eq!(StrategyType::from_name("sacn", &large).name(), "mutation");
    }
}
