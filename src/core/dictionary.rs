//! Dictionary of ladder words
//!
//! Words are stored lowercase, bucketed by character count and sorted inside
//! each bucket. Sorted buckets give lexicographic iteration (which fixes the
//! search tie-break) and let lookups binary-search a single bucket.

use std::collections::BTreeMap;
use std::fmt;

/// A read-only set of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    by_length: BTreeMap<usize, Vec<String>>,
    alphabet: Vec<char>,
    len: usize,
}

/// Lowercase and trim a word the way the dictionary stores it
///
/// # Examples
/// ```
/// use word_ladder::core::normalize;
///
/// assert_eq!(normalize("  Ladder\n"), "ladder");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Words are trimmed and lowercased; empty entries and duplicates are
    /// dropped.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["Cat", "cot", "COT", ""]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("cot"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();

        for word in words {
            let word = normalize(word.as_ref());
            if word.is_empty() {
                continue;
            }
            by_length.entry(word.chars().count()).or_default().push(word);
        }

        let mut len = 0;
        let mut alphabet: Vec<char> = Vec::new();
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
            bucket.dedup();
            len += bucket.len();
            alphabet.extend(bucket.iter().flat_map(|w| w.chars()));
        }
        alphabet.sort_unstable();
        alphabet.dedup();

        Self {
            by_length,
            alphabet,
            len,
        }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the dictionary holds no words
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up a word, returning the dictionary's own copy
    ///
    /// The lookup is exact: callers pass already-normalized words.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        let bucket = self.by_length.get(&word.chars().count())?;
        bucket
            .binary_search_by(|candidate| candidate.as_str().cmp(word))
            .ok()
            .map(|idx| bucket[idx].as_str())
    }

    /// Whether the dictionary contains `word` (exact, already normalized)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Words with exactly `length` characters, sorted
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Sorted set of every character used by some word
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Iterate all words, shortest first, lexicographic within a length
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.by_length.values().flatten().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words over {} letters",
            self.len,
            self.alphabet.len()
        )
    }
}
