//! Word ladder representation

use super::distance::is_adjacent;
use std::fmt;
use std::ops::Deref;

/// An ordered chain of words, each one edit away from the previous
///
/// Ladders returned by the solver always start at the requested start word
/// and end at the requested end word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ladder(Vec<String>);

impl Ladder {
    /// Wrap a word sequence without checking adjacency
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    /// The words of the ladder, start first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Number of edits from start to end (one less than the word count)
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Check that every consecutive pair is adjacent
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Ladder;
    ///
    /// let good = Ladder::new(vec!["hot".into(), "dot".into(), "dog".into()]);
    /// assert!(good.is_connected());
    ///
    /// let bad = Ladder::new(vec!["hot".into(), "dog".into()]);
    /// assert!(!bad.is_connected());
    /// ```
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.0.windows(2).all(|pair| is_adjacent(&pair[0], &pair[1]))
    }

    /// Consume the ladder, returning its words
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Ladder {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Ladder> for Vec<String> {
    fn from(ladder: Ladder) -> Self {
        ladder.0
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
