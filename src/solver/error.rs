//! Ladder search failures
//!
//! Every variant means "no ladder" to the caller; they stay distinct so the
//! diagnostic says why.

use thiserror::Error;

/// Why a ladder search produced no ladder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Start or end word is not in the dictionary
    #[error("word '{word}' is not in the dictionary")]
    WordNotFound { word: String },

    /// Every reachable word was explored without reaching the end word
    #[error("no ladder connects '{start}' to '{end}'")]
    NoLadderFound { start: String, end: String },

    /// Start and end are the same word after normalization
    #[error("start and end are both '{word}', nothing to transform")]
    TrivialRequest { word: String },

    /// The configured expansion limit stopped the search early
    #[error("search stopped after expanding {limit} ladders")]
    SearchLimitReached { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinguishable() {
        let not_found = LadderError::WordNotFound {
            word: "xyz".to_string(),
        };
        let no_ladder = LadderError::NoLadderFound {
            start: "cat".to_string(),
            end: "dog".to_string(),
        };
        let trivial = LadderError::TrivialRequest {
            word: "cat".to_string(),
        };

        assert_eq!(not_found.to_string(), "word 'xyz' is not in the dictionary");
        assert_eq!(no_ladder.to_string(), "no ladder connects 'cat' to 'dog'");
        assert!(trivial.to_string().contains("nothing to transform"));
        assert_ne!(not_found.to_string(), no_ladder.to_string());
    }

    #[test]
    fn limit_message_names_limit() {
        let err = LadderError::SearchLimitReached { limit: 10 };
        assert!(err.to_string().contains("10"));
    }
}
