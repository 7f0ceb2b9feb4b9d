//! Core types for the Concord sentence-retrieval engine.
//!
//! Shared between the engine library and its front-ends so both speak
//! in the same identifiers and configuration, without either pulling
//! in the other's dependencies.

#![warn(missing_docs)]

use core::fmt;

/// Unique sentence identifier.
///
/// Sentences are identified by their position in document order,
/// as a 32-bit unsigned integer. The original sentence and its
/// normalized token form share the same id.
pub type SentenceId = u32;

/// A normalized word unit: lowercase, stopword-filtered,
/// punctuation-stripped, reduced to its dictionary base form.
pub type Token = String;

/// A scored sentence match.
///
/// The ordering makes the better answer compare greater: a higher
/// score wins, and on equal scores the sentence earlier in the
/// document wins. Picking the maximum of a sequence of matches
/// therefore lands on the first sentence to reach the top score.
#[derive(Debug, Clone, Copy)]
pub struct Match {
    /// Sentence identifier (position in document order)
    pub sentence_id: SentenceId,
    /// Jaccard similarity against the query, in `[0, 1]`
    pub score: f32,
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.sentence_id == other.sentence_id && self.score == other.score
    }
}

impl Eq for Match {}

impl PartialOrd for Match {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Match {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Reversed id comparison: of two equal scores, the earlier
        // sentence is the greater match.
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.sentence_id.cmp(&self.sentence_id))
    }
}

impl Match {
    /// Creates a new match.
    #[inline(always)]
    pub const fn new(sentence_id: SentenceId, score: f32) -> Self {
        Self { sentence_id, score }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sentence={} score={:.3}", self.sentence_id, self.score)
    }
}

/// Retrieval configuration options.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrieveConfig {
    /// Response returned when no sentence scores above zero.
    /// Absence of a match is a normal outcome, not an error.
    pub fallback_message: String,
    /// Queries longer than this (in bytes) are answered with the
    /// fallback rather than scored. Unlimited by default; callers
    /// that expose the engine to untrusted input can set a cap.
    pub max_query_length: usize,
}

impl Default for RetrieveConfig {
    fn default() -> Self {
        Self {
            fallback_message: String::from("I couldn't find a relevant answer."),
            max_query_length: usize::MAX,
        }
    }
}

impl RetrieveConfig {
    /// Creates a configuration with a custom fallback message.
    pub fn with_fallback(fallback_message: impl Into<String>) -> Self {
        Self {
            fallback_message: fallback_message.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_compares_greater() {
        let strong = Match::new(5, 0.9);
        let weak = Match::new(0, 0.4);
        assert!(strong > weak);
    }

    #[test]
    fn equal_scores_prefer_earlier_sentence() {
        let early = Match::new(1, 0.9);
        let late = Match::new(3, 0.9);

        assert_ne!(early, late);
        assert!(early > late);
        // The maximum of a scan is the first sentence at the top score.
        assert_eq!([late, early].iter().max(), Some(&early));
    }

    #[test]
    fn identical_matches_are_equal() {
        assert_eq!(Match::new(2, 0.5), Match::new(2, 0.5));
    }

    #[test]
    fn match_display() {
        let m = Match::new(7, 0.25);
        assert_eq!(format!("{m}"), "sentence=7 score=0.250");
    }

    #[test]
    fn default_config_has_fallback_and_no_cap() {
        let config = RetrieveConfig::default();
        assert!(!config.fallback_message.is_empty());
        assert_eq!(config.max_query_length, usize::MAX);
    }

    #[test]
    fn custom_fallback() {
        let config = RetrieveConfig::with_fallback("no match");
        assert_eq!(config.fallback_message, "no match");
        assert_eq!(
            config.max_query_length,
            RetrieveConfig::default().max_query_length
        );
    }
}
