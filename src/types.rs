//! Core types shared across the crate.
//!
//! Ranking output types ([`RankedTerm`], [`SentenceRecord`], [`Location`])
//! derive `Serialize` so results can be handed to JSON consumers directly.
//! [`Criterion`] is a closed enumeration validated at the API boundary:
//! unrecognized names are rejected with an explicit error instead of being
//! looked up silently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// The statistic surfaced as the ranking factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Total occurrence mass of a term across all segments.
    #[default]
    Frequency,
    /// How disproportionately a term concentrates in few segments.
    Specificity,
    /// Peak within-segment likelihood of a term.
    Probability,
}

impl Criterion {
    /// Returns the user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Specificity => "specificity",
            Self::Probability => "probability",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frequency" => Ok(Self::Frequency),
            "specificity" => Ok(Self::Specificity),
            "probability" => Ok(Self::Probability),
            other => Err(IndexError::unknown_criterion(other)),
        }
    }
}

/// A term paired with its ranking factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTerm {
    /// The normalized term string.
    pub term: String,
    /// The selected statistic's value, boosted if the term appears in the
    /// document title.
    pub factor: f64,
}

impl RankedTerm {
    /// Create a new ranked term.
    pub fn new(term: impl Into<String>, factor: f64) -> Self {
        Self {
            term: term.into(),
            factor,
        }
    }
}

/// An orderable key encoding a sentence's position in original reading
/// order: segment selector ordinal, matched node ordinal within that
/// selector, sentence ordinal within the node's text.
///
/// The derived lexicographic `Ord` recovers document order, and distinct
/// positions can never collide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Location {
    pub segment: u32,
    pub node: u32,
    pub sentence: u32,
}

impl Location {
    /// Create a new location key.
    pub fn new(segment: u32, node: u32, sentence: u32) -> Self {
        Self {
            segment,
            node,
            sentence,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.segment, self.node, self.sentence)
    }
}

/// A candidate sentence with its keywords and summed keyword factor.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceRecord {
    /// The sentence text, trimmed of surrounding whitespace.
    pub text: String,
    /// Position of the sentence in original reading order.
    pub location: Location,
    /// Terms the extractor found in this sentence.
    pub keywords: Vec<String>,
    /// Sum of the ranked-keyword factors of `keywords` (0 if none carry a
    /// factor).
    pub factor: f64,
}

/// Selectors addressing the title and the ordered segment locations of a
/// document. Resolution is delegated to a [`DocumentQuery`]
/// implementation.
///
/// [`DocumentQuery`]: crate::document::DocumentQuery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selectors {
    /// Selector for the document title (used for factor boosting).
    pub title: String,
    /// Ordered selectors for the document segments.
    pub segments: Vec<String>,
}

impl Selectors {
    /// Create a new selector set.
    pub fn new<S, I>(title: impl Into<String>, segments: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self {
            title: title.into(),
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration held by an [`Indexer`](crate::indexer::Indexer) instance.
///
/// No other state survives across `index`/`summarize` calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Multiplier applied to a term's factor when it also appears in the
    /// document title.
    pub title_boost: f64,
    /// Maximum number of sentences returned by `summarize`.
    pub summary_size: usize,
    /// Delimiter used to split segment text into candidate sentences.
    pub delimiter: char,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            title_boost: 2.0,
            summary_size: 12,
            delimiter: '.',
        }
    }
}

impl IndexerConfig {
    /// Set the title boost multiplier (clamped to be non-negative so the
    /// boost is always monotonic).
    pub fn with_title_boost(mut self, boost: f64) -> Self {
        self.title_boost = boost.max(0.0);
        self
    }

    /// Set the maximum number of sentences returned by `summarize`.
    pub fn with_summary_size(mut self, size: usize) -> Self {
        self.summary_size = size;
        self
    }

    /// Set the sentence delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criterion_from_str() {
        assert_eq!(
            "frequency".parse::<Criterion>().unwrap(),
            Criterion::Frequency
        );
        assert_eq!(
            "specificity".parse::<Criterion>().unwrap(),
            Criterion::Specificity
        );
        assert_eq!(
            "probability".parse::<Criterion>().unwrap(),
            Criterion::Probability
        );
    }

    #[test]
    fn test_criterion_from_str_rejects_unknown() {
        let err = "entropy".parse::<Criterion>().unwrap_err();
        assert!(matches!(err, IndexError::UnknownCriterion { ref name } if name == "entropy"));
    }

    #[test]
    fn test_criterion_display_roundtrip() {
        for c in [
            Criterion::Frequency,
            Criterion::Specificity,
            Criterion::Probability,
        ] {
            assert_eq!(c.as_str().parse::<Criterion>().unwrap(), c);
        }
    }

    #[test]
    fn test_criterion_serde_snake_case() {
        let json = serde_json::to_string(&Criterion::Specificity).unwrap();
        assert_eq!(json, "\"specificity\"");
        let back: Criterion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Criterion::Specificity);
    }

    #[test]
    fn test_location_ordering_is_reading_order() {
        let a = Location::new(0, 0, 1);
        let b = Location::new(0, 1, 0);
        let c = Location::new(1, 0, 0);
        assert!(a < b);
        assert!(b < c);

        let mut locs = vec![c, a, b];
        locs.sort();
        assert_eq!(locs, vec![a, b, c]);
    }

    #[test]
    fn test_location_no_collisions() {
        // A digit-concatenated key would conflate (1, 2, 3) with
        // (12, 3, ...); the composite key keeps them distinct.
        assert_ne!(Location::new(1, 2, 3), Location::new(12, 3, 0));
    }

    #[test]
    fn test_config_defaults() {
        let cfg = IndexerConfig::default();
        assert_eq!(cfg.title_boost, 2.0);
        assert_eq!(cfg.summary_size, 12);
        assert_eq!(cfg.delimiter, '.');
    }

    #[test]
    fn test_config_builders() {
        let cfg = IndexerConfig::default()
            .with_title_boost(1.5)
            .with_summary_size(5)
            .with_delimiter('!');
        assert_eq!(cfg.title_boost, 1.5);
        assert_eq!(cfg.summary_size, 5);
        assert_eq!(cfg.delimiter, '!');
    }

    #[test]
    fn test_config_boost_never_negative() {
        let cfg = IndexerConfig::default().with_title_boost(-3.0);
        assert_eq!(cfg.title_boost, 0.0);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let cfg: IndexerConfig = serde_json::from_str(r#"{ "summary_size": 6 }"#).unwrap();
        assert_eq!(cfg.summary_size, 6);
        assert_eq!(cfg.title_boost, 2.0);
    }

    #[test]
    fn test_selectors_new() {
        let sel = Selectors::new("title", ["p", "blockquote"]);
        assert_eq!(sel.title, "title");
        assert_eq!(sel.segments, vec!["p", "blockquote"]);
    }
}
