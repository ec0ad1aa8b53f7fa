//! Term-extraction boundary.
//!
//! Tokenization, filtering, dictionary and stopword logic live behind the
//! [`TermExtractor`] capability trait: given a text, return the candidate
//! terms found in it. The core forwards texts and aggregates results; it
//! performs no linguistic analysis of its own. [`BasicExtractor`] is the
//! default implementation; tests substitute stubs freely.

pub mod basic;
pub mod stopwords;

pub use basic::BasicExtractor;
pub use stopwords::StopwordFilter;

use serde::Serialize;

use crate::error::Result;

/// A term found in a text, with its within-text occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedTerm {
    /// The normalized term string.
    pub term: String,
    /// Number of occurrences within the extracted text.
    pub count: u32,
}

impl ExtractedTerm {
    /// Create a new extracted term.
    pub fn new(term: impl Into<String>, count: u32) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// The result of extracting terms from one text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    /// Distinct extracted terms, in first-seen order.
    pub keys: Vec<String>,
    /// Extracted term records with occurrence counts, aligned with `keys`.
    pub terms: Vec<ExtractedTerm>,
}

impl Extraction {
    /// Check whether the extraction found no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of distinct terms found.
    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

/// The term-extraction collaborator contract.
///
/// Implementations carry their own filter, dictionary, and stopword
/// configuration; the core treats them as opaque. Failures are surfaced
/// as [`IndexError::Extraction`](crate::error::IndexError::Extraction) and
/// propagate to the caller unmodified; the core never retries or masks
/// them.
pub trait TermExtractor {
    /// Extract candidate terms from `text`.
    fn extract(&self, text: &str) -> Result<Extraction>;
}
