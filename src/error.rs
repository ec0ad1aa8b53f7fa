//! Error types for indexing operations.
//!
//! Empty inputs and selectors that match nothing are valid states handled
//! locally (they produce empty results); only two conditions surface as
//! errors: an unrecognized ranking criterion at the API boundary, and a
//! failure reported by the term-extraction collaborator, which is passed
//! through unmodified.

use thiserror::Error;

/// Result type alias for indexing operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors that can occur while indexing or summarizing a document.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A criterion name not in the closed set (frequency, specificity,
    /// probability) was supplied.
    #[error("unknown ranking criterion: {name}")]
    UnknownCriterion { name: String },

    /// The term-extraction collaborator failed.
    #[error("term extraction failed: {reason}")]
    Extraction { reason: String },
}

impl IndexError {
    /// Create a new extraction error.
    #[must_use]
    pub fn extraction(reason: impl Into<String>) -> Self {
        Self::Extraction {
            reason: reason.into(),
        }
    }

    /// Create a new unknown-criterion error.
    #[must_use]
    pub fn unknown_criterion(name: impl Into<String>) -> Self {
        Self::UnknownCriterion { name: name.into() }
    }
}
