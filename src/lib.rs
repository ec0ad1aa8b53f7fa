//! # rapid-termrank
//!
//! Statistical keyword ranking and extractive summarization over segmented
//! documents.
//!
//! A document is addressed through selectors: one for the title, an
//! ordered list for the text segments. Terms extracted per segment feed a
//! term × segment occurrence matrix, from which three statistics are
//! derived per term: frequency, probability, and specificity. The chosen
//! statistic, boosted for terms also present in the title, becomes the
//! ranking factor. Summarization reuses that ranking as term weights to
//! score and select representative sentences.
//!
//! Tokenization, filtering, and stopword/dictionary logic live behind the
//! [`TermExtractor`] trait; document parsing and selector resolution live
//! behind [`DocumentQuery`]. Both are substitutable, and defaults are
//! provided ([`BasicExtractor`], [`MappedDocument`]).
//!
//! # Quick start
//!
//! ```
//! use rapid_termrank::{Criterion, Indexer, MappedDocument, Selectors};
//!
//! let doc = MappedDocument::new()
//!     .with_node("title", "Cats and Dogs")
//!     .with_node("p", "The cat sat on the mat.")
//!     .with_node("p", "The dog ran.");
//! let selectors = Selectors::new("title", ["p"]);
//!
//! let indexer = Indexer::new();
//! let ranked = indexer.index(&doc, &selectors, Criterion::Frequency)?;
//! assert!(!ranked.is_empty());
//!
//! let summary = indexer.summarize(&doc, &selectors, &ranked)?;
//! assert!(summary.len() <= indexer.config().summary_size);
//! # Ok::<(), rapid_termrank::IndexError>(())
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod indexer;
pub mod matrix;
pub mod types;

pub use document::{DocumentQuery, MappedDocument};
pub use error::{IndexError, Result};
pub use extract::{BasicExtractor, ExtractedTerm, Extraction, StopwordFilter, TermExtractor};
pub use indexer::Indexer;
pub use matrix::{
    compare, rank_descending, FilledMatrix, Ranked, SegmentTerm, StatsBundle, TermMatrix,
    TermStats,
};
pub use types::{Criterion, IndexerConfig, Location, RankedTerm, Selectors, SentenceRecord};
