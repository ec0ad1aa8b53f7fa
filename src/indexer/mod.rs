//! Extraction orchestration and keyword ranking.
//!
//! [`Indexer`] drives one document through the term-extraction collaborator
//! and the occurrence matrix: title terms are extracted for boosting, each
//! segment selector is resolved and its matched nodes extracted, and the
//! collected records feed a fresh [`TermMatrix`] whose
//! `fill → stats → select` output is sorted into the ranked keyword list.
//!
//! The sentence-level `summarize` operation lives in [`summary`].

pub mod summary;

use rustc_hash::FxHashSet;

use crate::document::DocumentQuery;
use crate::error::Result;
use crate::extract::{BasicExtractor, TermExtractor};
use crate::matrix::{rank_descending, SegmentTerm, TermMatrix};
use crate::types::{Criterion, IndexerConfig, RankedTerm, Selectors};

/// Enter a tracing span for an indexing stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates
/// it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("indexing_stage", stage = $name).entered();
    };
}

pub(crate) use trace_stage;

/// Ranks keywords and selects summary sentences for one document at a time.
///
/// Holds only configuration and the extraction collaborator; each
/// `index`/`summarize` call is independent, so one instance is safely
/// usable from multiple callers.
#[derive(Debug, Clone)]
pub struct Indexer<E = BasicExtractor> {
    extractor: E,
    config: IndexerConfig,
}

impl Indexer<BasicExtractor> {
    /// Create an indexer with the default extractor and configuration.
    pub fn new() -> Self {
        Self {
            extractor: BasicExtractor::new(),
            config: IndexerConfig::default(),
        }
    }
}

impl Default for Indexer<BasicExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TermExtractor> Indexer<E> {
    /// Create an indexer around a custom extraction collaborator.
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            config: IndexerConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: IndexerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// The extraction collaborator.
    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Rank the document's keywords by `criterion`.
    ///
    /// Returns the ranked keyword list, descending by factor with stable
    /// ties. A document yielding no segments or no terms produces an empty
    /// list; extraction failures propagate unmodified.
    pub fn index<D: DocumentQuery>(
        &self,
        doc: &D,
        selectors: &Selectors,
        criterion: Criterion,
    ) -> Result<Vec<RankedTerm>> {
        trace_stage!("extract");
        let title_terms = self.title_terms(doc, selectors)?;
        let (data, segment_keys) = self.collect_segments(doc, selectors)?;
        if data.is_empty() || segment_keys.is_empty() {
            return Ok(Vec::new());
        }

        trace_stage!("matrix");
        let matrix = TermMatrix::new(&data, &segment_keys);
        let filled = matrix.fill(criterion);
        let stats = matrix.stats(&filled);

        trace_stage!("rank");
        let mut ranked = matrix.select(&stats, &title_terms, criterion, self.config.title_boost);
        rank_descending(&mut ranked);
        Ok(ranked)
    }

    /// Extract the set of title terms used for boosting. A title selector
    /// matching nothing yields an empty set, not an error.
    fn title_terms<D: DocumentQuery>(
        &self,
        doc: &D,
        selectors: &Selectors,
    ) -> Result<FxHashSet<String>> {
        let text = doc.select_text(&selectors.title);
        if text.trim().is_empty() {
            return Ok(FxHashSet::default());
        }
        Ok(self.extractor.extract(&text)?.keys.into_iter().collect())
    }

    /// Resolve every segment selector, extract each matched node, and
    /// return the occurrence records together with the closed segment-key
    /// set (keys are registered even for nodes that yield zero terms).
    fn collect_segments<D: DocumentQuery>(
        &self,
        doc: &D,
        selectors: &Selectors,
    ) -> Result<(Vec<SegmentTerm>, Vec<String>)> {
        let mut data = Vec::new();
        let mut segment_keys = Vec::new();

        for selector in &selectors.segments {
            let nodes = doc.select(selector);
            for (ordinal, text) in nodes.iter().enumerate() {
                let key = segment_key(selector, ordinal, nodes.len());
                segment_keys.push(key.clone());

                let extraction = self.extractor.extract(text)?;
                for term in extraction.terms {
                    data.push(SegmentTerm::new(term.term, key.clone(), term.count));
                }
            }
        }

        Ok((data, segment_keys))
    }
}

/// Derive the stable segment key for one matched node.
///
/// A selector matching a single node keys the segment by the selector
/// alone; multiple matches get a positional suffix so distinct nodes never
/// conflate.
pub(crate) fn segment_key(selector: &str, ordinal: usize, matches: usize) -> String {
    if matches > 1 {
        format!("{selector}:nth-child({})", ordinal + 1)
    } else {
        selector.to_string()
    }
}
