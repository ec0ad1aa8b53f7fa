//! Sentence scoring and summary selection.
//!
//! `summarize` reuses the ranked keyword list produced by `index` as term
//! weights: each candidate sentence scores the sum of its keywords'
//! factors, the top sentences are selected with the same comparator as
//! term ranking, and the selection is returned in original reading order.

use rustc_hash::FxHashMap;

use super::{trace_stage, Indexer};
use crate::document::DocumentQuery;
use crate::error::Result;
use crate::extract::TermExtractor;
use crate::matrix::rank_descending;
use crate::types::{Location, RankedTerm, Selectors, SentenceRecord};

impl<E: TermExtractor> Indexer<E> {
    /// Select the representative sentences of the document.
    ///
    /// Each matched segment node is split into candidate sentences on the
    /// configured delimiter (blank fragments are discarded), every sentence
    /// is scored by summing the `indexation` factors of its extracted
    /// keywords, and at most `summary_size` top-scoring sentences are
    /// returned, re-sorted ascending by [`Location`] to restore reading
    /// order.
    ///
    /// An empty `indexation` short-circuits to an empty result without
    /// scoring; extraction failures propagate unmodified.
    pub fn summarize<D: DocumentQuery>(
        &self,
        doc: &D,
        selectors: &Selectors,
        indexation: &[RankedTerm],
    ) -> Result<Vec<SentenceRecord>> {
        if indexation.is_empty() {
            return Ok(Vec::new());
        }
        let factors: FxHashMap<&str, f64> = indexation
            .iter()
            .map(|r| (r.term.as_str(), r.factor))
            .collect();

        trace_stage!("sentences");
        let mut records = self.collect_sentences(doc, selectors, &factors)?;

        trace_stage!("select");
        rank_descending(&mut records);
        records.truncate(self.config().summary_size);
        records.sort_by_key(|r| r.location);
        Ok(records)
    }

    /// Split every matched segment node into scored sentence records.
    ///
    /// The sentence ordinal in [`Location`] is the raw fragment index, so
    /// positions stay comparable even when blank fragments are skipped.
    fn collect_sentences<D: DocumentQuery>(
        &self,
        doc: &D,
        selectors: &Selectors,
        factors: &FxHashMap<&str, f64>,
    ) -> Result<Vec<SentenceRecord>> {
        let delimiter = self.config().delimiter;
        let mut records = Vec::new();

        for (segment, selector) in selectors.segments.iter().enumerate() {
            for (node, text) in doc.select(selector).iter().enumerate() {
                for (sentence, fragment) in text.split(delimiter).enumerate() {
                    let trimmed = fragment.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let keywords = self.extractor().extract(trimmed)?.keys;
                    let factor = keywords
                        .iter()
                        .map(|kw| factors.get(kw.as_str()).copied().unwrap_or(0.0))
                        .sum();
                    records.push(SentenceRecord {
                        text: trimmed.to_string(),
                        location: Location::new(segment as u32, node as u32, sentence as u32),
                        keywords,
                        factor,
                    });
                }
            }
        }

        Ok(records)
    }
}
