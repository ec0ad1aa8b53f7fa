//! Term × segment occurrence matrix.
//!
//! [`TermMatrix`] turns per-segment term records into a dense occurrence
//! matrix with closed row/column sets: every term has an entry (possibly 0)
//! for every known segment. Terms and segments keep first-seen insertion
//! order, which is also the stable tie-break used by ranking.
//!
//! A matrix is a value constructed fresh per indexing call and consumed
//! immutably: `new → fill → stats → select → rank_descending`.

pub mod ranking;
pub mod stats;

pub use ranking::{compare, rank_descending, Ranked};
pub use stats::{StatsBundle, TermStats};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::{Criterion, RankedTerm};

/// One term occurrence record, tagged with the segment key it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTerm {
    /// The normalized term string.
    pub term: String,
    /// Key of the segment the term was found in.
    pub segment: String,
    /// Occurrence count within that segment.
    pub count: u32,
}

impl SegmentTerm {
    /// Create a new segment term record.
    pub fn new(term: impl Into<String>, segment: impl Into<String>, count: u32) -> Self {
        Self {
            term: term.into(),
            segment: segment.into(),
            count,
        }
    }
}

/// Dense term × segment occurrence matrix.
#[derive(Debug, Clone)]
pub struct TermMatrix {
    terms: Vec<String>,
    segments: Vec<String>,
    /// Row-major: `counts[term_idx * segments.len() + segment_idx]`.
    counts: Vec<f64>,
}

/// A criterion-specific normalized view of the occurrence matrix, used as
/// the statistical base for [`TermMatrix::stats`].
#[derive(Debug, Clone)]
pub struct FilledMatrix {
    criterion: Criterion,
    num_terms: usize,
    num_segments: usize,
    values: Vec<f64>,
}

impl TermMatrix {
    /// Build the matrix over the union of all terms seen in `data` and the
    /// declared segment-key set.
    ///
    /// `segment_keys` enumerates the full, closed set of expected segments;
    /// segments that yielded zero terms still get a column. A term absent
    /// from a segment has count 0 there, not "missing".
    pub fn new(data: &[SegmentTerm], segment_keys: &[String]) -> Self {
        let mut term_ids: FxHashMap<&str, u32> = FxHashMap::default();
        let mut terms: Vec<String> = Vec::new();
        let mut segment_ids: FxHashMap<&str, u32> = FxHashMap::default();
        let mut segments: Vec<String> = Vec::new();

        for key in segment_keys {
            intern(&mut segment_ids, &mut segments, key);
        }
        for rec in data {
            // Keys seen only in the data still close the segment set.
            intern(&mut segment_ids, &mut segments, &rec.segment);
            intern(&mut term_ids, &mut terms, &rec.term);
        }

        let cols = segments.len();
        let mut counts = vec![0.0; terms.len() * cols];
        for rec in data {
            let t = term_ids[rec.term.as_str()] as usize;
            let s = segment_ids[rec.segment.as_str()] as usize;
            counts[t * cols + s] += f64::from(rec.count);
        }

        Self {
            terms,
            segments,
            counts,
        }
    }

    /// Number of distinct terms (rows).
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Number of segments (columns).
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Terms in first-seen order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Segment keys in declaration order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Check whether the matrix has no terms or no segments.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() || self.segments.is_empty()
    }

    /// Occurrence count of term `term_idx` in segment `segment_idx`.
    pub fn count_at(&self, term_idx: usize, segment_idx: usize) -> f64 {
        self.counts[term_idx * self.segments.len() + segment_idx]
    }

    /// Row index of a term, if present.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|t| t == term)
    }

    /// Produce the normalized value matrix used as the statistical base for
    /// `criterion`:
    ///
    /// - frequency: raw occurrence counts;
    /// - probability: counts normalized per segment (column sums to 1);
    /// - specificity: counts normalized per term (row sums to 1).
    pub fn fill(&self, criterion: Criterion) -> FilledMatrix {
        let cols = self.segments.len();
        let rows = self.terms.len();
        let mut values = self.counts.clone();

        match criterion {
            Criterion::Frequency => {}
            Criterion::Probability => {
                for s in 0..cols {
                    let total: f64 = (0..rows).map(|t| self.counts[t * cols + s]).sum();
                    if total > 0.0 {
                        for t in 0..rows {
                            values[t * cols + s] /= total;
                        }
                    }
                }
            }
            Criterion::Specificity => {
                for t in 0..rows {
                    let row = &mut values[t * cols..(t + 1) * cols];
                    let total: f64 = row.iter().sum();
                    if total > 0.0 {
                        for v in row {
                            *v /= total;
                        }
                    }
                }
            }
        }

        FilledMatrix {
            criterion,
            num_terms: rows,
            num_segments: cols,
            values,
        }
    }

    /// Compute the per-term statistics bundle over a filled base.
    ///
    /// All three measures are present for every term regardless of which
    /// criterion the base was filled for; see [`stats`](self::stats) for
    /// the formulas.
    pub fn stats(&self, filled: &FilledMatrix) -> StatsBundle {
        stats::compute(filled)
    }

    /// Read the statistic named by `criterion` for every term and apply the
    /// title boost to terms also present in `title_terms`.
    ///
    /// The output preserves matrix term order (the stable tie-break for the
    /// subsequent sort). Returns empty when the matrix or the bundle is
    /// empty.
    pub fn select(
        &self,
        stats: &StatsBundle,
        title_terms: &FxHashSet<String>,
        criterion: Criterion,
        title_boost: f64,
    ) -> Vec<RankedTerm> {
        self.terms
            .iter()
            .enumerate()
            .filter_map(|(i, term)| {
                let s = stats.get(i)?;
                let base = match criterion {
                    Criterion::Frequency => s.frequency,
                    Criterion::Specificity => s.specificity,
                    Criterion::Probability => s.probability,
                };
                let factor = if title_terms.contains(term) {
                    base * title_boost
                } else {
                    base
                };
                Some(RankedTerm::new(term.clone(), factor))
            })
            .collect()
    }
}

impl FilledMatrix {
    /// Criterion this base was normalized for.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Number of term rows.
    pub fn num_terms(&self) -> usize {
        self.num_terms
    }

    /// Number of segment columns.
    pub fn num_segments(&self) -> usize {
        self.num_segments
    }

    /// Value at (term, segment).
    pub fn value(&self, term_idx: usize, segment_idx: usize) -> f64 {
        self.values[term_idx * self.num_segments + segment_idx]
    }

    /// The row of values for one term.
    pub fn row(&self, term_idx: usize) -> &[f64] {
        &self.values[term_idx * self.num_segments..(term_idx + 1) * self.num_segments]
    }
}

fn intern<'a>(ids: &mut FxHashMap<&'a str, u32>, names: &mut Vec<String>, key: &'a str) -> u32 {
    if let Some(&id) = ids.get(key) {
        return id;
    }
    let id = names.len() as u32;
    ids.insert(key, id);
    names.push(key.to_string());
    id
}
