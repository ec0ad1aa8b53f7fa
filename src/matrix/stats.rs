//! Per-term statistics over a filled matrix base.
//!
//! For each term row of the base, three measures are computed:
//!
//! - **frequency**: the row sum, the term's total mass across segments.
//! - **probability**: the peak within-segment likelihood, the maximum over
//!   segments of `value / column_total`.
//! - **specificity**: a concentration measure in `[0, 1]`, one minus the
//!   normalized Shannon entropy of the row distribution. 1 when the term is
//!   confined to a single segment, 0 when spread uniformly (or absent).
//!
//! All three are defined and non-negative for every term, whichever
//! criterion the base was filled for. Rows are independent, so large
//! matrices are processed in parallel with rayon; small ones stay
//! sequential.

use rayon::prelude::*;
use serde::Serialize;

use super::FilledMatrix;

/// Below this many term rows, sequential computation is faster than
/// spawning rayon tasks.
const PARALLEL_ROW_THRESHOLD: usize = 512;

/// The three derived scores for one term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermStats {
    pub frequency: f64,
    pub probability: f64,
    pub specificity: f64,
}

/// Per-term statistics, aligned with the matrix term order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsBundle {
    per_term: Vec<TermStats>,
}

impl StatsBundle {
    /// Statistics for the term at `term_idx`, if in range.
    pub fn get(&self, term_idx: usize) -> Option<&TermStats> {
        self.per_term.get(term_idx)
    }

    /// Number of terms covered.
    pub fn len(&self) -> usize {
        self.per_term.len()
    }

    /// Check whether the bundle covers no terms.
    pub fn is_empty(&self) -> bool {
        self.per_term.is_empty()
    }

    /// Iterate over per-term statistics in matrix term order.
    pub fn iter(&self) -> impl Iterator<Item = &TermStats> {
        self.per_term.iter()
    }
}

/// Compute the statistics bundle for every term row of `filled`.
pub(crate) fn compute(filled: &FilledMatrix) -> StatsBundle {
    let rows = filled.num_terms();
    let cols = filled.num_segments();
    if rows == 0 || cols == 0 {
        return StatsBundle::default();
    }

    let col_totals: Vec<f64> = (0..cols)
        .map(|s| (0..rows).map(|t| filled.value(t, s)).sum())
        .collect();

    let per_term = if rows >= PARALLEL_ROW_THRESHOLD {
        (0..rows)
            .into_par_iter()
            .map(|t| row_stats(filled.row(t), &col_totals))
            .collect()
    } else {
        (0..rows)
            .map(|t| row_stats(filled.row(t), &col_totals))
            .collect()
    };

    StatsBundle { per_term }
}

fn row_stats(row: &[f64], col_totals: &[f64]) -> TermStats {
    let total: f64 = row.iter().sum();

    let probability = row
        .iter()
        .zip(col_totals)
        .filter(|(_, &t)| t > 0.0)
        .map(|(&v, &t)| v / t)
        .fold(0.0, f64::max);

    TermStats {
        frequency: total,
        probability,
        specificity: concentration(row, total),
    }
}

/// One minus the normalized Shannon entropy of the row distribution.
fn concentration(row: &[f64], total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    if row.len() <= 1 {
        return 1.0;
    }
    let entropy: f64 = row
        .iter()
        .filter(|&&v| v > 0.0)
        .map(|&v| {
            let p = v / total;
            -p * p.ln()
        })
        .sum();
    (1.0 - entropy / (row.len() as f64).ln()).clamp(0.0, 1.0)
}
