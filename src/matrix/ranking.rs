//! Shared ranking order for terms and sentences.
//!
//! Both the ranked keyword list and the summary sentence selection use the
//! same total order: descending by factor, ties kept in their original
//! (first-seen) order by relying on a stable sort.

use std::cmp::Ordering;

use crate::types::{RankedTerm, SentenceRecord};

/// Anything carrying a ranking factor.
pub trait Ranked {
    /// The scalar ranking score.
    fn factor(&self) -> f64;
}

impl Ranked for RankedTerm {
    fn factor(&self) -> f64 {
        self.factor
    }
}

impl Ranked for SentenceRecord {
    fn factor(&self) -> f64 {
        self.factor
    }
}

/// The comparator behind term and sentence ranking: descending by factor.
///
/// Factors are finite by construction; a non-comparable pair falls back to
/// `Equal`, which a stable sort resolves by original order.
pub fn compare<T: Ranked>(a: &T, b: &T) -> Ordering {
    b.factor()
        .partial_cmp(&a.factor())
        .unwrap_or(Ordering::Equal)
}

/// Sort in place, descending by factor, ties stable.
pub fn rank_descending<T: Ranked>(items: &mut [T]) {
    items.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    #[test]
    fn test_compare_descending() {
        let hi = RankedTerm::new("hi", 3.0);
        let lo = RankedTerm::new("lo", 1.0);

        assert_eq!(compare(&hi, &lo), Ordering::Less); // hi sorts first
        assert_eq!(compare(&lo, &hi), Ordering::Greater);
        assert_eq!(compare(&hi, &hi), Ordering::Equal);
    }

    #[test]
    fn test_rank_descending() {
        let mut terms = vec![
            RankedTerm::new("b", 1.0),
            RankedTerm::new("a", 5.0),
            RankedTerm::new("c", 3.0),
        ];
        rank_descending(&mut terms);

        let order: Vec<&str> = terms.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let mut terms = vec![
            RankedTerm::new("first", 2.0),
            RankedTerm::new("second", 2.0),
            RankedTerm::new("third", 2.0),
        ];
        rank_descending(&mut terms);

        let order: Vec<&str> = terms.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sentences_use_same_order() {
        let sentence = |text: &str, factor: f64| SentenceRecord {
            text: text.to_string(),
            location: Location::new(0, 0, 0),
            keywords: Vec::new(),
            factor,
        };
        let mut sentences = vec![sentence("low", 0.5), sentence("high", 4.0)];
        rank_descending(&mut sentences);

        assert_eq!(sentences[0].text, "high");
    }
}
