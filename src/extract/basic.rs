//! Default term extractor.
//!
//! A deliberately simple implementation of [`TermExtractor`]: lowercase,
//! split on non-alphanumeric characters, drop short tokens, pure numbers,
//! and stopwords, and optionally restrict terms to an allow-list
//! dictionary. It performs no stemming or POS tagging; callers needing
//! richer normalization plug in their own extractor.

use rustc_hash::{FxHashMap, FxHashSet};

use super::{ExtractedTerm, Extraction, StopwordFilter, TermExtractor};
use crate::error::Result;

/// Lowercasing, stopword-filtering term extractor.
#[derive(Debug, Clone)]
pub struct BasicExtractor {
    stopwords: StopwordFilter,
    /// When present, only terms in this set are extracted.
    dictionary: Option<FxHashSet<String>>,
    min_term_len: usize,
}

impl Default for BasicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicExtractor {
    /// Create an extractor with English stopwords and no dictionary.
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            dictionary: None,
            min_term_len: 2,
        }
    }

    /// Replace the stopword filter.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Restrict extraction to terms present in `dictionary`.
    pub fn with_dictionary<S: AsRef<str>>(mut self, dictionary: &[S]) -> Self {
        self.dictionary = Some(
            dictionary
                .iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Set the minimum token length (in characters) kept as a term.
    pub fn with_min_term_len(mut self, len: usize) -> Self {
        self.min_term_len = len;
        self
    }

    fn keep(&self, term: &str) -> bool {
        if term.chars().count() < self.min_term_len {
            return false;
        }
        if !term.chars().any(|c| c.is_alphabetic()) {
            return false;
        }
        if self.stopwords.is_stopword(term) {
            return false;
        }
        match &self.dictionary {
            Some(dict) => dict.contains(term),
            None => true,
        }
    }
}

impl TermExtractor for BasicExtractor {
    fn extract(&self, text: &str) -> Result<Extraction> {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut terms: Vec<ExtractedTerm> = Vec::new();

        for token in text.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            let term = token.to_lowercase();
            if !self.keep(&term) {
                continue;
            }
            match index.get(&term) {
                Some(&i) => terms[i].count += 1,
                None => {
                    index.insert(term.clone(), terms.len());
                    terms.push(ExtractedTerm::new(term, 1));
                }
            }
        }

        let keys = terms.iter().map(|t| t.term.clone()).collect();
        Ok(Extraction { keys, terms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_first_seen_order() {
        let extractor = BasicExtractor::new().with_stopwords(StopwordFilter::empty());
        let e = extractor.extract("cat dog cat mat cat").unwrap();

        assert_eq!(e.keys, vec!["cat", "dog", "mat"]);
        assert_eq!(e.terms[0], ExtractedTerm::new("cat", 3));
        assert_eq!(e.terms[1], ExtractedTerm::new("dog", 1));
        assert_eq!(e.terms[2], ExtractedTerm::new("mat", 1));
    }

    #[test]
    fn test_lowercases_and_splits_punctuation() {
        let extractor = BasicExtractor::new().with_stopwords(StopwordFilter::empty());
        let e = extractor.extract("Cats, dogs; CATS!").unwrap();

        assert_eq!(e.keys, vec!["cats", "dogs"]);
        assert_eq!(e.terms[0].count, 2);
    }

    #[test]
    fn test_stopwords_filtered() {
        let extractor = BasicExtractor::new();
        let e = extractor.extract("the cat sat on the mat").unwrap();

        assert!(!e.keys.contains(&"the".to_string()));
        assert!(e.keys.contains(&"cat".to_string()));
        assert!(e.keys.contains(&"mat".to_string()));
    }

    #[test]
    fn test_dictionary_restricts_terms() {
        let extractor = BasicExtractor::new()
            .with_stopwords(StopwordFilter::empty())
            .with_dictionary(&["cat", "dog"]);
        let e = extractor.extract("cat dog mat rat").unwrap();

        assert_eq!(e.keys, vec!["cat", "dog"]);
    }

    #[test]
    fn test_min_term_len_and_numbers_dropped() {
        let extractor = BasicExtractor::new()
            .with_stopwords(StopwordFilter::empty())
            .with_min_term_len(3);
        let e = extractor.extract("an ox ate 42 apples").unwrap();

        assert!(!e.keys.contains(&"ox".to_string()));
        assert!(!e.keys.contains(&"42".to_string()));
        assert!(e.keys.contains(&"ate".to_string()));
        assert!(e.keys.contains(&"apples".to_string()));
    }

    #[test]
    fn test_empty_text() {
        let extractor = BasicExtractor::new();
        let e = extractor.extract("").unwrap();
        assert!(e.is_empty());
    }
}
