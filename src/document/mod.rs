//! Document querying boundary.
//!
//! Parsing a document and resolving selectors against it are external
//! concerns. The core only needs one capability: given a selector string,
//! return the ordered texts of the nodes it matches. Callers adapt their
//! XML/HTML layer to [`DocumentQuery`]; [`MappedDocument`] is an in-memory
//! implementation for programmatic use and tests.

use rustc_hash::FxHashMap;

/// Read-only query access to a parsed document.
///
/// A selector matching nothing is a valid state: implementations return an
/// empty list, never an error.
pub trait DocumentQuery {
    /// Return the text of every node matched by `selector`, in document
    /// order.
    fn select(&self, selector: &str) -> Vec<String>;

    /// Return the concatenated text of every node matched by `selector`,
    /// joined with a single space.
    fn select_text(&self, selector: &str) -> String {
        self.select(selector).join(" ")
    }
}

/// An in-memory document: selector → ordered node texts.
#[derive(Debug, Clone, Default)]
pub struct MappedDocument {
    nodes: FxHashMap<String, Vec<String>>,
}

impl MappedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node's text under `selector`, preserving insertion order.
    pub fn with_node(mut self, selector: impl Into<String>, text: impl Into<String>) -> Self {
        self.push_node(selector, text);
        self
    }

    /// Append a node's text under `selector` in place.
    pub fn push_node(&mut self, selector: impl Into<String>, text: impl Into<String>) {
        self.nodes.entry(selector.into()).or_default().push(text.into());
    }

    /// Number of distinct selectors with at least one node.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the document has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl DocumentQuery for MappedDocument {
    fn select(&self, selector: &str) -> Vec<String> {
        self.nodes.get(selector).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_preserves_insertion_order() {
        let doc = MappedDocument::new()
            .with_node("p", "first")
            .with_node("p", "second")
            .with_node("p", "third");

        assert_eq!(doc.select("p"), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_missing_selector_matches_nothing() {
        let doc = MappedDocument::new().with_node("p", "text");

        assert!(doc.select("h1").is_empty());
        assert_eq!(doc.select_text("h1"), "");
    }

    #[test]
    fn test_select_text_joins_matches() {
        let doc = MappedDocument::new()
            .with_node("title", "Cats")
            .with_node("title", "and Dogs");

        assert_eq!(doc.select_text("title"), "Cats and Dogs");
    }

    #[test]
    fn test_empty_document() {
        let doc = MappedDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
