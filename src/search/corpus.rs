//! Deduplicated candidate terms

use std::collections::HashSet;

/// Unique candidate terms in first-seen order.
///
/// Terms keep their original casing and are otherwise stored as given.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Corpus {
    terms: Vec<String>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus by extracting one searchable string per item
    pub fn from_items<T, S, F>(items: &[T], extract_text: F) -> Self
    where
        S: AsRef<str>,
        F: Fn(&T) -> S,
    {
        items.iter().map(extract_text).collect()
    }

    /// Terms in first-seen order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();

        for term in iter {
            let term = term.as_ref();
            if !seen.contains(term) {
                seen.insert(term.to_string());
                terms.push(term.to_string());
            }
        }

        Self { terms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapsed_in_first_seen_order() {
        let corpus: Corpus = ["Fern", "Rose", "Fern", "Lily", "Rose"].into_iter().collect();
        assert_eq!(corpus.terms(), &["Fern", "Rose", "Lily"]);
    }

    #[test]
    fn test_casing_variants_are_distinct_terms() {
        let corpus: Corpus = ["Rose", "rose"].into_iter().collect();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_blank_terms_kept_once() {
        let corpus: Corpus = ["", "   ", "Moss", ""].into_iter().collect();
        assert_eq!(corpus.terms(), &["", "   ", "Moss"]);
    }

    #[test]
    fn test_from_items_uses_extractor() {
        struct Plant {
            name: &'static str,
        }
        let plants = [Plant { name: "Basil" }, Plant { name: "Mint" }];
        let corpus = Corpus::from_items(&plants, |p| p.name);
        assert_eq!(corpus.terms(), &["Basil", "Mint"]);
        assert!(!corpus.is_empty());
    }
}
