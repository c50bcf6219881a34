//! Best-match selection for a single query
//!
//! A query is compared against every corpus term by an ordered list of rules.
//! The first rule that yields a match wins, so precedence is exactly the order
//! of [`MatchRule::PRECEDENCE`].

use serde::Serialize;

use super::distance::similarity;

/// Similarity below which fuzzy candidates are rejected
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Similarity reported for any substring hit, independent of closeness
pub const SUBSTRING_SIMILARITY: f64 = 0.8;

/// Rule that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// Case-insensitive equality
    Exact,
    /// Query contains the term or the term contains the query
    Substring,
    /// Highest edit-distance similarity at or above the threshold
    Fuzzy,
}

impl MatchRule {
    /// Evaluation order, highest priority first
    pub const PRECEDENCE: [MatchRule; 3] =
        [MatchRule::Exact, MatchRule::Substring, MatchRule::Fuzzy];

    /// Try this rule alone against the corpus.
    ///
    /// `query_lower` must already be trimmed and lower-cased.
    fn apply<S: AsRef<str>>(
        self,
        query_lower: &str,
        corpus: &[S],
        threshold: f64,
    ) -> Option<MatchResult> {
        let mut candidates = corpus.iter().map(|term| AsRef::<str>::as_ref(term));

        match self {
            MatchRule::Exact => candidates
                .find(|term| term.to_lowercase() == query_lower)
                .map(|term| MatchResult::found(term, 1.0, self)),
            MatchRule::Substring => candidates
                .find(|term| {
                    let term_lower = term.to_lowercase();
                    query_lower.contains(&term_lower) || term_lower.contains(query_lower)
                })
                .map(|term| MatchResult::found(term, SUBSTRING_SIMILARITY, self)),
            MatchRule::Fuzzy => {
                let mut best: Option<(&str, f64)> = None;
                for term in candidates {
                    let score = similarity(query_lower, term);
                    // Strictly greater keeps the earliest term on ties
                    if best.map_or(true, |(_, top)| score > top) {
                        best = Some((term, score));
                    }
                }
                best.filter(|(_, score)| *score >= threshold)
                    .map(|(term, score)| MatchResult::found(term, score, self))
            }
        }
    }
}

/// Outcome of [`find_best_match`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Matched corpus term in its original casing
    #[serde(rename = "match")]
    pub term: Option<String>,
    /// Similarity in `[0, 1]`, 0 when nothing matched
    pub similarity: f64,
    /// Rule that fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<MatchRule>,
}

impl MatchResult {
    /// No match, similarity 0
    pub fn none() -> Self {
        Self {
            term: None,
            similarity: 0.0,
            rule: None,
        }
    }

    fn found(term: &str, similarity: f64, rule: MatchRule) -> Self {
        Self {
            term: Some(term.to_string()),
            similarity,
            rule: Some(rule),
        }
    }

    pub fn is_match(&self) -> bool {
        self.term.is_some()
    }

    /// A match that is close but not identical, i.e. a correction candidate
    pub fn is_approximate(&self) -> bool {
        self.is_match() && self.similarity > 0.0 && self.similarity < 1.0
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::none()
    }
}

/// Find the corpus term that best matches `query`.
///
/// Rules are tried in [`MatchRule::PRECEDENCE`] order: exact match scores 1,
/// the first substring hit in corpus order scores [`SUBSTRING_SIMILARITY`],
/// and otherwise the most similar term is returned when its similarity reaches
/// `threshold`. Blank queries never match.
pub fn find_best_match<S: AsRef<str>>(query: &str, corpus: &[S], threshold: f64) -> MatchResult {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return MatchResult::none();
    }

    MatchRule::PRECEDENCE
        .iter()
        .find_map(|rule| rule.apply(&query_lower, corpus, threshold))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOWERS: [&str; 2] = ["rose", "lily"];

    #[test]
    fn test_exact_match_ignores_case() {
        let result = find_best_match("Rose", &FLOWERS, DEFAULT_MATCH_THRESHOLD);
        assert_eq!(result.term.as_deref(), Some("rose"));
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.rule, Some(MatchRule::Exact));
    }

    #[test]
    fn test_exact_preserves_corpus_casing() {
        let result = find_best_match("rose", &["Rose"], DEFAULT_MATCH_THRESHOLD);
        assert_eq!(result.term.as_deref(), Some("Rose"));
    }

    #[test]
    fn test_exact_beats_earlier_substring() {
        let result = find_best_match("rose", &["rosemary", "rose"], DEFAULT_MATCH_THRESHOLD);
        assert_eq!(result.term.as_deref(), Some("rose"));
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn test_substring_fixed_similarity() {
        let result = find_best_match("ros", &FLOWERS, 0.5);
        assert_eq!(result.term.as_deref(), Some("rose"));
        assert_eq!(result.similarity, SUBSTRING_SIMILARITY);
        assert_eq!(result.rule, Some(MatchRule::Substring));
    }

    #[test]
    fn test_substring_either_direction() {
        let result = find_best_match("climbing roses", &FLOWERS, DEFAULT_MATCH_THRESHOLD);
        assert_eq!(result.term.as_deref(), Some("rose"));
        assert_eq!(result.similarity, SUBSTRING_SIMILARITY);
    }

    #[test]
    fn test_substring_first_in_corpus_order() {
        let result = find_best_match("a", &["banana", "apple"], DEFAULT_MATCH_THRESHOLD);
        assert_eq!(result.term.as_deref(), Some("banana"));
        assert_eq!(result.similarity, 0.8);
    }

    #[test]
    fn test_below_threshold_is_absent() {
        let result = find_best_match("xyz", &FLOWERS, 0.6);
        assert_eq!(result, MatchResult::none());
        assert!(!result.is_match());
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        let result = find_best_match("roze", &FLOWERS, 0.6);
        assert_eq!(result.term.as_deref(), Some("rose"));
        assert!((result.similarity - 0.75).abs() < f64::EPSILON);
        assert_eq!(result.rule, Some(MatchRule::Fuzzy));
        assert!(result.is_approximate());
    }

    #[test]
    fn test_fuzzy_tie_keeps_first() {
        let result = find_best_match("cat", &["bat", "hat"], 0.5);
        assert_eq!(result.term.as_deref(), Some("bat"));
    }

    #[test]
    fn test_blank_query() {
        assert_eq!(find_best_match("", &FLOWERS, 0.0), MatchResult::none());
        assert_eq!(find_best_match("   ", &FLOWERS, 0.0), MatchResult::none());
    }

    #[test]
    fn test_empty_corpus() {
        let corpus: [&str; 0] = [];
        assert_eq!(find_best_match("rose", &corpus, 0.0), MatchResult::none());
    }

    #[test]
    fn test_empty_term_is_a_substring_of_every_query() {
        let result = find_best_match("rose", &["", "lily"], 0.9);
        assert_eq!(result.term.as_deref(), Some(""));
        assert_eq!(result.similarity, SUBSTRING_SIMILARITY);
        assert_eq!(result.rule, Some(MatchRule::Substring));
    }

    #[test]
    fn test_zero_threshold_accepts_zero_similarity() {
        let result = find_best_match("xyz", &["ab"], 0.0);
        assert_eq!(result.term.as_deref(), Some("ab"));
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.rule, Some(MatchRule::Fuzzy));
        assert!(!result.is_approximate());
    }

    #[test]
    fn test_serializes_match_key() {
        let json = serde_json::to_value(find_best_match("Rose", &FLOWERS, 0.6)).unwrap();
        assert_eq!(json["match"], "rose");
        assert_eq!(json["similarity"], 1.0);
        assert_eq!(json["rule"], "exact");

        let none = serde_json::to_value(MatchResult::none()).unwrap();
        assert!(none["match"].is_null());
        assert!(none.get("rule").is_none());
    }
}
