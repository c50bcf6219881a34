//! Ranked search suggestions
//!
//! Each corpus term is scored by the first [`ScoreRule`] that accepts it.
//! Terms no rule accepts are dropped; the rest are ordered by score with
//! corpus order kept among equal scores.

use rayon::prelude::*;
use serde::Serialize;

use super::distance::similarity;

/// Default length of a suggestion list
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Minimum similarity for a fuzzy-only suggestion
pub const SUGGESTION_SIMILARITY_FLOOR: f64 = 0.5;

/// Corpus size above which terms are scored in parallel
const PARALLEL_SCORING_THRESHOLD: usize = 1000;

/// Scoring rule for a single suggestion candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreRule {
    Exact,
    Prefix,
    Substring,
    Fuzzy,
}

impl ScoreRule {
    /// Evaluation order, highest priority first
    pub const PRECEDENCE: [ScoreRule; 4] = [
        ScoreRule::Exact,
        ScoreRule::Prefix,
        ScoreRule::Substring,
        ScoreRule::Fuzzy,
    ];

    /// Score for `term` under this rule, or `None` if the rule does not apply.
    ///
    /// Both arguments must already be lower-cased.
    pub fn score(self, query_lower: &str, term_lower: &str) -> Option<f64> {
        match self {
            ScoreRule::Exact => (term_lower == query_lower).then_some(100.0),
            ScoreRule::Prefix => term_lower.starts_with(query_lower).then_some(80.0),
            ScoreRule::Substring => term_lower.contains(query_lower).then_some(60.0),
            ScoreRule::Fuzzy => {
                let sim = similarity(query_lower, term_lower);
                (sim >= SUGGESTION_SIMILARITY_FLOOR).then_some(sim * 50.0)
            }
        }
    }
}

/// A corpus term with the score that ranked it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
    pub rule: ScoreRule,
}

/// Score a single term against the query, first accepting rule wins
pub fn score_term(query_lower: &str, term: &str) -> Option<ScoredTerm> {
    let term_lower = term.to_lowercase();
    ScoreRule::PRECEDENCE.iter().find_map(|rule| {
        rule.score(query_lower, &term_lower).map(|score| ScoredTerm {
            term: term.to_string(),
            score,
            rule: *rule,
        })
    })
}

/// Score every corpus term and order them best first.
///
/// The sort is stable, so equal scores keep corpus order. Large corpora are
/// scored with rayon; `collect` on an indexed parallel iterator keeps order.
pub fn rank_terms<S>(query: &str, corpus: &[S]) -> Vec<ScoredTerm>
where
    S: AsRef<str> + Sync,
{
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }

    let scored: Vec<Option<ScoredTerm>> = if corpus.len() > PARALLEL_SCORING_THRESHOLD {
        corpus
            .par_iter()
            .map(|term| score_term(&query_lower, term.as_ref()))
            .collect()
    } else {
        corpus
            .iter()
            .map(|term| score_term(&query_lower, term.as_ref()))
            .collect()
    };

    let mut ranked: Vec<ScoredTerm> = scored.into_iter().flatten().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Up to `max_suggestions` corpus terms ranked against `query`.
///
/// Exact matches score 100, prefix matches 80, substring matches 60 and
/// close-enough terms `similarity * 50`. A blank query yields nothing.
pub fn get_search_suggestions<S>(query: &str, corpus: &[S], max_suggestions: usize) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    rank_terms(query, corpus)
        .into_iter()
        .take(max_suggestions)
        .map(|scored| scored.term)
        .collect()
}
