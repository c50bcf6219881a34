//! Fuzzy search with auto-correct
//!
//! This module provides typo-tolerant matching over a set of known terms:
//! - Levenshtein edit distance and normalized similarity
//! - Best-match selection (exact > substring > fuzzy)
//! - Ranked "search as you type" suggestions
//! - Item filtering that corrects close misspellings ("did you mean")
//!
//! Every function here is pure. Nothing is cached between calls.

mod autocorrect;
mod corpus;
mod distance;
mod matcher;
mod suggest;

pub use autocorrect::{filter_with_auto_correct, AutoCorrected, DEFAULT_AUTOCORRECT_THRESHOLD};
pub use corpus::Corpus;
pub use distance::{edit_distance, similarity};
pub use matcher::{
    find_best_match, MatchResult, MatchRule, DEFAULT_MATCH_THRESHOLD, SUBSTRING_SIMILARITY,
};
pub use suggest::{
    get_search_suggestions, rank_terms, score_term, ScoreRule, ScoredTerm,
    DEFAULT_MAX_SUGGESTIONS, SUGGESTION_SIMILARITY_FLOOR,
};
