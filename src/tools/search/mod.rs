//! Search tools
//!
//! This module contains 4 tools exposing the fuzzy matcher.

mod compare_terms;
mod find_best_match;
mod get_suggestions;
mod search_catalog;

pub use compare_terms::CompareTermsTool;
pub use find_best_match::FindBestMatchTool;
pub use get_suggestions::GetSuggestionsTool;
pub use search_catalog::SearchCatalogTool;
