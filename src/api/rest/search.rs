//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::config::check_threshold;
use crate::types::{CatalogItem, ItemKind, SearchField};

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string; empty returns every item
    #[serde(default)]
    pub q: String,
    /// Item field to search
    #[serde(default)]
    pub field: SearchField,
    /// Restrict to one kind of item
    pub kind: Option<ItemKind>,
    /// Similarity needed before the query is corrected
    pub threshold: Option<f64>,
}

/// Search results plus the "did you mean" term
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    pub items: Vec<CatalogItem>,
    pub suggested_term: Option<String>,
}

/// GET /api/search - Search catalog items with auto-correct
pub async fn search_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let threshold = check_threshold(
        params
            .threshold
            .unwrap_or(state.defaults.autocorrect_threshold),
    )
    .map_err(ApiError::bad_request)?;

    let outcome = state
        .catalog
        .search(&params.q, params.field, params.kind, threshold);
    let total = outcome.total();

    let data = SearchData {
        items: outcome.items,
        suggested_term: outcome.suggested_term,
    };
    Ok(Json(ApiResponse::with_total(data, total)))
}
