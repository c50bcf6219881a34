//! Suggestions endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::ApiResponse;
use crate::api::state::AppState;
use crate::types::SearchField;

const MAX_LIMIT: usize = 50;

/// Query parameters for suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub field: SearchField,
    /// Maximum number of suggestions (capped at 50)
    pub limit: Option<usize>,
}

/// GET /api/suggestions - Ranked suggestions for a partial query
pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestionParams>,
) -> impl IntoResponse {
    let limit = params
        .limit
        .unwrap_or(state.defaults.max_suggestions)
        .min(MAX_LIMIT);

    let suggestions = state.catalog.suggest(&params.q, params.field, limit);
    Json(ApiResponse::new(suggestions))
}
