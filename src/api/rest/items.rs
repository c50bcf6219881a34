//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::ItemKind;

/// Query parameters for listing items
#[derive(Debug, Deserialize)]
pub struct ListItemsParams {
    /// Maximum number of items to return (default: 100, max: 1000)
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of items to skip
    #[serde(default)]
    pub offset: usize,
    /// Filter by item kind
    pub kind: Option<ItemKind>,
}

fn default_limit() -> usize {
    100
}

/// GET /api/items - List items with pagination
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListItemsParams>,
) -> impl IntoResponse {
    let page = state
        .catalog
        .list_items(params.kind, params.limit.min(1000), params.offset);
    Json(ApiResponse::with_total(page.items, page.total))
}

/// GET /api/items/:slug - Get single item
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // URL decode the slug (handles spaces and special chars)
    let decoded = urlencoding::decode(&slug)
        .map(|s| s.into_owned())
        .unwrap_or(slug);

    state
        .catalog
        .get_item(&decoded)
        .map(|item| Json(ApiResponse::new(item)))
        .ok_or_else(|| ApiError::not_found(format!("Item '{}' not found", decoded)))
}
