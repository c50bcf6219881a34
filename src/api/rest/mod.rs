//! REST API module for HTTP endpoints
//!
//! - `GET /api/search` - Search items with auto-correct
//! - `GET /api/suggestions` - Ranked term suggestions
//! - `GET /api/items` - List items with pagination
//! - `GET /api/items/:slug` - Get single item

pub mod items;
pub mod search;
pub mod suggestions;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Unix timestamp the response was built at
    pub generated_at: i64,
    /// Total count (for paginated responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            generated_at: chrono::Utc::now().timestamp(),
            total: None,
        }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            total: Some(total),
            ..Self::new(data)
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}
