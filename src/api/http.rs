//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::rest::{items, search, suggestions};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // The site front end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/search", get(search::search_items))
        .route("/api/suggestions", get(suggestions::get_suggestions))
        .route("/api/items", get(items::list_items))
        .route("/api/items/:slug", get(items::get_item))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP API listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::catalog::Catalog;
    use crate::types::{CatalogItem, ItemKind};

    fn app() -> Router {
        let catalog = Catalog::from_items(vec![
            CatalogItem::new("rose-care", ItemKind::Post, "Rose").with_category("Flowers"),
            CatalogItem::new("tulip-bulbs", ItemKind::Product, "Tulip").with_category("Bulbs"),
            CatalogItem::new("sweet basil", ItemKind::Plant, "Basil").with_category("Herbs"),
        ]);
        let state = Arc::new(AppState::new(Arc::new(catalog), Default::default()));
        create_router(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_search_reports_correction() {
        let (status, body) = get_json("/api/search?q=roze").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["suggestedTerm"], "Rose");
        assert_eq!(body["data"]["items"][0]["slug"], "rose-care");
        assert_eq!(body["total"], 1);
    }

    #[tokio::test]
    async fn test_search_empty_query_returns_all() {
        let (status, body) = get_json("/api/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert!(body["data"]["suggestedTerm"].is_null());
    }

    #[tokio::test]
    async fn test_search_by_category_and_kind() {
        let (_, body) = get_json("/api/search?q=herbs&field=category&kind=plant").await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"]["items"][0]["title"], "Basil");
    }

    #[tokio::test]
    async fn test_search_rejects_bad_threshold() {
        let (status, body) = get_json("/api/search?q=rose&threshold=1.5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_suggestions() {
        let (status, body) = get_json("/api/suggestions?q=tu&limit=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0], "Tulip");
    }

    #[tokio::test]
    async fn test_list_items_by_kind() {
        let (_, body) = get_json("/api/items?kind=product").await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["data"][0]["slug"], "tulip-bulbs");
    }

    #[tokio::test]
    async fn test_get_item_decodes_slug() {
        let (status, body) = get_json("/api/items/sweet%20basil").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Basil");
    }

    #[tokio::test]
    async fn test_get_missing_item() {
        let (status, body) = get_json("/api/items/cactus").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
