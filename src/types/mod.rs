//! Data types for the garden search service
//!
//! This module contains the catalog item model shared by the catalog, the MCP
//! tools and the HTTP API.

mod field;
mod item;

pub use field::SearchField;
pub use item::{CatalogItem, ItemKind};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
