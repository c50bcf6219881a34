//! MCP Tools implementation
//!
//! This module contains the 6 MCP tools organized by category:
//! - Search tools (4): catalog search, suggestions, best match, term comparison
//! - Catalog tools (2): listing and adding items

pub mod catalog;
pub mod search;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::SearchDefaults;
use crate::server::McpServer;

// Re-export all tools for convenience
pub use catalog::{AddItemsTool, ListItemsTool};
pub use search::{CompareTermsTool, FindBestMatchTool, GetSuggestionsTool, SearchCatalogTool};

/// Register all tools with the MCP server
pub fn register_all_tools(
    server: &mut McpServer,
    catalog: Arc<Catalog>,
    defaults: SearchDefaults,
) {
    // Search tools (4)
    server.register_tool(Box::new(SearchCatalogTool::new(catalog.clone(), defaults)));
    server.register_tool(Box::new(GetSuggestionsTool::new(catalog.clone(), defaults)));
    server.register_tool(Box::new(FindBestMatchTool::new()));
    server.register_tool(Box::new(CompareTermsTool::new()));

    // Catalog tools (2)
    server.register_tool(Box::new(ListItemsTool::new(catalog.clone())));
    server.register_tool(Box::new(AddItemsTool::new(catalog)));
}

