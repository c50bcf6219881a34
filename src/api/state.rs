//! Shared HTTP application state

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::SearchDefaults;

/// State shared by every HTTP handler
pub struct AppState {
    /// The catalog, shared with the MCP tools
    pub catalog: Arc<Catalog>,

    /// Fallbacks for parameters a request omits
    pub defaults: SearchDefaults,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, defaults: SearchDefaults) -> Self {
        Self { catalog, defaults }
    }
}
