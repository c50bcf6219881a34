//! Garden Search
//!
//! Typo-tolerant search for a gardening site's posts, products and plants,
//! served as Model Context Protocol (MCP) tools over stdio and as a REST API.
//!
//! # Features
//!
//! - **Fuzzy Matching**: Levenshtein similarity with exact > substring > fuzzy precedence
//! - **Auto-correct**: "Did you mean" corrections reported alongside results
//! - **Suggestions**: Ranked search-as-you-type terms
//! - **Two Transports**: MCP over stdio and HTTP with Axum
//!
//! # Modules
//!
//! - `search`: Pure fuzzy matching functions
//! - `types`: Catalog item model
//! - `catalog`: In-memory item store loaded from JSON Lines
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `tools`: MCP tool implementations
//! - `server`: MCP server implementation
//! - `api`: REST endpoints
//! - `config`, `logging`, `error`: Ambient plumbing
//!
//! # Example
//!
//! ```
//! use garden_search::search::{filter_with_auto_correct, find_best_match};
//!
//! let result = find_best_match("Rose", &["rose", "lily"], 0.6);
//! assert_eq!(result.term.as_deref(), Some("rose"));
//!
//! let names = ["Rose", "Tulip"];
//! let found = filter_with_auto_correct(&names, "roze", |name| *name, 0.5);
//! assert_eq!(found.filtered, vec![&"Rose"]);
//! assert_eq!(found.suggested_term.as_deref(), Some("Rose"));
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;

// Re-export commonly used items at crate root
pub use catalog::{Catalog, SearchOutcome};
pub use config::{Config, SearchDefaults, Transport};
pub use error::{CatalogError, ConfigError};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use search::{
    edit_distance, filter_with_auto_correct, find_best_match, get_search_suggestions, similarity,
    AutoCorrected, MatchResult,
};
pub use server::McpServer;
pub use types::{CatalogItem, ItemKind, McpResult, SearchField};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
