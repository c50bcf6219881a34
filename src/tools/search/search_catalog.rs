//! Search catalog tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::config::{check_threshold, SearchDefaults};
use crate::protocol::{json_content, parse_arguments, McpTool, Tool};
use crate::server::error_response;
use crate::types::{ItemKind, McpResult, SearchField};

#[derive(Debug, Deserialize)]
struct Args {
    #[serde(default)]
    query: String,
    #[serde(default)]
    field: SearchField,
    kind: Option<ItemKind>,
    threshold: Option<f64>,
}

/// Tool for searching catalog items with auto-correct
pub struct SearchCatalogTool {
    catalog: Arc<Catalog>,
    defaults: SearchDefaults,
}

impl SearchCatalogTool {
    pub fn new(catalog: Arc<Catalog>, defaults: SearchDefaults) -> Self {
        Self { catalog, defaults }
    }
}

impl Tool for SearchCatalogTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "search_catalog",
            "Search garden posts, products and plants. Close misspellings are corrected and the correction is reported as suggestedTerm.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search text. An empty query returns every item."
                    },
                    "field": {
                        "type": "string",
                        "enum": ["title", "category", "tags"],
                        "description": "Item field to search (default: title)"
                    },
                    "kind": {
                        "type": "string",
                        "enum": ["post", "product", "plant"],
                        "description": "Only search items of this kind"
                    },
                    "threshold": {
                        "type": "number",
                        "description": "Minimum similarity (0-1) before a query is corrected"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let args: Args = parse_arguments(params)?;
        let threshold = match check_threshold(
            args.threshold.unwrap_or(self.defaults.autocorrect_threshold),
        ) {
            Ok(threshold) => threshold,
            Err(message) => return Ok(error_response(&message)),
        };

        let outcome = self.catalog.search(&args.query, args.field, args.kind, threshold);
        json_content(&json!({
            "items": outcome.items,
            "suggestedTerm": outcome.suggested_term,
            "total": outcome.total(),
        }))
    }
}
