//! List items tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::protocol::{json_content, parse_arguments, McpTool, Tool};
use crate::types::{ItemKind, McpResult};

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 1000;

#[derive(Debug, Deserialize)]
struct Args {
    kind: Option<ItemKind>,
    limit: Option<usize>,
    #[serde(default)]
    offset: usize,
}

/// Tool for paging through catalog items
pub struct ListItemsTool {
    catalog: Arc<Catalog>,
}

impl ListItemsTool {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Tool for ListItemsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_items",
            "List catalog items with optional kind filter and pagination.",
            json!({
                "type": "object",
                "properties": {
                    "kind": {
                        "type": "string",
                        "enum": ["post", "product", "plant"]
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of items (default: 100, max: 1000)"
                    },
                    "offset": {
                        "type": "integer",
                        "description": "Number of items to skip"
                    }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let args: Args = parse_arguments(params)?;
        let limit = args.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let page = self.catalog.list_items(args.kind, limit, args.offset);
        json_content(&page)
    }
}
