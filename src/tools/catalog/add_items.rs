//! Add items tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::protocol::{json_content, parse_arguments, McpTool, Tool};
use crate::types::{CatalogItem, McpResult};

#[derive(Debug, Deserialize)]
struct Args {
    items: Vec<CatalogItem>,
}

/// Tool for adding items to the in-memory catalog
pub struct AddItemsTool {
    catalog: Arc<Catalog>,
}

impl AddItemsTool {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Tool for AddItemsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "add_items",
            "Add posts, products or plants to the in-memory catalog. Items whose slug already exists are ignored.",
            json!({
                "type": "object",
                "properties": {
                    "items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "slug": { "type": "string" },
                                "kind": { "type": "string", "enum": ["post", "product", "plant"] },
                                "title": { "type": "string" },
                                "category": { "type": "string" },
                                "tags": { "type": "array", "items": { "type": "string" } },
                                "summary": { "type": "string" }
                            },
                            "required": ["slug", "kind", "title"]
                        }
                    }
                },
                "required": ["items"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let args: Args = parse_arguments(params)?;
        let added = self.catalog.add_items(args.items);
        json_content(&added)
    }
}
