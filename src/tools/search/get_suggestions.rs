//! Get suggestions tool

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::config::SearchDefaults;
use crate::protocol::{json_content, parse_arguments, McpTool, Tool};
use crate::types::{McpResult, SearchField};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Args {
    #[serde(default)]
    query: String,
    #[serde(default)]
    field: SearchField,
    max_suggestions: Option<usize>,
}

/// Tool for "search as you type" suggestions over one catalog field
pub struct GetSuggestionsTool {
    catalog: Arc<Catalog>,
    defaults: SearchDefaults,
}

impl GetSuggestionsTool {
    pub fn new(catalog: Arc<Catalog>, defaults: SearchDefaults) -> Self {
        Self { catalog, defaults }
    }
}

impl Tool for GetSuggestionsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_suggestions",
            "Suggest catalog terms for a partial query, best first: exact, prefix, substring, then close misspellings.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Partial search text"
                    },
                    "field": {
                        "type": "string",
                        "enum": ["title", "category", "tags"],
                        "description": "Item field to draw suggestions from (default: title)"
                    },
                    "maxSuggestions": {
                        "type": "integer",
                        "description": "Maximum number of suggestions (default: 5)"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let args: Args = parse_arguments(params)?;
        let max = args.max_suggestions.unwrap_or(self.defaults.max_suggestions);
        let suggestions = self.catalog.suggest(&args.query, args.field, max);
        json_content(&suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogItem, ItemKind};

    #[test]
    fn test_suggestions_respect_max() {
        let catalog = Catalog::from_items(vec![
            CatalogItem::new("sage", ItemKind::Plant, "Sage"),
            CatalogItem::new("sagebrush", ItemKind::Plant, "Sagebrush"),
            CatalogItem::new("sago", ItemKind::Plant, "Sago Palm"),
        ]);
        let tool = GetSuggestionsTool::new(Arc::new(catalog), SearchDefaults::default());

        let result = tool
            .execute(json!({ "query": "sag", "maxSuggestions": 2 }))
            .unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        let suggestions: Vec<String> = serde_json::from_str(text).unwrap();
        assert_eq!(suggestions, vec!["Sage", "Sagebrush"]);
    }
}
