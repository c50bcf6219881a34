//! Compare terms tool

use serde::Deserialize;
use serde_json::{json, Value};

use crate::protocol::{json_content, parse_arguments, McpTool, Tool};
use crate::search::{edit_distance, similarity};
use crate::types::McpResult;

#[derive(Debug, Deserialize)]
struct Args {
    a: String,
    b: String,
}

/// Tool reporting edit distance and similarity of two strings
pub struct CompareTermsTool;

impl CompareTermsTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompareTermsTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CompareTermsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "compare_terms",
            "Edit distance (case-sensitive) and similarity (case-insensitive, 0-1) between two strings.",
            json!({
                "type": "object",
                "properties": {
                    "a": { "type": "string" },
                    "b": { "type": "string" }
                },
                "required": ["a", "b"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let args: Args = parse_arguments(params)?;
        json_content(&json!({
            "editDistance": edit_distance(&args.a, &args.b),
            "similarity": similarity(&args.a, &args.b),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        let result = CompareTermsTool::new()
            .execute(json!({ "a": "Roze", "b": "rose" }))
            .unwrap();
        let body: Value =
            serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(body["editDistance"], 2);
        assert_eq!(body["similarity"], 0.75);
    }

    #[test]
    fn test_missing_argument_fails() {
        assert!(CompareTermsTool::new().execute(json!({ "a": "rose" })).is_err());
    }
}
