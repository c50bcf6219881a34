//! Find best match tool

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::check_threshold;
use crate::protocol::{json_content, parse_arguments, McpTool, Tool};
use crate::search::{find_best_match, DEFAULT_MATCH_THRESHOLD};
use crate::server::error_response;
use crate::types::McpResult;

#[derive(Debug, Deserialize)]
struct Args {
    #[serde(default)]
    query: String,
    #[serde(default)]
    corpus: Vec<String>,
    threshold: Option<f64>,
}

/// Tool matching a query against caller-supplied terms
pub struct FindBestMatchTool;

impl FindBestMatchTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FindBestMatchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for FindBestMatchTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "find_best_match",
            "Find the term in a list that best matches a query (exact, then substring, then closest by edit distance).",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Text to match"
                    },
                    "corpus": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Candidate terms"
                    },
                    "threshold": {
                        "type": "number",
                        "description": "Minimum similarity (0-1) for a fuzzy match (default: 0.6)"
                    }
                },
                "required": ["query", "corpus"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let args: Args = parse_arguments(params)?;
        let threshold = match check_threshold(args.threshold.unwrap_or(DEFAULT_MATCH_THRESHOLD)) {
            Ok(threshold) => threshold,
            Err(message) => return Ok(error_response(&message)),
        };

        json_content(&find_best_match(&args.query, &args.corpus, threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(params: Value) -> Value {
        let result = FindBestMatchTool::new().execute(params).unwrap();
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_substring_match() {
        let body = run(json!({ "query": "ros", "corpus": ["rose", "lily"], "threshold": 0.5 }));
        assert_eq!(body["match"], "rose");
        assert_eq!(body["similarity"], 0.8);
        assert_eq!(body["rule"], "substring");
    }

    #[test]
    fn test_no_match() {
        let body = run(json!({ "query": "xyz", "corpus": ["rose", "lily"] }));
        assert!(body["match"].is_null());
        assert_eq!(body["similarity"], 0.0);
    }
}
