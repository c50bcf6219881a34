//! Helpers for picking apart `tools/call` parameters

use serde_json::{json, Map, Value};

/// Extract tool arguments from params
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(Map::new()))
}

/// Extract tool name from params
pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// Build an MCP error content response
pub fn error_response(message: &str) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": format!("Error: {}", message)
        }],
        "isError": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arguments_default_to_empty_object() {
        let params = json!({ "name": "compare_terms" });
        assert_eq!(extract_arguments(&params), json!({}));
        assert_eq!(extract_tool_name(&params), Some("compare_terms"));
    }
}
