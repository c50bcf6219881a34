//! MCP (Model Context Protocol) types

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::types::McpResult;

/// Protocol revision announced during `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP Tool definition
#[derive(Serialize, Debug, Clone)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl McpTool {
    pub fn new(name: &str, description: &str, input_schema: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Server information for MCP handshake
#[derive(Clone, Debug)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: String, version: String) -> Self {
        Self { name, version }
    }
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: crate::NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// Trait for MCP tools
///
/// All tools must implement this trait to be registered with the MCP server.
pub trait Tool: Send + Sync {
    /// Get the tool definition for tools/list
    fn definition(&self) -> McpTool;

    /// Execute the tool with the given arguments
    fn execute(&self, params: Value) -> McpResult<Value>;

    /// Get the tool name (convenience method)
    fn name(&self) -> String {
        self.definition().name
    }
}

/// Deserialize tool arguments, treating a missing object as empty
pub fn parse_arguments<T: DeserializeOwned>(params: Value) -> McpResult<T> {
    let params = if params.is_null() { json!({}) } else { params };
    Ok(serde_json::from_value(params)?)
}

/// Wrap a serializable value as MCP text content
pub fn json_content<T: Serialize>(value: &T) -> McpResult<Value> {
    Ok(json!({
        "content": [{
            "type": "text",
            "text": serde_json::to_string_pretty(value)?
        }]
    }))
}
