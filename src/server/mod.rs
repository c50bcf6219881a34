//! MCP Server implementation
//!
//! This module contains the server that answers JSON-RPC requests, one per
//! line, over stdin/stdout.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub use handlers::{error_response, extract_arguments, extract_tool_name};

/// MCP Server that handles JSON-RPC communication
pub struct McpServer {
    server_info: ServerInfo,
    // Sorted so tools/list output is stable
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl McpServer {
    /// Create a new MCP server with default settings
    pub fn new() -> Self {
        Self {
            server_info: ServerInfo::default(),
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        debug!(tool = %name, "registered tool");
        self.tools.insert(name, tool);
        self
    }

    /// Run the server on stdin/stdout until stdin closes (blocking)
    pub fn run(&self) -> McpResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serve requests from any line reader, writing responses to `writer`
    pub fn serve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> McpResult<()> {
        info!(tools = self.tools.len(), "MCP server listening on stdio");

        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                if let Some(response) = self.handle_request(trimmed) {
                    writeln!(writer, "{}", serde_json::to_string(&response)?)?;
                    writer.flush()?;
                }
            }
            line.clear();
        }

        info!("stdin closed, MCP server stopping");
        Ok(())
    }

    /// Handle a single JSON-RPC request line.
    ///
    /// Returns the response to send, or `None` for notifications.
    pub fn handle_request(&self, request_str: &str) -> Option<Value> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "unparseable JSON-RPC request");
                return to_value(JsonRpcError::parse_error(e.to_string()));
            }
        };

        let id = request.id.clone().unwrap_or(Value::Null);

        if !request.is_valid() {
            return to_value(JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'"));
        }

        debug!(method = %request.method, "request");
        let is_notification = request.is_notification();

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => to_value(JsonRpcResponse::new(id, json!({}))),
            _ if is_notification => None,
            _ => to_value(JsonRpcError::method_not_found(id, &request.method)),
        };

        if is_notification {
            None
        } else {
            response
        }
    }

    fn handle_initialize(&self, id: Value) -> Option<Value> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        to_value(JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&self, id: Value) -> Option<Value> {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        to_value(JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&self, id: Value, params: Option<Value>) -> Option<Value> {
        let Some(params) = params else {
            return to_value(JsonRpcError::invalid_params(id, "Missing parameters".to_string()));
        };
        let Some(tool_name) = extract_tool_name(&params) else {
            return to_value(JsonRpcError::invalid_params(id, "Missing tool name".to_string()));
        };
        let Some(tool) = self.tools.get(tool_name) else {
            return to_value(JsonRpcError::unknown_tool(id, tool_name));
        };

        match tool.execute(extract_arguments(&params)) {
            Ok(result) => to_value(JsonRpcResponse::new(id, result)),
            Err(e) => {
                warn!(tool = %tool_name, error = %e, "tool failed");
                to_value(JsonRpcError::tool_failed(id, e.to_string()))
            }
        }
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_value<T: serde::Serialize>(response: T) -> Option<Value> {
    serde_json::to_value(response).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::catalog::Catalog;
    use crate::tools::register_all_tools;
    use crate::types::{CatalogItem, ItemKind};

    fn server() -> McpServer {
        let catalog = Arc::new(Catalog::from_items(vec![CatalogItem::new(
            "rose",
            ItemKind::Plant,
            "Rose",
        )]));
        let mut server = McpServer::new();
        register_all_tools(&mut server, catalog, Default::default());
        server
    }

    #[test]
    fn test_initialize_reports_server_info() {
        let response = server()
            .handle_request(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#)
            .unwrap();
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], crate::NAME);
    }

    #[test]
    fn test_notification_gets_no_response() {
        let response =
            server().handle_request(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#);
        assert!(response.is_none());
    }

    #[test]
    fn test_parse_error() {
        let response = server().handle_request("{not json").unwrap();
        assert_eq!(response["error"]["code"], -32700);
    }

    #[test]
    fn test_wrong_version_is_invalid() {
        let response = server()
            .handle_request(r#"{"jsonrpc":"1.0","id":2,"method":"ping"}"#)
            .unwrap();
        assert_eq!(response["error"]["code"], -32600);
    }

    #[test]
    fn test_unknown_method() {
        let response = server()
            .handle_request(r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#)
            .unwrap();
        assert_eq!(response["error"]["code"], -32601);
    }

    #[test]
    fn test_unknown_tool() {
        let response = server()
            .handle_request(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"dig"}}"#,
            )
            .unwrap();
        assert_eq!(response["error"]["code"], -32602);
    }

    #[test]
    fn test_tool_call_returns_tool_content() {
        let response = server()
            .handle_request(
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"compare_terms","arguments":{"a":"kitten","b":"sitting"}}}"#,
            )
            .unwrap();
        assert_eq!(response["id"], 5);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        let body: Value = serde_json::from_str(text).unwrap();
        assert_eq!(body["editDistance"], 3);
    }

    #[test]
    fn test_tool_call_notification_gets_no_response() {
        let response = server().handle_request(
            r#"{"jsonrpc":"2.0","method":"tools/call","params":{"name":"list_items"}}"#,
        );
        assert!(response.is_none());
    }

    #[test]
    fn test_serve_writes_one_line_per_response() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n"
        );
        let mut output = Vec::new();
        server().serve(input.as_bytes(), &mut output).unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[1]["result"]["tools"].as_array().unwrap().len(), 6);
    }
}
