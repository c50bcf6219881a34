//! Protocol types for MCP and JSON-RPC communication
//!
//! This module contains all protocol-related types and traits.

mod jsonrpc;
mod mcp;

pub use jsonrpc::{
    ErrorObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
pub use mcp::{json_content, parse_arguments, McpTool, ServerInfo, Tool, PROTOCOL_VERSION};
