//! MCP tool server for Text Master
//!
//! This crate exposes the text tools over the Model Context Protocol:
//! newline-delimited JSON-RPC 2.0 on stdin and stdout.

mod catalog;
mod config;
mod dispatch;
mod protocol;
mod render;
mod server;


pub use catalog::{ToolDefinition, tool_catalog};
pub use config::{DEFAULT_SERVER_NAME, ServerConfig};
pub use dispatch::{call_tool, parse_tool_call};
pub use protocol::{Content, Request, Response, RpcError, ToolResponse};
pub use render::render_outcome;
pub use server::{McpServer, run_stdio};

// Re-export core types for convenience
pub use txm_core::{Error, Result};
