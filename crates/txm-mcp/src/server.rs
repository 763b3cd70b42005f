//! Newline-delimited JSON-RPC server over stdio
//!
//! Each input line is one JSON-RPC message. Replies go to stdout, one per
//! line; everything else, including logs, goes to stderr.

use rand::Rng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use txm_core::Result;
use txm_tools::TextEngine;

use crate::catalog::tool_catalog;
use crate::config::ServerConfig;
use crate::dispatch::call_tool;
use crate::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND,
    PARSE_ERROR, PROTOCOL_VERSION, Request, Response,
};

/// MCP server exposing the text tools
pub struct McpServer<R: Rng = StdRng> {
    config: ServerConfig,
    engine: TextEngine<R>,
}

impl McpServer<StdRng> {
    /// Create a server, seeding the generator from the configuration
    pub fn new(config: ServerConfig) -> Self {
        let engine = TextEngine::from_seed(config.seed);
        Self::with_engine(config, engine)
    }
}

impl<R: Rng> McpServer<R> {
    pub fn with_engine(config: ServerConfig, engine: TextEngine<R>) -> Self {
        Self { config, engine }
    }

    /// Handle one raw message, returning the serialized reply if one is due
    pub fn handle_message(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<Value>(line) {
            Err(err) => {
                warn!(error = %err, "Received malformed JSON");
                Some(Response::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", err),
                ))
            }
            Ok(value) => {
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                match serde_json::from_value::<Request>(value) {
                    Ok(request) => self.handle_request(request),
                    Err(err) => {
                        warn!(error = %err, "Received invalid JSON-RPC request");
                        Some(Response::failure(
                            id,
                            INVALID_REQUEST,
                            format!("Invalid request: {}", err),
                        ))
                    }
                }
            }
        }?;

        encode(&response)
    }

    fn handle_request(&mut self, request: Request) -> Option<Response> {
        if request.jsonrpc.as_deref() != Some(JSONRPC_VERSION) {
            warn!(method = %request.method, "Request without jsonrpc 2.0 marker");
        }
        debug!(method = %request.method, id = ?request.id, "Handling request");

        if request.is_notification() {
            match request.method.as_str() {
                "notifications/initialized" => info!("Client initialized"),
                other => debug!(method = other, "Ignoring notification"),
            }
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => Response::success(id, self.initialize_result()),
            "ping" => Response::success(id, json!({})),
            "tools/list" => Response::success(id, json!({ "tools": tool_catalog() })),
            "tools/call" => self.tools_call(id, request.params.unwrap_or(Value::Null)),
            other => {
                warn!(method = other, "Unknown method");
                Response::failure(id, METHOD_NOT_FOUND, format!("Method not found: {}", other))
            }
        };

        Some(response)
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": self.config.name,
                "version": self.config.version,
            },
        })
    }

    fn tools_call(&mut self, id: Value, params: Value) -> Response {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            warn!("tools/call without a tool name");
            return Response::failure(id, INVALID_PARAMS, "Missing tool name");
        };

        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
        let result = call_tool(&mut self.engine, name, &arguments);

        match serde_json::to_value(result) {
            Ok(value) => Response::success(id, value),
            Err(err) => Response::failure(id, INTERNAL_ERROR, err.to_string()),
        }
    }

    /// Serve messages from `reader` until EOF, writing replies to `writer`
    ///
    /// A line that is not UTF-8 gets a parse error reply; the session goes on.
    pub async fn serve<I, O>(&mut self, mut reader: I, mut writer: O) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).await? == 0 {
                break;
            }

            let reply = match std::str::from_utf8(&line) {
                Ok(text) => self.handle_message(text),
                Err(err) => {
                    warn!(error = %err, "Received a line that is not UTF-8");
                    encode(&Response::failure(
                        Value::Null,
                        PARSE_ERROR,
                        format!("Parse error: invalid UTF-8 ({})", err),
                    ))
                }
            };

            if let Some(reply) = reply {
                writer.write_all(reply.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }
}

fn encode(response: &Response) -> Option<String> {
    match serde_json::to_string(response) {
        Ok(reply) => Some(reply),
        Err(err) => {
            warn!(error = %err, "Failed to serialize response");
            None
        }
    }
}

/// Run the server on the process's stdin and stdout
pub async fn run_stdio(config: ServerConfig) -> Result<()> {
    info!(
        name = %config.name,
        version = %config.version,
        "🚀 Text Master MCP Server is running"
    );

    let mut server = McpServer::new(config);
    server
        .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(ServerConfig::default().with_seed(Some(1)))
    }

    fn reply(server: &mut McpServer, message: Value) -> Value {
        let line = server.handle_message(&message.to_string()).unwrap();
        serde_json::from_str(&line).unwrap()
    }

    #[test]
    fn test_initialize() {
        let mut server = server();
        let response = reply(
            &mut server,
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        );
        assert_eq!(response["result"]["serverInfo"]["name"], "text-master-mcp");
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert!(response["result"]["capabilities"]["tools"].is_object());
    }

    #[test]
    fn test_notifications_get_no_reply() {
        let mut server = server();
        let message = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert_eq!(server.handle_message(&message.to_string()), None);
        assert_eq!(server.handle_message("   "), None);
    }

    #[test]
    fn test_tools_list() {
        let mut server = server();
        let response = reply(&mut server, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}));
        assert_eq!(response["result"]["tools"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_protocol_errors() {
        let mut server = server();

        let response: Value = serde_json::from_str(&server.handle_message("{oops").unwrap()).unwrap();
        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert_eq!(response["id"], Value::Null);

        let response = reply(&mut server, json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"}));
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);

        let response = reply(
            &mut server,
            json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call", "params": {}}),
        );
        assert_eq!(response["error"]["code"], INVALID_PARAMS);

        let response = reply(&mut server, json!({"jsonrpc": "2.0", "id": 5}));
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
        assert_eq!(response["id"], 5);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_keeps_session_alive() {
        let mut server = server();
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
        input.push(b'\n');

        let mut output = Vec::new();
        server.serve(input.as_slice(), &mut output).await.unwrap();

        let replies: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["error"]["code"], PARSE_ERROR);
        assert_eq!(replies[1]["id"], 1);
        assert_eq!(replies[1]["result"], json!({}));
    }

    #[test]
    fn test_unknown_tool_is_tool_error() {
        let mut server = server();
        let response = reply(
            &mut server,
            json!({"jsonrpc": "2.0", "id": 6, "method": "tools/call", "params": {"name": "shout", "arguments": {}}}),
        );
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(response["result"]["content"][0]["text"], "❌ Error: Unknown tool: shout");
    }
}
