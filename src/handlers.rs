// MCP dispatch and axum handlers
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{body::Body, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use crate::client::HttpTransport;
use crate::rpc::{
    InitializeParams, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND,
};
use crate::tools::{BinCollectionTool, TOOL_NAME};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "mcp-bins";

pub struct McpServer<T> {
    tool: BinCollectionTool<T>,
}

impl<T: HttpTransport> McpServer<T> {
    pub fn new(tool: BinCollectionTool<T>) -> Self {
        McpServer { tool }
    }

    /// Handle one decoded JSON-RPC message. Notifications produce no reply.
    pub async fn dispatch(&self, request_value: Value) -> Option<Value> {
        let id = request_value.get("id").cloned().unwrap_or(Value::Null);
        let request: Result<JsonRpcRequest, _> = serde_json::from_value(request_value);
        if let Ok(req) = &request {
            if req.version() != "2.0" {
                return Some(error_value(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid Request: unsupported jsonrpc version {:?}", req.version()),
                ));
            }
        }
        match request {
            Ok(JsonRpcRequest::WithParams(req)) => {
                Some(self.handle_request(req.id, &req.method, req.params).await)
            }
            Ok(JsonRpcRequest::WithoutParams(req)) => {
                Some(self.handle_request(req.id, &req.method, Value::Null).await)
            }
            Ok(JsonRpcRequest::Notification(note)) => {
                debug!("Notification {}", note.method);
                None
            }
            Err(_) => Some(error_value(id, INVALID_REQUEST, "Invalid Request".to_string())),
        }
    }

    async fn handle_request(&self, id: Value, method: &str, params: Value) -> Value {
        debug!("Request {} (id {})", method, id);
        match method {
            "initialize" => process_init(id, params),
            "ping" => result_value(id, json!({})),
            "tools/list" => result_value(id, json!({ "tools": [self.tool.description()] })),
            "tools/call" => self.process_tool_call(id, params).await,
            _ => error_value(id, METHOD_NOT_FOUND, "Method not found".to_string()),
        }
    }

    async fn process_tool_call(&self, id: Value, params: Value) -> Value {
        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return error_value(id, INVALID_PARAMS, format!("Invalid params for tools/call: {e}"))
            }
        };
        if params.name != TOOL_NAME {
            return error_value(id, INVALID_PARAMS, format!("Unknown tool: {}", params.name));
        }

        match self.tool.call(&params.arguments).await {
            Ok(text) => result_value(
                id,
                json!({
                    "content": [
                        {
                            "type": "text",
                            "text": text
                        }
                    ],
                    "isError": false
                }),
            ),
            Err(e) => {
                warn!("{} failed: {}", TOOL_NAME, e);
                let code = if e.is_validation() { INVALID_PARAMS } else { INTERNAL_ERROR };
                error_value(id, code, e.to_string())
            }
        }
    }
}

fn process_init(id: Value, params: Value) -> Value {
    let params: Result<InitializeParams, _> = serde_json::from_value(params);
    match params {
        Ok(params) => {
            debug!("Client requested protocol {}", params.protocol_version);
            result_value(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {
                        "tools": {
                            "listChanged": false
                        }
                    },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }),
            )
        }
        Err(e) => error_value(id, INVALID_PARAMS, format!("Invalid params for initialize: {e}")),
    }
}

fn result_value(id: Value, result: Value) -> Value {
    encode(&JsonRpcResponse::new(id, result))
}

fn error_value(id: Value, code: i32, message: String) -> Value {
    encode(&JsonRpcErrorResponse::new(id, code, message))
}

fn encode<S: Serialize>(message: &S) -> Value {
    serde_json::to_value(message).unwrap_or_else(|e| {
        error!("Failed to encode JSON-RPC message: {}", e);
        Value::Null
    })
}

pub fn router<T: HttpTransport + 'static>(server: Arc<McpServer<T>>) -> Router {
    Router::new()
        .route("/mcp", post(mcp_handler::<T>))
        .route("/mcp/", post(mcp_handler::<T>))
        .with_state(server)
}

pub async fn mcp_handler<T: HttpTransport + 'static>(
    State(server): State<Arc<McpServer<T>>>,
    Json(request_value): Json<Value>,
) -> Response {
    match server.dispatch(request_value).await {
        Some(reply) => create_jsonrpc_response(&reply),
        None => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "{}",
        )
            .into_response(),
    }
}

pub fn create_jsonrpc_response(json_response: &Value) -> Response {
    match serde_json::to_string(json_response) {
        Ok(json_string) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json_string,
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Body::from(r#"{"error":"failed to serialize response"}"#),
        )
            .into_response(),
    }
}
