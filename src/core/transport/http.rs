//! HTTP transport: stateless JSON-RPC 2.0 over `POST {rpc_path}`.
//!
//! Every request is answered independently; there is no session. Tool and
//! resource dispatch goes through the same `McpServer` methods as STDIO.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use http::{Method, header};
use rmcp::{ServerHandler, model::JsonObject};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::{resources::ResourceError, tools::ToolError};

const JSONRPC_VERSION: &str = "2.0";
const PROTOCOL_VERSION: &str = "2024-11-05";

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;
const RESOURCE_NOT_FOUND: i32 = -32002;

pub struct HttpTransport {
    config: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Serialize an rmcp result into the `result` slot.
    fn from_serializable<T: Serialize>(id: Option<Value>, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(result) => Self::success(id, result),
            Err(e) => Self::error(id, INTERNAL_ERROR, e.to_string()),
        }
    }
}

/// `tools/call` params.
#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<JsonObject>,
}

/// `resources/read` params.
#[derive(Debug, Deserialize)]
struct ReadResourceParams {
    uri: String,
}

fn parse_params<T: for<'de> Deserialize<'de>>(
    id: &Option<Value>,
    params: Option<Value>,
) -> Result<T, JsonRpcResponse> {
    let params = params
        .ok_or_else(|| JsonRpcResponse::error(id.clone(), INVALID_PARAMS, "Missing params"))?;
    serde_json::from_value(params)
        .map_err(|e| JsonRpcResponse::error(id.clone(), INVALID_PARAMS, e.to_string()))
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum application for `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(server);

        let layers = ServiceBuilder::new().layer(TraceLayer::new_for_http());
        let app = app.layer(layers);

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE]),
            )
        } else {
            app
        }
    }

    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            cors = self.config.enable_cors,
            "Listening on {} (JSON-RPC at POST {})", addr, self.config.rpc_path
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Describes the endpoints for humans poking at the port.
async fn root_handler(State(server): State<McpServer>) -> impl IntoResponse {
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "rpc": server.config().transport.description(),
            "health": "/health"
        }
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    tracing::Span::current().record("method", request.method.as_str());
    Json(process_request(&server, request).await)
}

/// Dispatch one JSON-RPC request.
pub async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != JSONRPC_VERSION {
        return JsonRpcResponse::error(request.id, INVALID_REQUEST, "Invalid Request");
    }

    let JsonRpcRequest {
        id, method, params, ..
    } = request;

    match method.as_str() {
        "initialize" => initialize(server, id),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => JsonRpcResponse::success(id, json!({ "tools": server.list_tools() })),
        "tools/call" => call_tool(server, id, params).await,
        "resources/list" => JsonRpcResponse::success(
            id,
            json!({ "resources": server.list_resources().await }),
        ),
        "resources/templates/list" => JsonRpcResponse::success(
            id,
            json!({ "resourceTemplates": server.list_resource_templates().await }),
        ),
        "resources/read" => read_resource(server, id, params).await,
        m if m.starts_with("notifications/") => {
            info!("Notification: {m}");
            JsonRpcResponse::success(id, Value::Null)
        }
        _ => {
            warn!("Unknown method: {method}");
            JsonRpcResponse::error(id, METHOD_NOT_FOUND, "Method not found")
        }
    }
}

fn initialize(server: &McpServer, id: Option<Value>) -> JsonRpcResponse {
    let info = server.get_info();
    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": info.capabilities,
            "serverInfo": {
                "name": server.name(),
                "version": server.version()
            },
            "instructions": info.instructions
        }),
    )
}

async fn call_tool(server: &McpServer, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
    let params: CallToolParams = match parse_params(&id, params) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let arguments = params.arguments.unwrap_or_default();
    match server.call_tool(&params.name, arguments).await {
        Ok(result) => JsonRpcResponse::from_serializable(id, &result),
        Err(e @ ToolError::Internal(_)) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        Err(e) => JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string()),
    }
}

async fn read_resource(
    server: &McpServer,
    id: Option<Value>,
    params: Option<Value>,
) -> JsonRpcResponse {
    let params: ReadResourceParams = match parse_params(&id, params) {
        Ok(p) => p,
        Err(response) => return response,
    };

    match server.read_resource(&params.uri).await {
        Ok(result) => JsonRpcResponse::from_serializable(id, &result),
        Err(e @ ResourceError::NotFound(_)) => {
            JsonRpcResponse::error(id, RESOURCE_NOT_FOUND, e.to_string())
        }
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
    }
}
