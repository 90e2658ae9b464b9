//! HTTP transport: JSON-RPC 2.0 over POST.
//!
//! A stateless bridge for clients that cannot hold a STDIO or TCP session
//! (curl, browsers). It answers with the same rmcp models as the session
//! transports: `initialize` returns [`ServerHandler::get_info`], tool calls
//! run through the [`ToolRegistry`](crate::domains::tools::ToolRegistry) and
//! come back as serialized `CallToolResult`s.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use rmcp::ServerHandler;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::resources::ResourceError;
use crate::domains::tools::ToolError;

const JSONRPC_VERSION: &str = "2.0";

/// Why a JSON-RPC call produced an `error` member instead of a `result`.
#[derive(Debug, Error)]
enum RpcError {
    #[error("Invalid Request")]
    InvalidRequest,

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpcError {
    fn code(&self) -> i32 {
        match self {
            Self::InvalidRequest => -32600,
            Self::MethodNotFound(_) => -32601,
            Self::InvalidParams(_) | Self::Tool(_) => -32602,
            Self::Resource(ResourceError::NotFound(_)) => -32002,
            Self::Resource(ResourceError::Internal(_)) | Self::Internal(_) => -32603,
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct RpcRequest {
    jsonrpc: String,
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

#[derive(Debug, Serialize)]
struct RpcErrorBody {
    code: i32,
    message: String,
}

#[derive(Debug, Serialize)]
struct RpcResponse {
    jsonrpc: &'static str,
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcErrorBody>,
}

impl RpcResponse {
    fn new(id: Option<Value>, outcome: Result<Value, RpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(e) => {
                let body = RpcErrorBody {
                    code: e.code(),
                    message: e.to_string(),
                };
                (None, Some(body))
            }
        };

        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result,
            error,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ResourceReadParams {
    uri: String,
}

#[derive(Clone)]
struct AppState {
    server: McpServer,
    rpc_path: Arc<str>,
    initialized: Arc<AtomicBool>,
}

pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    fn router(&self, server: McpServer) -> Router {
        let state = AppState {
            server,
            rpc_path: Arc::from(self.config.rpc_path.as_str()),
            initialized: Arc::new(AtomicBool::new(false)),
        };

        let app = Router::new()
            .route(&self.config.rpc_path, post(rpc_handler))
            .route("/health", get(health_handler))
            .route("/", get(index_handler))
            .with_state(state);

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            app
        }
    }

    /// Serve until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "MCP Soccer Statistics Server listening on http://{}{} (CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Endpoint map plus what the server offers.
async fn index_handler(State(state): State<AppState>) -> Json<Value> {
    let tools: Vec<String> = state
        .server
        .tools()
        .into_iter()
        .map(|t| t.name.to_string())
        .collect();
    let resources: Vec<String> = state
        .server
        .resources()
        .list()
        .into_iter()
        .map(|r| r.raw.uri)
        .collect();

    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "rpc": format!("POST {}", state.rpc_path),
        "tools": tools,
        "resources": resources,
    }))
}

async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(health(&state))
}

fn health(state: &AppState) -> Value {
    json!({
        "status": "ok",
        "api_key_configured": state.server.config().football.api_key.is_some(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
}

#[instrument(skip_all, fields(method = %request.method))]
async fn rpc_handler(
    State(state): State<AppState>,
    Json(request): Json<RpcRequest>,
) -> Json<RpcResponse> {
    Json(dispatch(&state, request).await)
}

async fn dispatch(state: &AppState, request: RpcRequest) -> RpcResponse {
    let RpcRequest {
        jsonrpc,
        id,
        method,
        params,
    } = request;

    if jsonrpc != JSONRPC_VERSION {
        return RpcResponse::new(id, Err(RpcError::InvalidRequest));
    }

    let outcome = match method.as_str() {
        "initialize" => initialize(state),
        "ping" => Ok(json!({})),
        "tools/list" => serde_json::to_value(state.server.tools())
            .map(|tools| json!({ "tools": tools }))
            .map_err(RpcError::from),
        "tools/call" => call_tool(state, params).await,
        "resources/list" => serde_json::to_value(state.server.resources().list())
            .map(|resources| json!({ "resources": resources }))
            .map_err(RpcError::from),
        "resources/read" => read_resource(state, params),
        "notifications/initialized" => {
            state.initialized.store(true, Ordering::Release);
            debug!("Client finished initialization");
            Ok(Value::Null)
        }
        other if other.starts_with("notifications/") => {
            debug!("Ignoring notification {}", other);
            Ok(Value::Null)
        }
        other => Err(RpcError::MethodNotFound(other.to_string())),
    };

    if let Err(e) = &outcome {
        warn!("JSON-RPC {} failed: {}", method, e);
    }

    RpcResponse::new(id, outcome)
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, RpcError> {
    let params = params.ok_or_else(|| RpcError::InvalidParams("missing params".to_string()))?;
    serde_json::from_value(params).map_err(|e| RpcError::InvalidParams(e.to_string()))
}

fn initialize(state: &AppState) -> Result<Value, RpcError> {
    state.initialized.store(false, Ordering::Release);
    Ok(serde_json::to_value(state.server.get_info())?)
}

async fn call_tool(state: &AppState, params: Option<Value>) -> Result<Value, RpcError> {
    let ToolCallParams { name, arguments } = parse_params(params)?;
    let arguments = arguments.unwrap_or_else(|| json!({}));

    let result = state.server.registry().call_tool(&name, arguments).await?;
    Ok(serde_json::to_value(result)?)
}

fn read_resource(state: &AppState, params: Option<Value>) -> Result<Value, RpcError> {
    let ResourceReadParams { uri } = parse_params(params)?;
    let contents = state.server.resources().read(&uri)?;
    Ok(serde_json::to_value(contents)?)
}
