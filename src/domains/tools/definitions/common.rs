//! Common utilities shared across the football tools.
//!
//! Argument parsing and rendering of API outcomes into tool results.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domains::football::ApiResult;

/// Deserialize tool arguments into the tool's params type.
pub fn parse_params<P: DeserializeOwned>(args: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render a pass-through API payload.
///
/// Success is the compact JSON of the payload; failure reads
/// `Failed to <action>: <error>`.
pub fn payload_result(action: &str, result: ApiResult<Value>) -> CallToolResult {
    match result {
        Ok(payload) => success_result(payload.to_string()),
        Err(e) => error_result(&format!("Failed to {}: {}", action, e)),
    }
}
