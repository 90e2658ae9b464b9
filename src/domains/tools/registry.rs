//! Tool metadata and name-based dispatch.
//!
//! The rmcp router in `router.rs` serves STDIO and TCP; the HTTP transport
//! has no rmcp session and calls [`ToolRegistry::call_tool`] instead.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::{info, warn};

use super::ToolError;
use super::definitions::{
    GetFixturesTool, GetGoalStatsTool, GetOddsTool, GetPredictionsTool, GetTeamsTool,
    ToolDefinition, call_with_json,
};
use crate::domains::football::FootballClient;

/// The five football tools, bound to a shared client.
pub struct ToolRegistry {
    client: Arc<FootballClient>,
}

impl ToolRegistry {
    pub fn new(client: Arc<FootballClient>) -> Self {
        Self { client }
    }

    pub fn tool_names() -> [&'static str; 5] {
        [
            GetTeamsTool::NAME,
            GetFixturesTool::NAME,
            GetGoalStatsTool::NAME,
            GetPredictionsTool::NAME,
            GetOddsTool::NAME,
        ]
    }

    /// Metadata of every tool, in registration order.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetTeamsTool::to_tool(),
            GetFixturesTool::to_tool(),
            GetGoalStatsTool::to_tool(),
            GetPredictionsTool::to_tool(),
            GetOddsTool::to_tool(),
        ]
    }

    /// Run the tool called `name`.
    ///
    /// `Err` means the call never reached the tool (unknown name, arguments
    /// of the wrong shape). Upstream failures come back as an error result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        info!("Dispatching tool call: {}", name);
        let client = self.client.as_ref();

        match name {
            GetTeamsTool::NAME => call_with_json::<GetTeamsTool>(arguments, client).await,
            GetFixturesTool::NAME => call_with_json::<GetFixturesTool>(arguments, client).await,
            GetGoalStatsTool::NAME => call_with_json::<GetGoalStatsTool>(arguments, client).await,
            GetPredictionsTool::NAME => {
                call_with_json::<GetPredictionsTool>(arguments, client).await
            }
            GetOddsTool::NAME => call_with_json::<GetOddsTool>(arguments, client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
