//! Tool definitions module.
//!
//! Each tool is defined in its own file as a [`ToolDefinition`]: a name, a
//! description, a typed input contract and an async handler. The router and
//! the HTTP registry are both derived from these records.

pub mod common;
pub mod fixtures;
pub mod goal_stats;
pub mod odds;
pub mod predictions;
pub mod teams;

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::ToolError;
use crate::domains::football::FootballClient;

pub use fixtures::{GetFixturesParams, GetFixturesTool};
pub use goal_stats::{GetGoalStatsParams, GetGoalStatsTool};
pub use odds::{GetOddsParams, GetOddsTool};
pub use predictions::{GetPredictionsParams, GetPredictionsTool};
pub use teams::{GetTeamsParams, GetTeamsTool};

/// A tool exposed to MCP clients.
#[async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed input, validated by deserialization before `execute` runs.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool. Failures are rendered into the returned result.
    async fn execute(params: Self::Params, client: &FootballClient) -> CallToolResult;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    fn create_route<S>(client: Arc<FootballClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: Self::Params = common::parse_params(args)?;
                Ok(Self::execute(params, &client).await)
            }
            .boxed()
        })
    }
}

/// Run a tool from raw JSON arguments, outside an rmcp session.
///
/// Arguments that do not fit `T::Params` are rejected before anything is
/// sent upstream; every later failure is inside the returned result.
pub async fn call_with_json<T: ToolDefinition>(
    arguments: serde_json::Value,
    client: &FootballClient,
) -> Result<CallToolResult, ToolError> {
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

    Ok(T::execute(params, client).await)
}
