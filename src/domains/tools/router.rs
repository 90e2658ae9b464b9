//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    GetFixturesTool, GetGoalStatsTool, GetOddsTool, GetPredictionsTool, GetTeamsTool,
    ToolDefinition,
};
use crate::domains::football::FootballClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<FootballClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetTeamsTool::create_route(client.clone()))
        .with_route(GetFixturesTool::create_route(client.clone()))
        .with_route(GetGoalStatsTool::create_route(client.clone()))
        .with_route(GetPredictionsTool::create_route(client.clone()))
        .with_route(GetOddsTool::create_route(client))
}
