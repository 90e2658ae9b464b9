//! Fixture search tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ToolDefinition;
use super::common::{error_result, payload_result};
use crate::domains::football::{FootballClient, League, ParamBag};
use crate::domains::tools::ToolError;

/// Provider status code for fixtures not started yet.
const STATUS_NOT_STARTED: &str = "NS";

/// Provider status code for fixtures played to full time.
const STATUS_FULL_TIME: &str = "FT";

/// Parameters for the fixture search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFixturesParams {
    /// League or competition to search in.
    #[serde(default)]
    pub league: Option<League>,

    #[schemars(description = "The team id")]
    #[serde(default)]
    pub team: Option<u32>,

    #[schemars(description = "The season year (YYYY)")]
    pub season: i32,

    /// Only fixtures that have not started yet.
    #[serde(default)]
    pub upcoming: bool,

    /// Only fixtures played to full time. Ignored when `upcoming` is set.
    #[serde(default)]
    pub played: bool,
}

impl GetFixturesParams {
    /// Provider status filter; `upcoming` wins over `played`.
    fn status(&self) -> Option<&'static str> {
        if self.upcoming {
            Some(STATUS_NOT_STARTED)
        } else if self.played {
            Some(STATUS_FULL_TIME)
        } else {
            None
        }
    }

    fn validate(&self) -> Result<(), ToolError> {
        if self.league.is_none() && self.team.is_none() {
            return Err(ToolError::invalid_arguments(
                "At least a league or team must be provided",
            ));
        }
        Ok(())
    }

    fn to_params(&self) -> ParamBag {
        ParamBag::new()
            .set("season", self.season)
            .set_opt("league", self.league.map(League::provider_id))
            .set_opt("team", self.team)
            .set_opt("status", self.status())
    }
}

/// Searches the fixtures of a season by league and/or team.
pub struct GetFixturesTool;

#[async_trait]
impl ToolDefinition for GetFixturesTool {
    const NAME: &'static str = "get-fixtures";
    const DESCRIPTION: &'static str =
        "Search for fixtures in a season. At least a league or team must be provided.";

    type Params = GetFixturesParams;

    #[instrument(skip_all, fields(season = params.season))]
    async fn execute(params: GetFixturesParams, client: &FootballClient) -> CallToolResult {
        if let Err(e) = params.validate() {
            return error_result(&format!("Failed to fetch fixtures: {}", e));
        }

        info!(
            "Fetching fixtures (league: {:?}, team: {:?}, status: {:?})",
            params.league,
            params.team,
            params.status()
        );
        let result = client.fetch("/fixtures", &params.to_params()).await;
        payload_result("fetch fixtures", result)
    }
}
