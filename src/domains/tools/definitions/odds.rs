//! Bookmaker odds tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ToolDefinition;
use super::common::payload_result;
use crate::domains::football::{FootballClient, ParamBag};

/// Parameters for the odds tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetOddsParams {
    #[schemars(description = "The id of the fixture")]
    pub fixture: String,

    #[schemars(description = "The id of the league")]
    #[serde(default)]
    pub league: Option<String>,

    #[schemars(description = "The season year (YYYY)")]
    #[serde(default)]
    pub season: Option<i32>,
}

impl GetOddsParams {
    fn to_params(&self) -> ParamBag {
        ParamBag::new()
            .set("fixture", self.fixture.as_str())
            .set_opt("league", self.league.as_deref())
            .set_opt("season", self.season)
    }
}

/// Pre-match bookmaker odds for a fixture.
pub struct GetOddsTool;

#[async_trait]
impl ToolDefinition for GetOddsTool {
    const NAME: &'static str = "get-odds";
    const DESCRIPTION: &'static str = "Get pre-match bookmaker odds for a fixture. Odds are grouped by bookmaker and bet type (match winner, goals over/under, both teams score, ...). League and season narrow the search when provided.";

    type Params = GetOddsParams;

    #[instrument(skip_all, fields(fixture = %params.fixture))]
    async fn execute(params: GetOddsParams, client: &FootballClient) -> CallToolResult {
        info!("Fetching odds");
        let result = client.fetch("/odds", &params.to_params()).await;
        payload_result("get odds", result)
    }
}
