//! Team listing tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ToolDefinition;
use super::common::payload_result;
use crate::domains::football::{FootballClient, League, ParamBag};

/// Parameters for the team listing tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTeamsParams {
    /// League or competition to list teams for.
    pub league: League,

    #[schemars(description = "The season year (YYYY)")]
    pub season: i32,
}

impl GetTeamsParams {
    fn to_params(&self) -> ParamBag {
        ParamBag::new()
            .set("league", self.league.provider_id())
            .set("season", self.season)
    }
}

/// Lists the teams of a league for one season.
pub struct GetTeamsTool;

#[async_trait]
impl ToolDefinition for GetTeamsTool {
    const NAME: &'static str = "get-teams";
    const DESCRIPTION: &'static str = "Get a list of teams in a league or competition";

    type Params = GetTeamsParams;

    #[instrument(skip_all, fields(league = %params.league, season = params.season))]
    async fn execute(params: GetTeamsParams, client: &FootballClient) -> CallToolResult {
        info!("Fetching teams");
        let result = client.fetch("/teams", &params.to_params()).await;
        payload_result("fetch teams", result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{client_for, is_error, result_text};
    use super::*;
    use crate::domains::football::ParamValue;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_params_map_league_to_provider_id() {
        let params: GetTeamsParams =
            serde_json::from_value(json!({"league": "MLS", "season": 2025})).unwrap();
        let bag = params.to_params();
        assert_eq!(bag.get("league"), Some(&ParamValue::Int(253)));
        assert_eq!(bag.get("season"), Some(&ParamValue::Int(2025)));
    }

    #[test]
    fn test_params_reject_unknown_league() {
        let result =
            serde_json::from_value::<GetTeamsParams>(json!({"league": "Serie A", "season": 2025}));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_execute_renders_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/teams")
                    .query_param("league", "15")
                    .query_param("season", "2025");
                then.status(200).json_body(json!({
                    "results": 1,
                    "errors": [],
                    "response": [{"team": {"id": 50, "name": "Manchester City"}}]
                }));
            })
            .await;

        let client = client_for(server.base_url());
        let params = GetTeamsParams {
            league: League::ClubWorldCup,
            season: 2025,
        };
        let result = GetTeamsTool::execute(params, &client).await;

        mock.assert_async().await;
        assert!(!is_error(&result));
        assert!(result_text(&result).contains("Manchester City"));
    }

    #[tokio::test]
    async fn test_execute_renders_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/teams");
                then.status(500);
            })
            .await;

        let client = client_for(server.base_url());
        let params = GetTeamsParams {
            league: League::Mls,
            season: 2024,
        };
        let result = GetTeamsTool::execute(params, &client).await;

        assert!(is_error(&result));
        assert_eq!(
            result_text(&result),
            "Failed to fetch teams: HTTP error! status: 500"
        );
    }
}
