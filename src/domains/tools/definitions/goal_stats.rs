//! Goal statistics tool.
//!
//! Fetches every fixture of a team in a season and folds them into scored and
//! conceded totals, per-game averages and the clean sheet rate.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ToolDefinition;
use super::common::{error_result, success_result};
use crate::domains::football::{FixturesResponse, FootballClient, ParamBag, aggregate};

/// Parameters for the goal statistics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGoalStatsParams {
    #[schemars(description = "The team id")]
    pub team: u32,

    #[schemars(description = "The season year (YYYY)")]
    pub season: i32,
}

/// Goal statistics for a team over one season.
pub struct GetGoalStatsTool;

#[async_trait]
impl ToolDefinition for GetGoalStatsTool {
    const NAME: &'static str = "get-goal-stats";
    const DESCRIPTION: &'static str = "Get goal statistics for a team in a season. Includes total goals scored and conceded and averages per game.";

    type Params = GetGoalStatsParams;

    #[instrument(skip_all, fields(team = params.team, season = params.season))]
    async fn execute(params: GetGoalStatsParams, client: &FootballClient) -> CallToolResult {
        info!("Computing goal statistics");

        let query = ParamBag::new()
            .set("team", params.team)
            .set("season", params.season);

        let fixtures: FixturesResponse = match client.fetch("/fixtures", &query).await {
            Ok(fixtures) => fixtures,
            Err(e) => return error_result(&format!("Failed to fetch fixtures: {}", e)),
        };

        match aggregate(&fixtures.response, fixtures.results, params.team) {
            Ok(stats) => success_result(stats.summary()),
            Err(e) => error_result(&format!("Failed to compute goal statistics: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{client_for, is_error, result_text};
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_summarizes_fixtures() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/fixtures")
                    .query_param("team", "1")
                    .query_param("season", "2024");
                then.status(200).json_body(json!({
                    "errors": [],
                    "results": 2,
                    "response": [
                        {
                            "fixture": {"id": 100},
                            "teams": {"home": {"id": 1}, "away": {"id": 2}},
                            "goals": {"home": 2, "away": 0}
                        },
                        {
                            "fixture": {"id": 101},
                            "teams": {"home": {"id": 3}, "away": {"id": 1}},
                            "goals": {"home": 1, "away": 1}
                        }
                    ]
                }));
            })
            .await;

        let client = client_for(server.base_url());
        let params = GetGoalStatsParams {
            team: 1,
            season: 2024,
        };
        let result = GetGoalStatsTool::execute(params, &client).await;

        mock.assert_async().await;
        assert!(!is_error(&result));
        assert_eq!(
            result_text(&result),
            "The team has scored 3 goals and conceded 1 goals in 2 games. \
             Their average goals scored per game is 1.50 and their average goals \
             conceded per game is 0.50. Their clean sheet rate is 0.50."
        );
    }

    #[tokio::test]
    async fn test_execute_no_fixtures() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/fixtures");
                then.status(200).json_body(json!({"results": 0, "response": []}));
            })
            .await;

        let client = client_for(server.base_url());
        let params = GetGoalStatsParams {
            team: 77,
            season: 2024,
        };
        let result = GetGoalStatsTool::execute(params, &client).await;

        assert!(is_error(&result));
        assert_eq!(
            result_text(&result),
            "Failed to compute goal statistics: No fixtures found for team 77"
        );
    }

    #[tokio::test]
    async fn test_execute_status_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/fixtures");
                then.status(404);
            })
            .await;

        let client = client_for(server.base_url());
        let params = GetGoalStatsParams {
            team: 1,
            season: 2024,
        };
        let result = GetGoalStatsTool::execute(params, &client).await;

        assert!(is_error(&result));
        assert_eq!(
            result_text(&result),
            "Failed to fetch fixtures: HTTP error! status: 404"
        );
    }

    #[tokio::test]
    async fn test_execute_malformed_fixtures() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/fixtures");
                then.status(200)
                    .json_body(json!({"results": 1, "response": [{"fixture": {"id": 1}}]}));
            })
            .await;

        let client = client_for(server.base_url());
        let params = GetGoalStatsParams {
            team: 1,
            season: 2024,
        };
        let result = GetGoalStatsTool::execute(params, &client).await;

        assert!(is_error(&result));
        assert!(result_text(&result).starts_with("Failed to fetch fixtures: Failed to decode response"));
    }
}
