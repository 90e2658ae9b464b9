//! Fixture predictions tool.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ToolDefinition;
use super::common::payload_result;
use crate::domains::football::{FootballClient, ParamBag};

/// Parameters for the predictions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPredictionsParams {
    #[schemars(description = "The id of the fixture")]
    pub fixture: String,
}

/// Provider predictions for a single fixture.
pub struct GetPredictionsTool;

#[async_trait]
impl ToolDefinition for GetPredictionsTool {
    const NAME: &'static str = "get-predictions";
    const DESCRIPTION: &'static str = "Get predictions about a fixture.

The predictions are made using several algorithms including the poisson distribution, comparison of team statistics, last matches, players etc.

Bookmakers odds are not used to make these predictions.

Also provides some comparative statistics between teams.

Available predictions:
- Match winner: id of the team that can potentially win the fixture
- Win or draw: if true indicates that the designated team can win or draw
- Under / Over: -1.5 / -2.5 / -3.5 / -4.5 / +1.5 / +2.5 / +3.5 / +4.5 *
- Goals home: -1.5 / -2.5 / -3.5 / -4.5 *
- Goals away: -1.5 / -2.5 / -3.5 / -4.5 *
- Advice (ex: Deportivo Santani or draws and -3.5 goals)

* -1.5 means that there will be a maximum of 1.5 goals in the fixture, i.e. 1 goal";

    type Params = GetPredictionsParams;

    #[instrument(skip_all, fields(fixture = %params.fixture))]
    async fn execute(params: GetPredictionsParams, client: &FootballClient) -> CallToolResult {
        info!("Fetching predictions");
        let query = ParamBag::new().set("fixture", params.fixture);
        let result = client.fetch("/predictions", &query).await;
        payload_result("get predictions", result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{client_for, is_error, result_text};
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_fixture_is_required() {
        assert!(serde_json::from_value::<GetPredictionsParams>(json!({})).is_err());
    }

    #[tokio::test]
    async fn test_execute_passes_payload_through() {
        let server = MockServer::start_async().await;
        let body = json!({
            "results": 1,
            "response": [{"predictions": {"winner": {"id": 1600}, "advice": "Double chance"}}]
        });
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/predictions")
                    .query_param("fixture", "198772");
                then.status(200).json_body(body.clone());
            })
            .await;

        let client = client_for(server.base_url());
        let params = GetPredictionsParams {
            fixture: "198772".to_string(),
        };
        let result = GetPredictionsTool::execute(params, &client).await;

        mock.assert_async().await;
        assert!(!is_error(&result));
        let rendered: serde_json::Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(rendered, body);
    }

    #[tokio::test]
    async fn test_execute_failure_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/predictions");
                then.status(403);
            })
            .await;

        let client = client_for(server.base_url());
        let params = GetPredictionsParams {
            fixture: "1".to_string(),
        };
        let result = GetPredictionsTool::execute(params, &client).await;

        assert!(is_error(&result));
        assert_eq!(
            result_text(&result),
            "Failed to get predictions: HTTP error! status: 403"
        );
    }
}
