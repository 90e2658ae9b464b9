//! Supported leagues resource definition.

use serde_json::{Value, json};

use super::ResourceDefinition;
use crate::domains::football::League;
use crate::domains::resources::service::ResourceContent;

/// The leagues accepted by the tools, with their provider ids (static).
pub struct LeaguesResource;

impl LeaguesResource {
    /// JSON document listing every supported league.
    pub fn document() -> Value {
        let leagues: Vec<Value> = League::ALL
            .iter()
            .map(|league| {
                json!({
                    "name": league.name(),
                    "id": league.provider_id(),
                })
            })
            .collect();

        json!({ "leagues": leagues })
    }
}

impl ResourceDefinition for LeaguesResource {
    const URI: &'static str = "football://leagues";
    const NAME: &'static str = "Supported Leagues";
    const DESCRIPTION: &'static str =
        "Leagues and competitions accepted by the tools, with their API-Football ids";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Text(Self::document().to_string())
    }
}
