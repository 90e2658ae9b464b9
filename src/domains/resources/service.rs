//! Lists registered resources and renders their content on read.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use serde_json::json;
use tracing::debug;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;

/// A registered resource: what `resources/list` shows and how to read it.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub resource: Resource,
    pub content: ResourceContent,
}

#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Rendered once at registration.
    Text(String),

    /// Rendered on every read from the live configuration.
    Dynamic(DynamicResourceType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    ServerInfo,
}

/// The `football://` resources, keyed by URI.
pub struct ResourceService {
    config: Arc<Config>,
    entries: BTreeMap<String, ResourceEntry>,
}

impl ResourceService {
    pub fn new(config: Arc<Config>) -> Self {
        let entries: BTreeMap<_, _> = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.clone(), entry))
            .collect();

        debug!(count = entries.len(), "Resources registered");
        Self { config, entries }
    }

    /// Resource metadata in URI order.
    pub fn list(&self) -> Vec<Resource> {
        self.entries.values().map(|e| e.resource.clone()).collect()
    }

    pub fn read(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .entries
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match &entry.content {
            ResourceContent::Text(text) => text.clone(),
            ResourceContent::Dynamic(DynamicResourceType::ServerInfo) => self.server_info()?,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }

    /// Server identity and upstream settings. The API key itself is never
    /// included, only whether one is set.
    fn server_info(&self) -> Result<String, ResourceError> {
        let football = &self.config.football;
        let info = json!({
            "server": self.config.server.name,
            "version": self.config.server.version,
            "api_base_url": football.base_url,
            "api_key_header": football.key_header,
            "api_key_configured": football.api_key.is_some(),
        });

        serde_json::to_string_pretty(&info).map_err(|e| ResourceError::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(Config::default()))
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_lists_both_resources_in_uri_order() {
        let uris: Vec<String> = service()
            .list()
            .into_iter()
            .map(|r| r.raw.uri)
            .collect();
        assert_eq!(uris, vec!["football://leagues", "football://server/info"]);
    }

    #[test]
    fn test_read_leagues() {
        let result = service().read("football://leagues").unwrap();
        let doc: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(doc["leagues"][0]["id"], 253);
        assert_eq!(doc["leagues"][1]["name"], "Club World Cup");
    }

    #[test]
    fn test_server_info_hides_key() {
        let mut config = Config::default();
        config.football.api_key = Some("secret".to_string());
        let service = ResourceService::new(Arc::new(config));

        let result = service.read("football://server/info").unwrap();
        let text = text_of(&result);
        assert!(!text.contains("secret"));

        let doc: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(doc["api_key_configured"], true);
        assert_eq!(doc["api_key_header"], "x-rapidapi-key");
        assert_eq!(doc["server"], "maestro");
    }

    #[test]
    fn test_unknown_uri() {
        let result = service().read("football://standings");
        assert!(matches!(result, Err(ResourceError::NotFound(uri)) if uri == "football://standings"));
    }
}
