//! HTTP client for the API-Football v3 service.
//!
//! [`FootballClient::fetch`] issues exactly one GET per call and converts
//! every failure into an [`ApiError`]:
//!
//! - transport failures (connect, DNS, body read) become `Transport`
//! - non-2xx statuses become `Status`, the body is not read
//! - bodies that do not decode into the requested type become `Decode`
//!
//! There is no retry, caching or rate limiting.

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::params::{ParamBag, sanitize};
use crate::core::config::FootballApiConfig;
use crate::core::{Error, Result};

/// Client for the football API.
///
/// Built once at startup from the immutable [`FootballApiConfig`] and shared
/// by every tool through an `Arc`.
#[derive(Debug, Clone)]
pub struct FootballClient {
    http: reqwest::Client,
    config: FootballApiConfig,
}

impl FootballClient {
    /// Create a new client for the configured API.
    pub fn new(config: FootballApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Whether an API key will be sent with requests.
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Build the full request URL for `path` and `params`.
    ///
    /// Absent parameters are removed before serialization. An empty query
    /// produces no `?` suffix.
    pub fn url_for(&self, path: &str, params: &ParamBag) -> ApiResult<String> {
        let query = sanitize(params).to_query_string()?;
        let base = self.config.base_url.trim_end_matches('/');

        if query.is_empty() {
            Ok(format!("{}{}", base, path))
        } else {
            Ok(format!("{}{}?{}", base, path, query))
        }
    }

    /// GET `path` with `params` and decode the JSON body as `T`.
    #[instrument(skip(self, params))]
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, params: &ParamBag) -> ApiResult<T> {
        let url = self.url_for(path, params)?;
        debug!("GET {}", url);

        let mut request = self.http.get(&url).header(ACCEPT, "application/json");
        if let Some(key) = &self.config.api_key {
            request = request.header(self.config.key_header.as_str(), key.as_str());
        }

        let response = request.send().await.map_err(|e| {
            warn!("Error making request to {}: {}", path, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} failed with status {}", path, status);
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read response body from {}: {}", path, e);
            ApiError::from(e)
        })?;

        debug!("Response received: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode response from {}: {}", path, e);
            ApiError::from(e)
        })
    }
}
