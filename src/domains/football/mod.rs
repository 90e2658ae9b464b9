//! Football domain module.
//!
//! The layer between the MCP tools and the API-Football v3 service:
//!
//! - `params` - parameter bags and sanitization
//! - `client` - the HTTP dispatcher
//! - `error` - the dispatcher's result and error types
//! - `stats` - goal statistics aggregated from fixtures
//! - `league` - the closed set of supported leagues
//! - `types` - typed payloads

pub mod client;
mod error;
pub mod league;
pub mod params;
pub mod stats;
pub mod types;

pub use client::FootballClient;
pub use error::{ApiError, ApiResult};
pub use league::League;
pub use params::{ParamBag, ParamValue, sanitize};
pub use stats::{StatsError, TeamGoalStats, aggregate};
pub use types::{FixtureRecord, FixturesResponse};
