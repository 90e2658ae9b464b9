//! Soccer statistics MCP server.
//!
//! Exposes API-Football data (teams, fixtures, predictions, odds) and derived
//! goal statistics as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the rmcp server handler and transports
//! - **domains**: business logic
//!   - **football**: HTTP client, query parameters, payload types and goal aggregation
//!   - **tools**: the MCP tools, one definition per file
//!   - **resources**: read-only reference data for clients
//!
//! # Example
//!
//! ```rust,no_run
//! use soccer_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
