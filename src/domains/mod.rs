//! Domains module containing business logic organized by bounded contexts.
//!
//! - **football**: the API-Football client, parameter handling and statistics
//! - **tools**: MCP tools that can be executed by clients
//! - **resources**: Data resources that can be read by clients

pub mod football;
pub mod resources;
pub mod tools;
