//! Process transports for the MCP server.
//!
//! | feature | transport |
//! |---------|-----------|
//! | `stdio` (default) | one session over stdin/stdout |
//! | `tcp` | line-delimited JSON-RPC, a session per connection |
//! | `http` | JSON-RPC over POST, via axum |
//!
//! `MCP_TRANSPORT` selects among the compiled-in transports at startup.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
