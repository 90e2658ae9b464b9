//! Picks the transport from [`TransportConfig`] and hands it the server.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

/// Owns the selected transport settings until [`run`](Self::run).
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Name of the selected transport, e.g. `"tcp"`.
    pub fn kind(&self) -> &'static str {
        match &self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => "stdio",
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(_) => "tcp",
            #[cfg(feature = "http")]
            TransportConfig::Http(_) => "http",
        }
    }

    /// STDIO returns when the client closes the session. TCP and HTTP keep
    /// serving until binding or accepting fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(transport = self.kind(), "Serving on {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => super::stdio::StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(tcp) => super::tcp::TcpTransport::new(tcp).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(http) => super::http::HttpTransport::new(http).run(server).await,
        }
    }
}
