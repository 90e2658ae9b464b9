//! Errors raised while starting or running a transport.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures of the process-level transports.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listener could not be bound.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP handshake over the transport failed.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// The running MCP service stopped with an error.
    #[error("Service error: {0}")]
    Service(String),

    /// The HTTP server stopped with an error.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = TransportError::bind("127.0.0.1:3000", io);
        assert_eq!(
            err.to_string(),
            "Failed to bind to 127.0.0.1:3000: address in use"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_message_variants() {
        assert_eq!(
            TransportError::init("handshake").to_string(),
            "Server initialization error: handshake"
        );
        assert_eq!(
            TransportError::service("closed").to_string(),
            "Service error: closed"
        );
        assert_eq!(TransportError::http("boom").to_string(), "HTTP error: boom");
    }
}
