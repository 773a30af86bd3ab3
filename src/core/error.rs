//! Error types for server startup.
//!
//! Tool, resource and transport failures have their own enums in their
//! domains; this type covers what can fail while building the server.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing the server.
#[derive(Debug, Error)]
pub enum Error {
    /// The upstream HTTP client could not be built (TLS backend, settings).
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_build_failure_converts() {
        let err = reqwest::Client::builder()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();
        let err = Error::from(err);
        assert!(err.to_string().starts_with("failed to build HTTP client"));
    }
}
