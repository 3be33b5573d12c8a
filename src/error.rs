//! Error types for the demo web server

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a request or starting the server
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the request body failed mid-stream
    #[error("failed to read request body: {0}")]
    Body(String),

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Building an HTTP response failed
    #[error("failed to build response: {0}")]
    Http(#[from] hyper::http::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Listen address could not be parsed
    #[error("invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
