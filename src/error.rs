//! Error handling types and utilities.

/// A specialized Result type for docsearch operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned by a [`SearchTransport`](crate::transport::SearchTransport)
/// implementation.
///
/// Transport failures are deliberately recoverable: the coordinator logs them
/// and leaves the last rendered results untouched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// The request could not be issued or did not complete.
    #[error("search request failed: {0}")]
    Request(String),
    /// The remote answered with a body that does not match the documented envelope.
    #[error("malformed search response: {0}")]
    Response(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(error: serde_json::Error) -> Self {
        Self::Response(error.to_string())
    }
}
