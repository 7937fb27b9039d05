//! Upstream Terra API error types.

use thiserror::Error;

/// Errors raised while talking to the Terra API or its documentation hosts.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// Network-level failure (connect, timeout, read).
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-success status.
    #[error("Terra API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was expected to be JSON but was not.
    #[error("Malformed response from Terra API: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A documentation chunk could not be fetched.
    #[error(
        "Failed to fetch documentation. Please check the URL or your network connection. (HTTP {status})"
    )]
    DocumentationUnavailable { status: u16 },

    /// The query parameters could not be encoded.
    #[error("Failed to encode query string: {0}")]
    Encoding(#[from] serde_urlencoded::ser::Error),
}

impl ApiError {
    /// Create a network error for the given URL.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }
}
