//! Error types for the clipsweep client.

use thiserror::Error;

/// Client operation errors
///
/// Endpoints are rendered as `METHOD /path` so the access token carried in
/// the query string never reaches logs or terminal output.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error (refused, DNS, reset)
    #[error("Connection error on {endpoint}: {message}")]
    Connection {
        /// Endpoint being called
        endpoint: String,
        /// Underlying error text
        message: String,
    },

    /// The request did not complete within the client timeout
    #[error("Request timed out: {endpoint}")]
    Timeout {
        /// Endpoint being called
        endpoint: String,
    },

    /// Any other HTTP-level failure
    #[error("HTTP error on {endpoint}: {message}")]
    Http {
        /// Endpoint being called
        endpoint: String,
        /// Underlying error text or status
        message: String,
    },

    /// The response body was not a valid envelope
    #[error("Invalid response from {endpoint}: {source}")]
    Decode {
        /// Endpoint being called
        endpoint: String,
        /// JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a non-empty `error` field
    #[error("Service error: {0}")]
    Service(String),

    /// Invalid client configuration (empty token, malformed URL)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Classify a reqwest failure for the given endpoint
    pub(crate) fn transport(endpoint: &str, e: reqwest::Error) -> Self {
        // reqwest includes the full URL (and with it the token) in its message
        let e = e.without_url();

        if e.is_timeout() {
            ClientError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else if e.is_connect() {
            ClientError::Connection {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        } else {
            ClientError::Http {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        }
    }

    /// Whether the failure was reported by the service rather than the transport
    pub fn is_service(&self) -> bool {
        matches!(self, ClientError::Service(_))
    }
}
