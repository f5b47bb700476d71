//! Web Clipper service client implementation.

use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::transport::request;
use clipsweep_domain::{ListQuery, ResourceId, ResourcePage, ResourceService};
use reqwest::blocking::Client;
use reqwest::{Method, Url};
use std::time::Duration;

/// Default Web Clipper service port
pub const DEFAULT_PORT: u16 = 41184;

/// Default host of the Web Clipper service
pub const DEFAULT_HOST: &str = "localhost";

/// Default timeout per request (3 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Connection settings for [`ClipperClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL, e.g. `http://localhost:41184`
    pub base_url: String,

    /// Pre-issued access token
    pub token: String,

    /// Timeout applied to every request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Settings for a service on `localhost` at the given port
    pub fn localhost(port: u16, token: impl Into<String>) -> Self {
        Self::new(DEFAULT_HOST, port, token)
    }

    /// Settings for a service at `http://{host}:{port}`
    pub fn new(host: &str, port: u16, token: impl Into<String>) -> Self {
        Self {
            base_url: format!("http://{}:{}", host, port),
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the base URL (used to point the client at test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking client for the resource endpoints
///
/// One long-lived HTTP client is shared by every request; requests are
/// issued one at a time.
#[derive(Debug)]
pub struct ClipperClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl ClipperClient {
    /// Build a client
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the token is empty or the base URL
    /// is not a valid HTTP URL.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.token.trim().is_empty() {
            return Err(ClientError::Config("access token is empty".to_string()));
        }

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            token: config.token,
        })
    }

    /// URL for `segments` below the base, with the token and `query` appended
    fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        {
            // cannot_be_a_base was rejected in new()
            if let Ok(mut path) = url.path_segments_mut() {
                path.pop_if_empty().extend(segments);
            }
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("token", &self.token);
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Send a request and check the envelope for a service-reported error
    fn call(&self, method: Method, url: Url) -> Result<Envelope, ClientError> {
        request::<Envelope>(&self.http, method, url)?.into_result()
    }
}

impl ResourceService for ClipperClient {
    type Error = ClientError;

    /// `GET /resources?fields=id[,size]&order_by=id&limit=N&page=P`
    fn list_resources(&self, query: ListQuery) -> Result<ResourcePage, ClientError> {
        let fields = if query.with_sizes { "id,size" } else { "id" };
        let url = self.url(
            &["resources"],
            &[
                ("fields", fields.to_string()),
                ("order_by", "id".to_string()),
                ("limit", query.limit.to_string()),
                ("page", query.page.to_string()),
            ],
        );

        let envelope = self.call(Method::GET, url)?;
        let has_more = envelope.has_more;
        Ok(ResourcePage {
            resources: envelope.into_resources(),
            has_more,
        })
    }

    /// `GET /resources/{id}/notes?fields=id`
    fn referencing_notes(&self, id: &ResourceId) -> Result<Vec<String>, ClientError> {
        let url = self.url(
            &["resources", id.as_str(), "notes"],
            &[("fields", "id".to_string())],
        );

        let envelope = self.call(Method::GET, url)?;
        Ok(envelope.items.into_iter().map(|item| item.id).collect())
    }

    /// `DELETE /resources/{id}`
    fn delete_resource(&mut self, id: &ResourceId) -> Result<(), ClientError> {
        let url = self.url(&["resources", id.as_str()], &[]);
        self.call(Method::DELETE, url).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ClipperClient {
        ClipperClient::new(ClientConfig::localhost(DEFAULT_PORT, "secret")).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::localhost(DEFAULT_PORT, "t");
        assert_eq!(config.base_url, "http://localhost:41184");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = ClipperClient::new(ClientConfig::localhost(DEFAULT_PORT, "  ")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::localhost(DEFAULT_PORT, "t").with_base_url("not a url");
        assert!(matches!(ClipperClient::new(config), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_listing_url() {
        let url = client().url(
            &["resources"],
            &[("fields", "id,size".to_string()), ("page", "2".to_string())],
        );
        assert_eq!(
            url.as_str(),
            "http://localhost:41184/resources?token=secret&fields=id%2Csize&page=2"
        );
    }

    #[test]
    fn test_resource_path_is_escaped() {
        let url = client().url(&["resources", "a/b", "notes"], &[]);
        assert_eq!(url.path(), "/resources/a%2Fb/notes");
    }
}
