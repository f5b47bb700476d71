//! Single request/response exchange with JSON decoding.

use crate::error::ClientError;
use reqwest::blocking::Client;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

/// Issue one request without a body and decode the JSON reply into `T`
///
/// The body is read in full before decoding, so the connection is returned
/// to the pool on every path. A blank body decodes to `T::default()` when
/// the status is a success; with an error status it is reported as
/// [`ClientError::Http`]. Nothing is retried.
pub(crate) fn request<T>(http: &Client, method: Method, url: Url) -> Result<T, ClientError>
where
    T: DeserializeOwned + Default,
{
    let endpoint = format!("{} {}", method, url.path());
    tracing::debug!(%endpoint, "sending request");

    let response = http
        .request(method, url)
        .send()
        .map_err(|e| ClientError::transport(&endpoint, e))?;

    let status = response.status();
    let body = response
        .bytes()
        .map_err(|e| ClientError::transport(&endpoint, e))?;

    tracing::debug!(%endpoint, %status, bytes = body.len(), "received response");

    if is_blank(&body) {
        if status.is_success() {
            return Ok(T::default());
        }
        return Err(ClientError::Http {
            endpoint,
            message: format!("HTTP {} with empty body", status),
        });
    }

    decode(&endpoint, &body)
}

/// Decode a non-blank body
fn decode<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|source| ClientError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Envelope;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(b""));
        assert!(is_blank(b" \r\n\t"));
        assert!(!is_blank(b"{}"));
    }

    #[test]
    fn test_decode_envelope() {
        let envelope: Envelope = decode("GET /resources", br#"{"items":[],"has_more":false}"#).unwrap();
        assert!(envelope.items.is_empty());
    }

    #[test]
    fn test_decode_failure_names_endpoint() {
        let err = decode::<Envelope>("DELETE /resources/a1", b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
        assert!(err.to_string().contains("DELETE /resources/a1"));
    }
}
