//! Integration tests for the clipsweep client against a mock Web Clipper service

use clipsweep_client::{ClientConfig, ClientError, ClipperClient, ResourceService};
use clipsweep_domain::{ListQuery, ResourceId};
use mockito::{Matcher, Server, ServerGuard};
use std::net::TcpListener;
use std::time::Duration;

const TOKEN: &str = "test-token";

fn client_for(server: &ServerGuard) -> ClipperClient {
    let config = ClientConfig::localhost(0, TOKEN).with_base_url(server.url());
    ClipperClient::new(config).unwrap()
}

#[test]
fn test_list_resources_sends_paging_parameters() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/resources")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), TOKEN.into()),
            Matcher::UrlEncoded("fields".into(), "id,size".into()),
            Matcher::UrlEncoded("order_by".into(), "id".into()),
            Matcher::UrlEncoded("limit".into(), "100".into()),
            Matcher::UrlEncoded("page".into(), "3".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items":[{"id":"r1","size":10},{"id":"r2","size":20}],"has_more":true}"#)
        .create();

    let client = client_for(&server);
    let query = ListQuery::first(100, true).next().next();
    let page = client.list_resources(query).unwrap();

    mock.assert();
    assert!(page.has_more);
    assert_eq!(page.resources.len(), 2);
    assert_eq!(page.resources[1].id, ResourceId::new("r2"));
    assert_eq!(page.resources[1].size, Some(20));
}

#[test]
fn test_list_resources_without_sizes() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/resources")
        .match_query(Matcher::UrlEncoded("fields".into(), "id".into()))
        .with_body(r#"{"items":[{"id":"r1"}],"has_more":false}"#)
        .create();

    let page = client_for(&server)
        .list_resources(ListQuery::first(100, false))
        .unwrap();

    mock.assert();
    assert!(!page.has_more);
    assert_eq!(page.resources[0].size, None);
}

#[test]
fn test_service_error_is_surfaced() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/resources")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error": "Invalid token", "items": [], "has_more": false}"#)
        .create();

    let err = client_for(&server)
        .list_resources(ListQuery::first(100, true))
        .unwrap_err();

    assert!(matches!(err, ClientError::Service(ref message) if message == "Invalid token"));
}

#[test]
fn test_referencing_notes() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/resources/abc123/notes")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), TOKEN.into()),
            Matcher::UrlEncoded("fields".into(), "id".into()),
        ]))
        .with_body(r#"{"items":[{"id":"note-1"},{"id":"note-2"}],"has_more":false}"#)
        .create();

    let notes = client_for(&server)
        .referencing_notes(&ResourceId::new("abc123"))
        .unwrap();

    mock.assert();
    assert_eq!(notes, vec!["note-1".to_string(), "note-2".to_string()]);
}

#[test]
fn test_delete_with_empty_body_succeeds() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/resources/abc123")
        .match_query(Matcher::UrlEncoded("token".into(), TOKEN.into()))
        .with_status(200)
        .with_body("")
        .create();

    let mut client = client_for(&server);
    client.delete_resource(&ResourceId::new("abc123")).unwrap();

    mock.assert();
}

#[test]
fn test_delete_with_error_body_fails() {
    let mut server = Server::new();
    let _m = server
        .mock("DELETE", "/resources/abc123")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error":"Resource is locked"}"#)
        .create();

    let mut client = client_for(&server);
    let err = client.delete_resource(&ResourceId::new("abc123")).unwrap_err();

    assert!(err.is_service());
    assert!(err.to_string().contains("Resource is locked"));
}

#[test]
fn test_error_status_with_empty_body_fails() {
    let mut server = Server::new();
    let _m = server
        .mock("DELETE", "/resources/gone")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();

    let mut client = client_for(&server);
    let err = client.delete_resource(&ResourceId::new("gone")).unwrap_err();

    assert!(matches!(err, ClientError::Http { .. }));
}

#[test]
fn test_malformed_body_is_decode_error() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/resources")
        .match_query(Matcher::Any)
        .with_body("<html>not json</html>")
        .create();

    let err = client_for(&server)
        .list_resources(ListQuery::first(100, true))
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode { ref endpoint, .. } if endpoint == "GET /resources"));
}

#[test]
fn test_connection_refused() {
    // Reserve a free port, then release it so nothing is listening there
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let config = ClientConfig::new("127.0.0.1", port, TOKEN);
    let client = ClipperClient::new(config).unwrap();
    let err = client.list_resources(ListQuery::first(100, true)).unwrap_err();

    assert!(matches!(err, ClientError::Connection { .. }));
    assert!(!err.to_string().contains(TOKEN));
}

#[test]
fn test_request_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    // Accept the connection and never answer
    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        std::thread::sleep(Duration::from_millis(1500));
        drop(stream);
    });

    let config = ClientConfig::new("127.0.0.1", port, TOKEN).with_timeout(Duration::from_millis(200));
    let client = ClipperClient::new(config).unwrap();
    let err = client.list_resources(ListQuery::first(100, true)).unwrap_err();

    assert!(matches!(err, ClientError::Timeout { .. }));
    handle.join().unwrap();
}
