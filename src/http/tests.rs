//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use crate::types::Method;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("resource-mediator/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.github.com")
        .timeout(Duration::from_secs(60))
        .header("Authorization", "token abc")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.github.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("Authorization"),
        Some(&"token abc".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_invalid_base_url_rejected() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    let result = HttpClient::with_config(config);
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("page", "1")
        .header("X-Request-Id", "abc123")
        .json(json!({"key": "value"}))
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query.get("page"), Some(&"1".to_string()));
    assert!(config.has_header("x-request-id"));
    assert!(!config.has_header("Accept"));
    assert!(config.body.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_raw_response_json() {
    let response = RawResponse::json_body(&json!({"id": 7}));
    assert_eq!(response.status, 200);
    assert_eq!(response.json().unwrap()["id"], 7);

    let empty = RawResponse::no_content();
    assert!(empty.is_no_content());
    assert!(empty.json().unwrap().is_null());

    let broken = RawResponse::new(200, "{oops");
    assert!(matches!(broken.json(), Err(Error::JsonParse(_))));
}

#[test]
fn test_raw_response_header() {
    let response = RawResponse::new(200, "[]").with_header("link", "<https://x/2>; rel=\"next\"");
    assert_eq!(response.header("link"), Some("<https://x/2>; rel=\"next\""));
    assert_eq!(response.header("etag"), None);
}

#[test]
fn test_build_url() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.github.com/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("/repos/acme/widget"),
        "https://api.github.com/repos/acme/widget"
    );
    assert_eq!(
        client.build_url("https://api.github.com/repos?page=2"),
        "https://api.github.com/repos?page=2"
    );
}

#[tokio::test]
async fn test_http_client_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "widget"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .get("repos/acme/widget", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.json().unwrap()["name"], "widget");
}

#[tokio::test]
async fn test_http_client_post() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/acme/widget/issues"))
        .and(body_json(json!({"title": "Broken"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"number": 1})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .post(
            "repos/acme/widget/issues",
            json!({"title": "Broken"}),
            RequestConfig::new(),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_http_client_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "test"))
        .and(header("X-API-Key", "secret123"))
        .and(header("X-Request-Id", "req-456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-API-Key", "secret123")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get(
            "search",
            RequestConfig::new()
                .query("q", "test")
                .header("X-Request-Id", "req-456"),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_http_client_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get("repos/acme/missing", RequestConfig::new())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_http_client_error_status_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("flaky", RequestConfig::new()).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_http_client_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/gists/1/star"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .delete("gists/1/star", RequestConfig::new())
        .await
        .unwrap();

    assert!(response.is_no_content());
}

#[tokio::test]
async fn test_dispatch_by_verb_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/user/following/octocat"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/user/following/octocat"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let put = client
        .dispatch("put", "user/following/octocat", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(put.status, 204);

    // Unknown verbs fall back to HEAD
    let head = client
        .dispatch("follow", "user/following/octocat", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(head.status, 204);
}

#[tokio::test]
async fn test_http_client_full_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .request(
            Method::GET,
            &format!("{}/api/test", mock_server.uri()),
            RequestConfig::new(),
        )
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("config"));
}
