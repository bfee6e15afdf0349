//! Tests for the HTTP client

use super::*;
use crate::auth::TokenAuthenticator;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/customer-documents/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1}, {"id": 2}
        ])))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let response = client
        .get(&format!("{}/api/customer-documents/v1", mock_server.uri()))
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_base_url_joining() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ACME/api/customer-documents/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/ACME/api/", mock_server.uri()))
        .build();
    let client = HttpClient::with_config(config);

    // Leading and trailing slashes collapse to a single separator.
    let response = client.get("/customer-documents/v1").await.unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_query_params_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .and(query_param("page", "100"))
        .and(query_param("sort", "asc"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let config = RequestConfig::new()
        .query("page", "100")
        .query("sort", "asc")
        .header("Content-Type", "application/json");

    let response = client
        .get_with_config(&format!("{}/api/items", mock_server.uri()), config)
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_non_2xx_maps_to_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/forbidden"))
        .respond_with(ResponseTemplate::new(403).set_body_string("nope"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let err = client
        .get(&format!("{}/api/forbidden", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "nope");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    // Exactly one request: the client propagates instead of retrying.
    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let err = client
        .get(&format!("{}/api/flaky", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_timeout_maps_to_timeout_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let config = RequestConfig::new().timeout(Duration::from_millis(100));
    let err = client
        .get_with_config(&format!("{}/api/slow", mock_server.uri()), config)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }));
}

#[tokio::test]
async fn test_authenticated_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/t/as/connect/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "page-token"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .and(header("Authorization", "Bearer page-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let auth = TokenAuthenticator::with_token_url(
        "svc-extract",
        "hunter2",
        format!("{}/t/as/connect/token", mock_server.uri()),
    );
    let client = HttpClient::with_auth(HttpClientConfig::default(), auth);

    let response = client
        .get(&format!("{}/api/items", mock_server.uri()))
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[test]
fn test_default_config() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("cegid-connector/"));
}

#[test]
fn test_rate_limiter_wiring() {
    let config = HttpClientConfig::builder()
        .rate_limit(RateLimiterConfig::new(5, 5))
        .build();
    let client = HttpClient::with_config(config);
    assert!(client.has_rate_limiter());

    let client = HttpClient::new();
    assert!(!client.has_rate_limiter());
}
