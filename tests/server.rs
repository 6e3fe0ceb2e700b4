use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use listing_audit::config::ServerConfig;
use listing_audit::fetcher::FetchError;
use listing_audit::server::build_app;
use listing_audit::{AuditResponse, PageFetcher};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const LISTING: &str = include_str!("fixtures/listing.html");

struct FixtureFetcher;

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        Ok(LISTING.to_string())
    }
}

fn app() -> axum::Router {
    build_app(Arc::new(FixtureFetcher), &ServerConfig::default()).unwrap()
}

fn audit_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/audit")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_audit_endpoint_returns_response_shape() {
    let response = app()
        .oneshot(audit_request(r#"{"url":"https://vancouver.example.org/apa/1.html"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["price"], 1850);
    assert_eq!(json["neighborhood"], "2150 W 4th Ave");
    assert_eq!(json["scamScore"], 100);
    assert_eq!(json["transitScore"], 0);
    assert_eq!(json["wifiSpeed"], "N/A");
    assert!(json.get("error").is_none());

    let parsed: AuditResponse = serde_json::from_value(json).unwrap();
    assert!(parsed.description.starts_with("Bright one bedroom"));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let response = app().oneshot(audit_request(r#"{"link":1}"#)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"status":"ok"}"#);
}

#[tokio::test]
async fn test_cors_allows_configured_origin_only() {
    let preflight = |origin: &str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/audit")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app().oneshot(preflight("http://localhost:5173")).await.unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );

    let denied = app().oneshot(preflight("https://evil.example.com")).await.unwrap();
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[test]
fn test_invalid_origin_is_rejected() {
    let config = ServerConfig {
        allowed_origins: vec!["bad\norigin".to_string()],
        ..ServerConfig::default()
    };
    assert!(build_app(Arc::new(FixtureFetcher), &config).is_err());
}
