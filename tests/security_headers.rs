//! Security headers, CORS and HTTPS redirect behavior.

mod common;

use account_service::{middleware::SECURITY_HEADERS, ServerConfig};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{account_payload, TestApp, TestResponse};

fn enforcing_app() -> TestApp {
    let mut config = ServerConfig::for_tests();
    config.force_https = true;
    TestApp::with_config(config)
}

fn over_https(method: &str, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "accounts.example.com")
        .header("x-forwarded-proto", "https")
}

fn assert_security_headers(resp: &TestResponse) {
    assert_eq!(resp.header("x-frame-options"), Some("SAMEORIGIN"));
    assert_eq!(resp.header("x-xss-protection"), Some("1; mode=block"));
    assert_eq!(resp.header("x-content-type-options"), Some("nosniff"));
    assert_eq!(
        resp.header("content-security-policy"),
        Some("default-src 'self'; object-src 'none'")
    );
    assert_eq!(
        resp.header("referrer-policy"),
        Some("strict-origin-when-cross-origin")
    );
}

#[tokio::test]
async fn https_responses_carry_security_headers() {
    let app = enforcing_app();
    let resp = app
        .send(over_https("GET", "/").body(Body::empty()).unwrap())
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_security_headers(&resp);
}

#[tokio::test]
async fn error_and_empty_responses_carry_security_headers() {
    let app = TestApp::new();
    assert_security_headers(&app.get("/accounts/31337").await);
    assert_security_headers(&app.get("/missing").await);
    assert_security_headers(&app.delete("/accounts/1").await);
    let created = app.post_json("/accounts", &account_payload(1)).await;
    assert_security_headers(&created);
}

#[test]
fn header_table_matches_documented_values() {
    assert_eq!(SECURITY_HEADERS.len(), 5);
    assert!(SECURITY_HEADERS
        .iter()
        .any(|(name, value)| *name == header::X_FRAME_OPTIONS && *value == "SAMEORIGIN"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = enforcing_app();
    let resp = app
        .send(
            over_https("GET", "/accounts")
                .header(header::ORIGIN, "https://elsewhere.example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let app = TestApp::new();
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/accounts")
        .header(header::ORIGIN, "https://elsewhere.example.org")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app.send(req).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn plain_http_is_redirected_when_enforced() {
    let app = enforcing_app();
    let req = Request::builder()
        .uri("/accounts?sort=none")
        .header(header::HOST, "accounts.example.com")
        .body(Body::empty())
        .unwrap();
    let resp = app.send(req).await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(
        resp.header("location"),
        Some("https://accounts.example.com/accounts?sort=none")
    );
    assert_security_headers(&resp);

    let req = Request::builder()
        .uri("/health")
        .header(header::HOST, "accounts.example.com")
        .header("x-forwarded-proto", "http")
        .body(Body::empty())
        .unwrap();
    assert_eq!(app.send(req).await.status, StatusCode::FOUND);
}

#[tokio::test]
async fn redirect_does_not_reach_the_store() {
    let app = enforcing_app();
    let req = Request::builder()
        .method("POST")
        .uri("/accounts")
        .header(header::HOST, "accounts.example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(account_payload(1).to_string()))
        .unwrap();
    assert_eq!(app.send(req).await.status, StatusCode::FOUND);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn plain_http_is_served_when_enforcement_is_off() {
    let app = TestApp::new();
    let resp = app.get("/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("location"), None);
}
