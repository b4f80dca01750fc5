//! Security headers, HTTPS enforcement and CORS.

use crate::config::ServerConfig;
use crate::error::AppError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Set on every response, overriding anything a handler wrote.
pub const SECURITY_HEADERS: [(HeaderName, &str); 5] = [
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::X_XSS_PROTECTION, "1; mode=block"),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (
        header::CONTENT_SECURITY_POLICY,
        "default-src 'self'; object-src 'none'",
    ),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

const FORWARDED_PROTO: &str = "x-forwarded-proto";

pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}

/// Any origin may call the API.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Scheme of the original request. A terminating proxy reports it in
/// `X-Forwarded-Proto`; otherwise the request URI is consulted.
fn inbound_is_https(request: &Request) -> bool {
    if let Some(proto) = request
        .headers()
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
    {
        return proto
            .split(',')
            .next()
            .map(|p| p.trim().eq_ignore_ascii_case("https"))
            .unwrap_or(false);
    }
    request.uri().scheme_str() == Some("https")
}

/// Redirect plain-HTTP requests to the same URL over HTTPS when `force_https` is on.
pub async fn https_redirect(
    State(config): State<Arc<ServerConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if !config.force_https || inbound_is_https(&request) {
        return next.run(request).await;
    }
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .or_else(|| request.uri().authority().map(|a| a.to_string()));
    let Some(host) = host else {
        return AppError::Validation("cannot redirect to HTTPS without a Host header".into())
            .into_response();
    };
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let target = format!("https://{}{}", host, path);
    tracing::debug!(target = %target, "redirecting to https");
    match HeaderValue::from_str(&target) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(_) => AppError::Validation("invalid Host header".into()).into_response(),
    }
}
