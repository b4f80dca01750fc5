#![allow(dead_code)]

use account_service::{app, AppState, MemoryAccountStore, ServerConfig};
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: MemoryAccountStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_tests())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        let store = MemoryAccountStore::new();
        let state = AppState::new(Arc::new(store.clone()), config);
        TestApp {
            router: app(state),
            store,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(req).await.unwrap();
        TestResponse::from_response(response).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("PUT", uri, body)).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub async fn from_response(response: axum::response::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Deterministic stand-in for a generated account.
pub fn account_payload(n: usize) -> Value {
    json!({
        "name": format!("Account Holder {n}"),
        "email": format!("holder{n}@example.com"),
        "address": format!("{n} Market Street, Springfield"),
        "phone_number": format!("555-01{:02}", n % 100),
    })
}

/// Assert the error envelope shape and return its message.
pub fn assert_envelope(resp: &TestResponse, status: StatusCode) -> String {
    assert_eq!(resp.status, status, "body: {}", resp.body);
    assert_eq!(resp.body["status"], status.as_u16());
    let error = resp.body["error"].as_str().expect("error label");
    assert!(!error.is_empty());
    let message = resp.body["message"].as_str().expect("error message");
    assert!(!message.is_empty());
    message.to_string()
}
