//! Common routes: home page, health, readiness.

use crate::handlers::fallback::method_not_allowed;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Account REST API Service";

#[derive(Serialize)]
struct IndexBody {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn index() -> Json<IndexBody> {
    Json(IndexBody {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "OK" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "OK",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

/// GET /, GET /health, GET /ready.
pub fn common_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/ready", get(ready).fallback(method_not_allowed))
}
