//! Router assembly: common and account routes behind the middleware stack.

mod account;
mod common;

pub use account::account_routes;
pub use common::{common_routes, SERVICE_NAME};

use crate::handlers::fallback::not_found;
use crate::middleware::{cors_layer, https_redirect, panic_response, security_headers};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Full application router. Layers run top to bottom on the way in, so
/// security headers wrap every response including redirects and panics.
/// The body cap is enforced by the body extractors, which answer with the 413 envelope.
pub fn app(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    Router::new()
        .merge(common_routes())
        .merge(account_routes())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(security_headers))
                .layer(cors_layer())
                .layer(middleware::from_fn_with_state(
                    state.config.clone(),
                    https_redirect,
                ))
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(state)
}
