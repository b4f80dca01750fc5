//! Account CRUD routes. Unsupported verbs on either path answer with the 405 envelope.

use crate::handlers::account::{create, delete as delete_handler, list, read, update};
use crate::handlers::fallback::method_not_allowed;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts",
            get(list).post(create).fallback(method_not_allowed),
        )
        .route(
            "/accounts/:id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
}
