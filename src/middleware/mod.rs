//! Cross-cutting request middleware.

mod security;

pub use security::{cors_layer, https_redirect, security_headers, SECURITY_HEADERS};

use crate::error::AppError;
use axum::response::{IntoResponse, Response};
use std::any::Any;

/// Turn a handler panic into the 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
