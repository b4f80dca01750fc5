//! Fallbacks for unmatched routes and unsupported verbs.

use crate::error::AppError;
use axum::http::{Method, Uri};

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("The requested URL {} was not found on the server.", uri.path()))
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!(
        "The method {} is not allowed for the requested URL {}.",
        method,
        uri.path()
    ))
}
