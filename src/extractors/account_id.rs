//! Extract the account id from the `/accounts/:id` path segment.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::convert::Infallible;

/// Account id from the path. `id` is `None` when the segment cannot name an
/// account: not an integer, or not valid UTF-8 once percent-decoded. `raw`
/// keeps the segment for error messages.
#[derive(Clone, Debug)]
pub struct AccountId {
    pub raw: String,
    pub id: Option<i32>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => segment,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "unusable account id in path");
                parts.uri.path().rsplit('/').next().unwrap_or("").to_string()
            }
        };
        let id = raw.parse().ok();
        Ok(AccountId { raw, id })
    }
}
