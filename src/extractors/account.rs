//! Extract a validated account payload from the request body.

use crate::error::AppError;
use crate::model::AccountFields;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
};

/// The only accepted request media type for account bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Body extractor for create and update. The content type is checked before
/// the body is read, so a non-JSON request is 415 even when its body is valid JSON.
#[derive(Clone, Debug)]
pub struct JsonAccount(pub AccountFields);

#[async_trait]
impl<S> FromRequest<S> for JsonAccount
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers())?;
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(rejection.body_text())
            } else {
                AppError::Validation(rejection.body_text())
            }
        })?;
        let fields = RequestValidator::decode(&bytes).and_then(RequestValidator::validate)?;
        Ok(JsonAccount(fields))
    }
}

/// `application/json`, optionally followed by parameters such as `; charset=utf-8`.
pub fn check_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let essence = content_type.split(';').next().unwrap_or("").trim();
    if essence.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
        return Ok(());
    }
    let message = if content_type.is_empty() {
        format!("Content-Type must be {}", JSON_MEDIA_TYPE)
    } else {
        format!("Content-Type must be {}, got '{}'", JSON_MEDIA_TYPE, content_type)
    };
    Err(AppError::UnsupportedMediaType(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(ct: Option<&'static str>) -> HeaderMap {
        let mut h = HeaderMap::new();
        if let Some(ct) = ct {
            h.insert(header::CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        h
    }

    #[test]
    fn json_with_parameters_is_accepted() {
        assert!(check_content_type(&headers(Some("application/json"))).is_ok());
        assert!(check_content_type(&headers(Some("application/json; charset=utf-8"))).is_ok());
        assert!(check_content_type(&headers(Some("Application/JSON"))).is_ok());
    }

    #[test]
    fn other_media_types_are_rejected() {
        for ct in [Some("test/html"), Some("text/plain"), Some("application/jsonx"), None] {
            let err = check_content_type(&headers(ct)).unwrap_err();
            assert!(matches!(err, AppError::UnsupportedMediaType(_)), "{ct:?}");
        }
    }
}
