//! Wire schema for account payloads and required-field validation.

use crate::error::AppError;
use crate::model::AccountFields;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// Incoming JSON body for create and update. `id` and `date_joined` are
/// server-assigned; they are accepted so a serialized account can be echoed
/// back, but their values are discarded.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    #[serde(default, rename = "date_joined")]
    _date_joined: Option<IgnoredAny>,
}

pub struct RequestValidator;

impl RequestValidator {
    /// Decode a raw body. Malformed JSON, wrong field types and unknown
    /// fields are all validation failures.
    pub fn decode(bytes: &[u8]) -> Result<AccountRequest, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::Validation("request body is empty".into()));
        }
        serde_json::from_slice(bytes)
            .map_err(|e| AppError::Validation(format!("invalid account payload: {}", e)))
    }

    /// Every required field must be present and non-empty.
    pub fn validate(req: AccountRequest) -> Result<AccountFields, AppError> {
        Ok(AccountFields {
            name: required("name", req.name)?,
            email: required("email", req.email)?,
            address: required("address", req.address)?,
            phone_number: required("phone_number", req.phone_number)?,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(AppError::Validation(format!("{} must not be empty", field))),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}
