//! Request validation for account payloads.

mod validation;
pub use validation::{AccountRequest, RequestValidator};
