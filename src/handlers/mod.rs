//! HTTP handlers for account CRUD and fallback errors.

pub mod account;
pub mod fallback;
