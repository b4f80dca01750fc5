//! Account CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{AccountId, JsonAccount};
use crate::model::Account;
use crate::state::AppState;
use crate::store::not_found;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// Path ids that cannot name an account are 404 rather than 400.
fn require_id(path: AccountId) -> Result<i32, AppError> {
    path.id.ok_or_else(|| not_found(path.raw))
}

pub async fn create(
    State(state): State<AppState>,
    JsonAccount(fields): JsonAccount,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("request to create an account");
    let account = state.store.create(fields).await?;
    let location = account.location();
    tracing::info!(id = account.id, "account created");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(account)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.store.list_all().await?;
    tracing::info!(count = accounts.len(), "listing accounts");
    Ok(Json(accounts))
}

pub async fn read(
    State(state): State<AppState>,
    path: AccountId,
) -> Result<Json<Account>, AppError> {
    let id = require_id(path)?;
    let account = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(account))
}

pub async fn update(
    State(state): State<AppState>,
    path: AccountId,
    JsonAccount(fields): JsonAccount,
) -> Result<Json<Account>, AppError> {
    let id = require_id(path)?;
    let account = state.store.update(id, fields).await?;
    tracing::info!(id, "account updated");
    Ok(Json(account))
}

pub async fn delete(
    State(state): State<AppState>,
    path: AccountId,
) -> Result<StatusCode, AppError> {
    // An id that cannot exist is already deleted.
    if let Some(id) = path.id {
        state.store.delete(id).await?;
        tracing::info!(id, "account deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
