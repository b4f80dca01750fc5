//! Account persistence. Handlers depend on the [`AccountStore`] trait; the
//! binary injects [`PgAccountStore`], tests inject [`MemoryAccountStore`].

mod memory;
mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::{PgAccountStore, ACCOUNTS_TABLE};

use crate::error::AppError;
use crate::model::{Account, AccountFields};
use async_trait::async_trait;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account, assigning its id and join date.
    async fn create(&self, fields: AccountFields) -> Result<Account, AppError>;

    /// `None` when no account has this id.
    async fn find(&self, id: i32) -> Result<Option<Account>, AppError>;

    /// All accounts in insertion order.
    async fn list_all(&self) -> Result<Vec<Account>, AppError>;

    /// Overwrite the mutable fields. Fails with `NotFound` for an unknown id.
    async fn update(&self, id: i32, fields: AccountFields) -> Result<Account, AppError>;

    /// Remove the account if present. Deleting an unknown id succeeds.
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Backend reachability for the readiness probe.
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub(crate) fn not_found(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("Account with id [{}] could not be found.", id))
}
