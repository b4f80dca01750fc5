//! In-memory account store for tests and local development.

use super::{not_found, AccountStore};
use crate::error::AppError;
use crate::model::{Account, AccountFields};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemoryAccountStore {
    data: Arc<RwLock<MemoryStore>>,
}

#[derive(Default)]
struct MemoryStore {
    /// Keyed by id; ids are handed out in increasing order so iteration is insertion order.
    accounts: BTreeMap<i32, Account>,
    last_id: i32,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.data.read().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create(&self, fields: AccountFields) -> Result<Account, AppError> {
        let mut store = self.data.write().await;
        store.last_id += 1;
        let account = Account::from_fields(store.last_id, fields, Self::today());
        store.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>, AppError> {
        Ok(self.data.read().await.accounts.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.data.read().await.accounts.values().cloned().collect())
    }

    async fn update(&self, id: i32, fields: AccountFields) -> Result<Account, AppError> {
        let mut store = self.data.write().await;
        let account = store.accounts.get_mut(&id).ok_or_else(|| not_found(id))?;
        account.apply(fields);
        Ok(account.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.data.write().await.accounts.remove(&id);
        Ok(())
    }
}
