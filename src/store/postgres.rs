//! PostgreSQL-backed account store.

use super::{not_found, AccountStore};
use crate::error::AppError;
use crate::model::{Account, AccountFields};
use async_trait::async_trait;
use sqlx::PgPool;

pub const ACCOUNTS_TABLE: &str = "accounts";

const COLUMNS: &str = "id, name, email, address, phone_number, date_joined";

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PgAccountStore { pool }
    }

    /// Create the accounts table if it does not exist yet. Call once at startup.
    pub async fn ensure_table(&self) -> Result<(), AppError> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id SERIAL PRIMARY KEY,
                name VARCHAR(64) NOT NULL,
                email VARCHAR(64) NOT NULL,
                address VARCHAR(256) NOT NULL,
                phone_number VARCHAR(32) NOT NULL,
                date_joined DATE NOT NULL DEFAULT CURRENT_DATE
            )
            "#,
            ACCOUNTS_TABLE
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }

    /// Remove every row. Used to isolate integration tests.
    pub async fn truncate(&self) -> Result<(), AppError> {
        sqlx::query(&format!("TRUNCATE {} RESTART IDENTITY", ACCOUNTS_TABLE))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, fields: AccountFields) -> Result<Account, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, email, address, phone_number) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            ACCOUNTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let mut tx = self.pool.begin().await?;
        let account: Account = sqlx::query_as(&sql)
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(&fields.address)
            .bind(&fields.phone_number)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(account)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let account = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(account)
    }

    async fn list_all(&self) -> Result<Vec<Account>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let accounts = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(accounts)
    }

    async fn update(&self, id: i32, fields: AccountFields) -> Result<Account, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $1, email = $2, address = $3, phone_number = $4 \
             WHERE id = $5 RETURNING {}",
            ACCOUNTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let mut tx = self.pool.begin().await?;
        let account: Option<Account> = sqlx::query_as(&sql)
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(&fields.address)
            .bind(&fields.phone_number)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let account = account.ok_or_else(|| not_found(id))?;
        tx.commit().await?;
        Ok(account)
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", ACCOUNTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        tracing::debug!(id, rows = result.rows_affected(), "account delete");
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
