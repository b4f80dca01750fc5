//! Account entity and its client-writable fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted account. `id` and `date_joined` are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

/// Validated, non-empty mutable fields of an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountFields {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
}

impl Account {
    pub fn from_fields(id: i32, fields: AccountFields, date_joined: NaiveDate) -> Self {
        Account {
            id,
            name: fields.name,
            email: fields.email,
            address: fields.address,
            phone_number: fields.phone_number,
            date_joined,
        }
    }

    /// Overwrite every mutable field, leaving `id` and `date_joined` untouched.
    pub fn apply(&mut self, fields: AccountFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.address = fields.address;
        self.phone_number = fields.phone_number;
    }

    pub fn location(&self) -> String {
        format!("/accounts/{}", self.id)
    }
}
