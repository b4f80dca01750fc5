//! Account service: REST CRUD for Account records over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Account, AccountFields};
pub use response::ErrorBody;
pub use routes::{account_routes, app, common_routes};
pub use state::AppState;
pub use store::{AccountStore, MemoryAccountStore, PgAccountStore};
