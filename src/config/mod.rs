//! Server settings read from the process environment.

use crate::error::ConfigError;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Redirect plain-HTTP requests to HTTPS. Off in test environments.
    pub force_https: bool,
    pub db_max_connections: u32,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Load from `DATABASE_URL` (or `DATABASE_URI`), `BIND_ADDR`, `FORCE_HTTPS`,
    /// `DB_MAX_CONNECTIONS` and `MAX_BODY_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DATABASE_URI"))
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), || {
            DEFAULT_BIND_ADDR.parse().ok()
        })?;
        let force_https = match lookup("FORCE_HTTPS") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
                key: "FORCE_HTTPS",
                value: v,
            })?,
            None => true,
        };
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), || {
            Some(DEFAULT_MAX_CONNECTIONS)
        })?;
        let max_body_bytes = parse_or("MAX_BODY_BYTES", lookup("MAX_BODY_BYTES"), || {
            Some(DEFAULT_MAX_BODY_BYTES)
        })?;

        Ok(ServerConfig {
            database_url,
            bind_addr,
            force_https,
            db_max_connections,
            max_body_bytes,
        })
    }

    /// Config for in-process tests: no HTTPS enforcement, no real database.
    pub fn for_tests() -> Self {
        ServerConfig {
            database_url: String::new(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            force_https: false,
            db_max_connections: 1,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    D: FnOnce() -> Option<T>,
{
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: v }),
        None => default().ok_or(ConfigError::Missing(key)),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
