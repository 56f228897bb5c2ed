// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment-driven configuration.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FUNROAD_BIND` | `0.0.0.0:3000` |
//! | `FUNROAD_ENV` | `development` |
//! | `FUNROAD_CATEGORIES_PATH` | unset (no categories) |
//! | `FUNROAD_BODY_LIMIT_BYTES` | `2097152` |
//! | `FUNROAD_LOG_JSON` | `false` |
//! | `FUNROAD_DB_NAME` | `multitennat_ecommerce` |
//! | `FUNROAD_DB_USER` | `app_user` |
//! | `FUNROAD_DB_PASSWORD` | `app_password` |

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default request body limit (2 MiB).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// A variable was set to something unusable.
#[derive(Debug, thiserror::Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    /// Variable name.
    pub key: &'static str,
    /// Raw value.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Application database credentials used by the bootstrap script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database name.
    pub name: String,
    /// Application user.
    pub user: String,
    /// Application user's password.
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: "multitennat_ecommerce".to_owned(),
            user: "app_user".to_owned(),
            password: "app_password".to_owned(),
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: SocketAddr,
    /// Deployment environment reported by the health endpoint.
    pub environment: String,
    /// JSON file holding the category "get many" document.
    pub categories_path: Option<PathBuf>,
    /// Maximum accepted request body.
    pub body_limit_bytes: usize,
    /// Emit logs as JSON lines.
    pub log_json: bool,
    /// Database bootstrap settings.
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            environment: "development".to_owned(),
            categories_path: None,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            log_json: false,
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        let db_defaults = defaults.database;

        let bind = match get("FUNROAD_BIND") {
            Some(raw) => raw.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError {
                key: "FUNROAD_BIND",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.bind,
        };
        let body_limit_bytes = match get("FUNROAD_BODY_LIMIT_BYTES") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError {
                        key: "FUNROAD_BODY_LIMIT_BYTES",
                        value: raw,
                        reason: "must be positive".to_owned(),
                    });
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError {
                        key: "FUNROAD_BODY_LIMIT_BYTES",
                        value: raw,
                        reason: e.to_string(),
                    });
                }
            },
            None => defaults.body_limit_bytes,
        };

        Ok(Self {
            bind,
            environment: get("FUNROAD_ENV").unwrap_or(defaults.environment),
            categories_path: get("FUNROAD_CATEGORIES_PATH").map(PathBuf::from),
            body_limit_bytes,
            log_json: get("FUNROAD_LOG_JSON")
                .map_or(defaults.log_json, |v| parse_bool(&v, defaults.log_json)),
            database: DatabaseConfig {
                name: get("FUNROAD_DB_NAME").unwrap_or(db_defaults.name),
                user: get("FUNROAD_DB_USER").unwrap_or(db_defaults.user),
                password: get("FUNROAD_DB_PASSWORD").unwrap_or(db_defaults.password),
            },
        })
    }
}

fn parse_bool(raw: &str, default: bool) -> bool {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => true,
        "0" | "false" | "FALSE" | "no" | "NO" => false,
        _ => default,
    }
}
