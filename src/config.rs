//! Runtime configuration, read from the environment.
//!
//! A `.env` file in the working directory is loaded first if one exists.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_DB_PATH: &str = ".data/addressbook.db";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database file holding the saved book (`ADDRESSBOOK_FILE`).
    pub db_path: PathBuf,

    /// Log level used when `RUST_LOG` is not set (`LOG_LEVEL`).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESSBOOK_FILE`: database path (default: `.data/addressbook.db`)
    /// - `LOG_LEVEL`: one of trace/debug/info/warn/error (default: `warn`)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup("ADDRESSBOOK_FILE") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESSBOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_DB_PATH),
        };

        let log_level = lookup("LOG_LEVEL")
            .map(|l| l.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(Self { db_path, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
