//! Configuration management for the phonebook CLI.
//!
//! This module handles loading and validating configuration from environment
//! variables. All variables are optional and fall back to defaults, so a
//! plain `phonebook` invocation needs no setup.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the phonebook CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the binary database file (default: "phone_db.bin")
    pub db_path: PathBuf,

    /// Records shown per page by "show all" (default: 5)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_DB_PATH`: database file path (default: "phone_db.bin")
    /// - `PHONEBOOK_PAGE_SIZE`: records per "show all" page (default: 5)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Pick up a .env file if present, without failing when it's absent.
        let _ = dotenvy::dotenv();

        let db_path = env::var("PHONEBOOK_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("phone_db.bin"));

        let page_size = Self::parse_env_usize("PHONEBOOK_PAGE_SIZE", 5)?;

        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PHONEBOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            db_path,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from("phone_db.bin"),
            page_size: 5,
            log_level: "error".to_string(),
        }
    }
}
