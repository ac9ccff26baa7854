//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables,
//! optionally seeded from a `.env` file.

use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default location of the persisted book.
pub const DEFAULT_BOOK_FILE: &str = "book.bin";

/// Configuration for the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Snapshot file the book is loaded from and saved to (default: "book.bin")
    pub book_file: PathBuf,

    /// Records per page when listing (default: 3)
    pub page_size: NonZeroUsize,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Snapshot file path (default: "book.bin")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page, must be positive (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which the prompt owns
        let _ = dotenvy::dotenv();

        let book_file = env::var("ADDRESS_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_FILE));

        if book_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_non_zero("ADDRESS_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_file,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as a positive integer with a default value.
    fn parse_env_non_zero(var_name: &str, default: NonZeroUsize) -> ConfigResult<NonZeroUsize> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidValue {
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
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "error".to_string(),
        }
    }
}
