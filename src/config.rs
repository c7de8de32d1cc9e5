//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use crate::services::{DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};
use std::env;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead (inclusive) that count as "upcoming" (default: 7)
    pub birthday_horizon_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_HORIZON_DAYS`: Upcoming-birthday horizon in days (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let birthday_horizon_days =
            Self::parse_env_u32("BIRTHDAY_HORIZON_DAYS", DEFAULT_HORIZON_DAYS)?;

        if birthday_horizon_days > MAX_HORIZON_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_HORIZON_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_horizon_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_horizon_days: DEFAULT_HORIZON_DAYS,
            log_level: "error".to_string(),
        }
    }
}
