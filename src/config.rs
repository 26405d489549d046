//! Configuration management for vcard2fritz.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored if present; nothing is printed to stdout while loading it.

use crate::error::{ConfigError, ConfigResult};
use crate::phonebook::OutputOptions;
use std::env;

/// Configuration for the phonebook conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Omit `<email>` elements for contacts without an address (default: false)
    pub suppress_empty_email: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `FRITZ_SUPPRESS_EMPTY_EMAIL`: Omit empty email elements (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let suppress_empty_email = Self::parse_env_bool("FRITZ_SUPPRESS_EMPTY_EMAIL", false)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            suppress_empty_email,
            log_level,
        })
    }

    /// Options for the phonebook writer derived from this configuration.
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            suppress_empty: self.suppress_empty_email,
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            suppress_empty_email: false,
            log_level: "warn".to_string(),
        }
    }
}
