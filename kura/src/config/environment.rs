//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `KURA_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use kura::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all `KURA_*` configuration variables and applies them with
    /// higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric duration, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // KURA_MAX_DURATION_DAYS
        if let Ok(val) = env::var("KURA_MAX_DURATION_DAYS") {
            let days: i64 = val.parse().map_err(|_| Error::Validation {
                field: "KURA_MAX_DURATION_DAYS".into(),
                message: "Must be a positive integer".into(),
            })?;
            if days <= 0 {
                return Err(Error::Validation {
                    field: "KURA_MAX_DURATION_DAYS".into(),
                    message: "Must be a positive integer".into(),
                });
            }
            config.max_duration_days = Some(days);
        }

        // KURA_MAXIMUM_LOCK_WAIT_SECONDS
        if let Ok(val) = env::var("KURA_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(val.parse().map_err(|_| Error::Validation {
                    field: "KURA_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        // KURA_OUTPUT_FORMAT
        if let Ok(val) = env::var("KURA_OUTPUT_FORMAT") {
            config.output_format =
                Some(val.parse::<OutputFormat>().map_err(|message| {
                    Error::Validation {
                        field: "KURA_OUTPUT_FORMAT".into(),
                        message,
                    }
                })?);
        }

        // KURA_DISABLE_AUTOINIT
        if let Ok(val) = env::var("KURA_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("KURA_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parses a boolean environment variable value.
    ///
    /// Accepts: "true"/"false", "1"/"0", "yes"/"no" (case-insensitive).
    fn parse_bool(var: &str, val: &str) -> Result<bool> {
        match val.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: var.into(),
                message: format!("Invalid boolean value: {val}"),
            }),
        }
    }
}
