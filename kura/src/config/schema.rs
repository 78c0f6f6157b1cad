//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for kura.
//! All fields are optional; unset fields fall back to built-in defaults
//! via the `effective_*` accessors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Default cap on booking length, in inclusive days.
pub const DEFAULT_MAX_DURATION_DAYS: i64 = 365;

/// Default maximum time to wait for a database lock, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// This represents the full configuration schema for kura, merged from
/// the user config file and `KURA_*` environment variables.
///
/// # Examples
///
/// ```
/// use kura::config::Config;
///
/// let config = Config {
///     max_duration_days: Some(30),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_max_duration_days(), 30);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum booking length in inclusive days.
    pub max_duration_days: Option<i64>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Overlays another configuration onto this one.
    ///
    /// Fields set in `other` take precedence; unset fields keep the
    /// current value.
    pub fn merge_from(&mut self, other: Config) {
        if other.max_duration_days.is_some() {
            self.max_duration_days = other.max_duration_days;
        }
        if other.maximum_lock_wait_seconds.is_some() {
            self.maximum_lock_wait_seconds = other.maximum_lock_wait_seconds;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.disable_autoinit.is_some() {
            self.disable_autoinit = other.disable_autoinit;
        }
    }

    /// Returns the booking length cap, applying the default if unset.
    #[must_use]
    pub fn effective_max_duration_days(&self) -> i64 {
        self.max_duration_days.unwrap_or(DEFAULT_MAX_DURATION_DAYS)
    }

    /// Returns the maximum lock wait, applying the default if unset.
    #[must_use]
    pub fn effective_lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Returns the output format, applying the default if unset.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Human)
    }

    /// Whether a missing database may be created automatically.
    #[must_use]
    pub fn autoinit_enabled(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.effective_max_duration_days(),
            DEFAULT_MAX_DURATION_DAYS
        );
        assert_eq!(
            config.effective_lock_wait(),
            Duration::from_secs(DEFAULT_LOCK_WAIT_SECONDS)
        );
        assert_eq!(config.effective_output_format(), OutputFormat::Human);
        assert!(config.autoinit_enabled());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "max_duration_days: 30\noutput_format: json\ndisable_autoinit: true\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.max_duration_days, Some(30));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert!(!config.autoinit_enabled());
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let yaml = "max_duration_days: 30\nno_such_field: 1\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_merge_from() {
        let mut base = Config {
            max_duration_days: Some(30),
            maximum_lock_wait_seconds: Some(10),
            ..Default::default()
        };
        base.merge_from(Config {
            max_duration_days: Some(60),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        });

        assert_eq!(base.max_duration_days, Some(60));
        // Untouched by the overlay
        assert_eq!(base.maximum_lock_wait_seconds, Some(10));
        assert_eq!(base.output_format, Some(OutputFormat::Json));
    }
}
