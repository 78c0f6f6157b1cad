//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, and argument
//! parsing helpers.

use crate::error::CliError;
use chrono::NaiveDate;
use kura::{Config, ConfigBuilder, Database, DatabaseConfig, UserId};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Configuration files
/// 3. Built-in defaults (lowest priority)
///
/// When `--data-dir` is given, the config file is read from there instead
/// of the default location.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options.
pub fn resolve_database_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    // Priority: global option > default
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join("kura.db"));
    }

    // Default: ~/.kura/kura.db
    let home_dir = home::home_dir()
        .ok_or_else(|| CliError::Config("Could not determine home directory".to_string()))?;

    Ok(home_dir.join(".kura").join("kura.db"))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global)?;

    if !db_path.exists() && (global.disable_autoinit || !config.autoinit_enabled()) {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse an ISO-8601 date argument.
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, CliError> {
    value
        .parse()
        .map_err(|e| CliError::InvalidArguments(format!("{field}: {e}")))
}

/// Resolve a user argument that is either a numeric id or a username.
pub fn resolve_user(db: &Database, value: &str) -> Result<UserId, CliError> {
    if let Ok(id) = value.parse::<i64>() {
        return Ok(UserId::new(id));
    }

    let user = Database::get_user_by_username(db.connection(), value).map_err(CliError::from)?;
    let user = user.ok_or_else(|| CliError::Library(kura::Error::NotFound {
        resource: format!("user '{value}'"),
    }))?;
    user.id().ok_or_else(|| {
        CliError::Library(kura::Error::NotFound {
            resource: format!("user '{value}'"),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2025-06-01", "start").unwrap();
        assert_eq!(date.to_string(), "2025-06-01");

        let err = parse_date("June 1st", "start").unwrap_err();
        assert!(err.to_string().contains("start"));
    }

    #[test]
    fn test_resolve_database_path_with_data_dir() {
        let global = GlobalOptions {
            verbose: false,
            quiet: false,
            data_dir: Some(PathBuf::from("/tmp/kura-test")),
            busy_timeout: None,
            disable_autoinit: false,
        };
        let path = resolve_database_path(&global).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/kura-test/kura.db"));
    }
}
