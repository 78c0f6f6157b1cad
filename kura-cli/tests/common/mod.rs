//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with isolated data directories
//! - Command builder helpers for common patterns
//! - Fixture helpers that register users and spaces

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the kura data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created yet; kura will create it on
    /// first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("kura-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("kura").expect("Failed to find kura binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Register a user and return its id.
    pub fn add_user(&self, username: &str) -> i64 {
        let output = self
            .command()
            .arg("add-user")
            .arg("--username")
            .arg(username)
            .arg("--email")
            .arg(format!("{username}@example.com"))
            .output()
            .expect("Failed to run add-user command");

        assert!(
            output.status.success(),
            "add-user failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Register a space with fixed defaults and return its id.
    pub fn add_space(&self, title: &str, price_per_day: i64) -> i64 {
        let output = self
            .command()
            .arg("add-space")
            .arg("--owner")
            .arg("test-owner")
            .arg("--title")
            .arg(title)
            .arg("--address")
            .arg("1-1-1 Test-cho")
            .arg("--size-sqm")
            .arg("10.0")
            .arg("--price-per-day")
            .arg(price_per_day.to_string())
            .arg("--available-from")
            .arg("2025-01-01")
            .output()
            .expect("Failed to run add-space command");

        assert!(
            output.status.success(),
            "add-space failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Book a space and return the reservation id.
    pub fn book(&self, space: i64, user: &str, start: &str, end: &str) -> i64 {
        let output = self
            .command()
            .arg("book")
            .arg("--space")
            .arg(space.to_string())
            .arg("--user")
            .arg(user)
            .arg("--start")
            .arg(start)
            .arg("--end")
            .arg(end)
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// List all reservations and return stdout.
    pub fn list(&self) -> String {
        let output = self
            .command()
            .arg("list")
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "list failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to parse a record id from command output.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> i64 {
    output.trim().parse().expect("Output is not a valid id")
}
