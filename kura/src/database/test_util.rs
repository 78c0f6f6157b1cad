//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{Space, User};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test user with a derived email address.
///
/// # Panics
///
/// Panics if the user cannot be created. This is acceptable in test code
/// where we want to fail fast.
#[must_use]
pub fn create_test_user(username: &str) -> User {
    User::new(username, format!("{username}@example.com")).unwrap()
}

/// Creates a test space with the given title and daily price.
///
/// Uses fixed values for the remaining fields.
///
/// # Panics
///
/// Panics if the space cannot be built. This is acceptable in test code
/// where we want to fail fast.
#[must_use]
pub fn create_test_space(title: &str, price_per_day: i64) -> Space {
    Space::builder()
        .owner("test-owner")
        .title(title)
        .address("1-1-1 Test-cho")
        .size_sqm(10.0)
        .price_per_day(price_per_day)
        .available_from("2025-01-01".parse().unwrap())
        .build()
        .unwrap()
}
