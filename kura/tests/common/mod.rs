//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the kura library.

use kura::database::{Database, DatabaseConfig};
use kura::{Space, SpaceId, User, UserId};

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Opens a fresh database inside the given temp directory.
#[allow(dead_code)]
pub fn open_database(dir: &tempfile::TempDir) -> Database {
    let config = DatabaseConfig::new(dir.path().join("test.db"));
    Database::open(config).unwrap()
}

/// Inserts a user with a derived email and returns its id.
#[allow(dead_code)]
pub fn insert_user(db: &mut Database, username: &str) -> UserId {
    let user = User::new(username, format!("{username}@example.com")).unwrap();
    db.insert_user(&user).unwrap()
}

/// Inserts a space with fixed defaults and returns its id.
#[allow(dead_code)]
pub fn insert_space(db: &mut Database, title: &str, price_per_day: i64) -> SpaceId {
    let space = Space::builder()
        .owner("test-owner")
        .title(title)
        .address("1-1-1 Test-cho")
        .size_sqm(10.0)
        .price_per_day(price_per_day)
        .available_from("2025-01-01".parse().unwrap())
        .build()
        .unwrap();
    db.insert_space(&space).unwrap()
}
