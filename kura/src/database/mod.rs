//! Database layer for persistent storage of the reservation ledger.
//!
//! This module provides a SQLite-based storage layer for users, spaces,
//! and reservations, including connection management, schema versioning,
//! and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use kura::database::{Database, DatabaseConfig, ReservationFilter};
//! use kura::{DateRange, Reservation, Space, User};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/kura.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Register a user and a space
//! let user_id = db
//!     .insert_user(&User::new("yamada", "yamada@example.com").unwrap())
//!     .unwrap();
//! let space_id = db
//!     .insert_space(
//!         &Space::builder()
//!             .owner("storage-co")
//!             .title("Dry basement")
//!             .address("2-4-1 Marunouchi")
//!             .size_sqm(8.0)
//!             .price_per_day(1500)
//!             .available_from("2025-01-01".parse().unwrap())
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! // Book it, with the overlap check running atomically
//! let range = DateRange::parse("2025-06-01", "2025-06-10").unwrap();
//! let reservation = Reservation::new(space_id, user_id, range, 1500);
//! db.insert_reservation_checked(&reservation).unwrap();
//!
//! // List all reservations
//! let all = Database::list_reservations(db.connection(), &ReservationFilter::default()).unwrap();
//! for record in all {
//!     println!("{:?}", record);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;
pub use operations::{ReservationFilter, ReservationRecord};

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
