#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # kura
//!
//! A library for managing rental-space reservations.
//!
//! This library provides core types and functionality for listing storage
//! spaces, booking them over inclusive date ranges, and tracking the
//! lifecycle and payment status of each reservation.
//!
//! ## Core Types
//!
//! - [`DateRange`]: Inclusive calendar ranges with overlap detection
//! - [`User`], [`Space`], and [`Reservation`]: The marketplace records
//! - [`ReservationStatus`] and [`PaymentStatus`]: The two status domains
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use kura::DateRange;
//!
//! let a = DateRange::parse("2025-06-01", "2025-06-10").unwrap();
//! let b = DateRange::parse("2025-06-10", "2025-06-20").unwrap();
//!
//! // Inclusive bounds: sharing a single day is an overlap
//! assert!(a.overlaps(&b));
//! assert_eq!(a.days_inclusive(), 10);
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod date_range;
pub mod error;
pub mod logging;
pub mod output;
pub mod reservation;
pub mod seed;
pub mod space;
pub mod user;

// Re-export key types at crate root for convenience
pub use booking::{
    BookingPlan, BookingRequest, ExecutionResult, OperationPlan, PlanAction, PlanExecutor,
    StatusPlan, StatusUpdate,
};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, ReservationFilter, ReservationRecord};
pub use date_range::DateRange;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use reservation::{
    PaymentStatus, Reservation, ReservationId, ReservationStatus, ValidationError,
};
pub use seed::{seed_database, SeedSummary};
pub use space::{Space, SpaceBuilder, SpaceId};
pub use user::{User, UserId};
