//! Booking operations with plan/execute separation.
//!
//! Operations are split into a planning phase that validates the request
//! and produces an [`OperationPlan`], and an execution phase that applies
//! the plan to the database. Plans can be inspected or reported without
//! being applied, which is how dry-run mode works.
//!
//! # Examples
//!
//! ```no_run
//! use kura::booking::{BookingPlan, BookingRequest, PlanExecutor};
//! use kura::config::ConfigBuilder;
//! use kura::database::{Database, DatabaseConfig};
//! use kura::{DateRange, SpaceId, UserId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/kura.db")).unwrap();
//! let config = ConfigBuilder::new().build().unwrap();
//!
//! let range = DateRange::parse("2025-06-01", "2025-06-10").unwrap();
//! let request = BookingRequest::new(SpaceId::new(1), UserId::new(2), range);
//! let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
//!
//! let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
//! println!("booked reservation {:?}", result.reservation_id);
//! ```

mod book;
mod executor;
mod plan;
mod status;

pub use book::{BookingPlan, BookingRequest};
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use status::{StatusPlan, StatusUpdate};
