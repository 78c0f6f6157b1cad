//! Booking operation planning.
//!
//! This module implements the booking flow: validate the request, verify
//! the user and space exist, pre-check the requested range for conflicts,
//! quote the total price, and emit a plan that creates the reservation.
//!
//! The conflict pre-check here gives a friendly error at planning time;
//! the authoritative check runs again inside the insert transaction when
//! the plan is executed.

use chrono::Utc;

use crate::config::Config;
use crate::database::Database;
use crate::date_range::DateRange;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::space::SpaceId;
use crate::user::UserId;

use super::plan::{OperationPlan, PlanAction};

/// A booking request.
///
/// # Examples
///
/// ```
/// use kura::booking::BookingRequest;
/// use kura::{DateRange, SpaceId, UserId};
///
/// let range = DateRange::parse("2025-06-01", "2025-06-10").unwrap();
/// let request = BookingRequest::new(SpaceId::new(1), UserId::new(2), range);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BookingRequest {
    /// The space to reserve.
    pub space: SpaceId,
    /// The booking user.
    pub user: UserId,
    /// The requested inclusive date range.
    pub range: DateRange,
}

impl BookingRequest {
    /// Creates a new booking request.
    #[must_use]
    pub const fn new(space: SpaceId, user: UserId, range: DateRange) -> Self {
        Self { space, user, range }
    }
}

/// A booking plan generator.
///
/// This struct is responsible for analyzing a booking request and
/// generating a plan that describes what actions to take.
///
/// # Examples
///
/// ```no_run
/// use kura::booking::{BookingPlan, BookingRequest, PlanExecutor};
/// use kura::config::ConfigBuilder;
/// use kura::database::{Database, DatabaseConfig};
/// use kura::{DateRange, SpaceId, UserId};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/kura.db")).unwrap();
/// let config = ConfigBuilder::new().build().unwrap();
///
/// let range = DateRange::parse("2025-06-01", "2025-06-10").unwrap();
/// let request = BookingRequest::new(SpaceId::new(1), UserId::new(2), range);
/// let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
///
/// let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
/// assert!(result.success);
/// ```
pub struct BookingPlan<'a> {
    request: BookingRequest,
    config: &'a Config,
}

impl<'a> BookingPlan<'a> {
    /// Creates a new booking plan with the given request and config.
    #[must_use]
    pub const fn new(request: BookingRequest, config: &'a Config) -> Self {
        Self { request, config }
    }

    /// Builds the operation plan for this booking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested duration exceeds the configured cap
    /// - The user or space does not exist
    /// - The range overlaps a non-cancelled reservation on the space
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let range = self.request.range;

        let max_days = self.config.effective_max_duration_days();
        if range.days_inclusive() > max_days {
            return Err(Error::Validation {
                field: "duration".into(),
                message: format!(
                    "requested {} days exceeds the maximum of {max_days}",
                    range.days_inclusive()
                ),
            });
        }

        let conn = db.connection();
        Database::get_user(conn, self.request.user)?.ok_or_else(|| Error::NotFound {
            resource: format!("user {}", self.request.user),
        })?;
        let space =
            Database::get_space(conn, self.request.space)?.ok_or_else(|| Error::NotFound {
                resource: format!("space {}", self.request.space),
            })?;

        if let Some((id, conflict_range)) =
            Database::find_conflicting(conn, self.request.space, &range)?
        {
            return Err(Error::BookingConflict {
                details: format!(
                    "space {} is already reserved for {conflict_range} (reservation {id})",
                    self.request.space
                ),
            });
        }

        let mut plan = OperationPlan::new(format!(
            "Book space {} for user {} over {range}",
            self.request.space, self.request.user
        ));

        // The advertised window is informational; booking outside it is
        // allowed but worth flagging
        let outside_window = range.start() < space.available_from()
            || space
                .available_until()
                .is_some_and(|until| range.end() > until);
        if outside_window {
            plan = plan.add_warning(format!(
                "requested range {range} falls outside the advertised availability of space {}",
                self.request.space
            ));
        }

        if range.start() < Utc::now().date_naive() {
            plan = plan.add_warning(format!("requested range {range} starts in the past"));
        }

        let reservation = Reservation::new(
            self.request.space,
            self.request.user,
            range,
            space.price_per_day(),
        );
        Ok(plan.add_action(PlanAction::CreateReservation(reservation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, create_test_space, create_test_user};
    use crate::Space;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    fn default_config() -> Config {
        Config::default()
    }

    fn seed(db: &mut Database) -> (UserId, SpaceId) {
        let user = db.insert_user(&create_test_user("yamada")).unwrap();
        let space = db
            .insert_space(&create_test_space("Basement", 1200))
            .unwrap();
        (user, space)
    }

    #[test]
    fn test_build_plan_quotes_price() {
        let mut db = create_test_database();
        let (user, space) = seed(&mut db);
        let config = default_config();

        let request = BookingRequest::new(space, user, range("2025-06-01", "2025-06-03"));
        let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();

        assert_eq!(plan.len(), 1);
        match &plan.actions[0] {
            PlanAction::CreateReservation(r) => {
                // 3 inclusive days at 1200/day
                assert_eq!(r.total_price(), 3600);
                assert_eq!(r.space_id(), space);
                assert_eq!(r.user_id(), user);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_build_plan_unknown_user() {
        let mut db = create_test_database();
        let space = db
            .insert_space(&create_test_space("Basement", 1200))
            .unwrap();
        let config = default_config();

        let request = BookingRequest::new(space, UserId::new(99), range("2025-06-01", "2025-06-03"));
        let result = BookingPlan::new(request, &config).build_plan(&db);
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_build_plan_unknown_space() {
        let mut db = create_test_database();
        let user = db.insert_user(&create_test_user("yamada")).unwrap();
        let config = default_config();

        let request = BookingRequest::new(SpaceId::new(99), user, range("2025-06-01", "2025-06-03"));
        let result = BookingPlan::new(request, &config).build_plan(&db);
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_build_plan_duration_cap() {
        let mut db = create_test_database();
        let (user, space) = seed(&mut db);
        let config = Config {
            max_duration_days: Some(5),
            ..Default::default()
        };

        // 6 inclusive days against a cap of 5
        let request = BookingRequest::new(space, user, range("2025-06-01", "2025-06-06"));
        let result = BookingPlan::new(request, &config).build_plan(&db);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"));

        // Exactly at the cap is fine
        let request = BookingRequest::new(space, user, range("2025-06-01", "2025-06-05"));
        BookingPlan::new(request, &config).build_plan(&db).unwrap();
    }

    #[test]
    fn test_build_plan_conflict() {
        let mut db = create_test_database();
        let (user, space) = seed(&mut db);
        let config = default_config();

        let reservation = Reservation::new(space, user, range("2025-06-01", "2025-06-10"), 1200);
        db.insert_reservation_checked(&reservation).unwrap();

        let request = BookingRequest::new(space, user, range("2025-06-10", "2025-06-12"));
        let result = BookingPlan::new(request, &config).build_plan(&db);
        assert!(result.unwrap_err().is_conflict());
    }

    #[test]
    fn test_build_plan_warns_outside_window() {
        let mut db = create_test_database();
        let user = db.insert_user(&create_test_user("yamada")).unwrap();
        let space = db
            .insert_space(
                &Space::builder()
                    .owner("storage-co")
                    .title("Windowed")
                    .address("1-1-1")
                    .size_sqm(5.0)
                    .price_per_day(1000)
                    .available_from("2025-06-01".parse().unwrap())
                    .available_until("2025-06-30".parse().unwrap())
                    .build()
                    .unwrap(),
            )
            .unwrap();
        let config = default_config();

        // Ends past the advertised window, still plans successfully
        let request = BookingRequest::new(space, user, range("2025-06-25", "2025-07-05"));
        let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
        assert_eq!(plan.len(), 1);
        assert!(plan
            .warnings
            .iter()
            .any(|w| w.contains("advertised availability")));
    }

    #[test]
    fn test_build_plan_warns_past_start() {
        let mut db = create_test_database();
        let (user, space) = seed(&mut db);
        let config = default_config();

        let request = BookingRequest::new(space, user, range("2020-01-01", "2020-01-05"));
        let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
        assert!(plan.warnings.iter().any(|w| w.contains("in the past")));
    }
}
