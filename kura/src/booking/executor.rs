//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database.

use crate::database::Database;
use crate::error::Result;
use crate::reservation::ReservationId;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation that was created or updated (if applicable).
    ///
    /// For a dry-run of a create, the id is not yet assigned and this is
    /// `None`.
    pub reservation_id: Option<ReservationId>,

    /// The total price quoted for a created reservation (if applicable).
    pub total_price: Option<i64>,
}

impl ExecutionResult {
    /// Creates a successful execution result.
    fn success(plan: &OperationPlan, reservation_id: Option<ReservationId>) -> Self {
        Self {
            success: true,
            dry_run: false,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation_id,
            total_price: extract_total_price(plan),
        }
    }

    /// Creates a dry-run execution result.
    fn dry_run(plan: &OperationPlan) -> Self {
        Self {
            success: true,
            dry_run: true,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation_id: extract_existing_id(plan),
            total_price: extract_total_price(plan),
        }
    }
}

/// Extracts the quoted total from a plan's create action, if any.
fn extract_total_price(plan: &OperationPlan) -> Option<i64> {
    plan.actions.iter().find_map(|action| match action {
        PlanAction::CreateReservation(r) => Some(r.total_price()),
        PlanAction::UpdateStatus { .. } => None,
    })
}

/// Extracts an already-assigned reservation id from a plan, if any.
fn extract_existing_id(plan: &OperationPlan) -> Option<ReservationId> {
    plan.actions.iter().find_map(|action| match action {
        PlanAction::UpdateStatus { id, .. } => Some(*id),
        PlanAction::CreateReservation(_) => None,
    })
}

/// Executes operation plans against the database.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (validating without changes).
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
/// // Normal execution
/// let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
/// assert!(result.success);
///
/// // Dry-run execution
/// let result = PlanExecutor::new(&mut db).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(db: &'a mut Database) -> Self {
        Self { db, dry_run: false }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan but does not
    /// modify the database.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// If in dry-run mode, reports the plan but makes no database changes.
    /// Otherwise, applies all actions in the plan to the database.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute. In particular, a
    /// create action re-checks for conflicts atomically and fails with a
    /// booking conflict if another reservation landed on the same dates
    /// between planning and execution.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            return Ok(ExecutionResult::dry_run(plan));
        }

        let mut reservation_id = None;
        for action in &plan.actions {
            if let Some(id) = self.execute_action(action)? {
                reservation_id = Some(id);
            }
        }

        Ok(ExecutionResult::success(plan, reservation_id))
    }

    /// Executes a single action, returning the affected reservation id.
    fn execute_action(&mut self, action: &PlanAction) -> Result<Option<ReservationId>> {
        match action {
            PlanAction::CreateReservation(reservation) => {
                let id = self.db.insert_reservation_checked(reservation)?;
                Ok(Some(id))
            }
            PlanAction::UpdateStatus {
                id,
                status,
                payment_status,
            } => {
                self.db
                    .update_reservation_status(*id, *status, *payment_status)?;
                Ok(Some(*id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, create_test_space, create_test_user};
    use crate::reservation::{PaymentStatus, Reservation, ReservationStatus};
    use crate::{DateRange, SpaceId, UserId};

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    fn seed(db: &mut Database) -> (UserId, SpaceId) {
        let user = db.insert_user(&create_test_user("yamada")).unwrap();
        let space = db
            .insert_space(&create_test_space("Basement", 1000))
            .unwrap();
        (user, space)
    }

    #[test]
    fn test_execute_create_reservation() {
        let mut db = create_test_database();
        let (user, space) = seed(&mut db);
        let reservation = Reservation::new(space, user, range("2025-06-01", "2025-06-03"), 1000);

        let plan = OperationPlan::new("Test")
            .add_action(PlanAction::CreateReservation(reservation));

        let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
        assert!(result.success);
        assert!(!result.dry_run);
        assert_eq!(result.actions_taken.len(), 1);
        assert_eq!(result.total_price, Some(3000));

        let id = result.reservation_id.unwrap();
        let loaded = Database::get_reservation(db.connection(), id).unwrap();
        assert!(loaded.is_some());
    }

    #[test]
    fn test_execute_detects_race_conflict() {
        let mut db = create_test_database();
        let (user, space) = seed(&mut db);

        let plan = OperationPlan::new("Test").add_action(PlanAction::CreateReservation(
            Reservation::new(space, user, range("2025-06-01", "2025-06-03"), 1000),
        ));

        // A competing reservation lands after planning
        db.insert_reservation_checked(&Reservation::new(
            space,
            user,
            range("2025-06-02", "2025-06-05"),
            1000,
        ))
        .unwrap();

        let result = PlanExecutor::new(&mut db).execute(&plan);
        assert!(result.unwrap_err().is_conflict());
    }

    #[test]
    fn test_execute_update_status() {
        let mut db = create_test_database();
        let (user, space) = seed(&mut db);
        let id = db
            .insert_reservation_checked(&Reservation::new(
                space,
                user,
                range("2025-06-01", "2025-06-03"),
                1000,
            ))
            .unwrap();

        let plan = OperationPlan::new("Test").add_action(PlanAction::UpdateStatus {
            id,
            status: Some(ReservationStatus::Confirmed),
            payment_status: Some(PaymentStatus::Paid),
        });

        let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
        assert_eq!(result.reservation_id, Some(id));

        let loaded = Database::get_reservation(db.connection(), id)
            .unwrap()
            .unwrap();
        assert_eq!(loaded.status(), ReservationStatus::Confirmed);
        assert_eq!(loaded.payment_status(), PaymentStatus::Paid);
    }

    #[test]
    fn test_dry_run_does_not_modify_database() {
        let mut db = create_test_database();
        let (user, space) = seed(&mut db);

        let plan = OperationPlan::new("Test").add_action(PlanAction::CreateReservation(
            Reservation::new(space, user, range("2025-06-01", "2025-06-03"), 1000),
        ));

        let result = PlanExecutor::new(&mut db).dry_run().execute(&plan).unwrap();
        assert!(result.success);
        assert!(result.dry_run);
        assert!(result.reservation_id.is_none());
        assert_eq!(result.total_price, Some(3000));

        let all = Database::list_reservations(
            db.connection(),
            &crate::database::ReservationFilter::default(),
        )
        .unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn test_execution_result_includes_warnings() {
        let mut db = create_test_database();

        let plan = OperationPlan::new("Test")
            .add_warning("Warning 1")
            .add_warning("Warning 2");

        let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.warnings[0], "Warning 1");
    }
}
