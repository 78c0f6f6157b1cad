//! Status update planning.
//!
//! Status changes are partial updates: either the lifecycle status, the
//! payment status, or both. There is no enforced transition order within
//! a domain, but updates that re-block released dates are flagged with a
//! warning.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{PaymentStatus, ReservationId, ReservationStatus};

use super::plan::{OperationPlan, PlanAction};

/// A partial status update request.
///
/// # Examples
///
/// ```
/// use kura::booking::StatusUpdate;
/// use kura::{ReservationId, ReservationStatus};
///
/// let update = StatusUpdate::new(ReservationId::new(1))
///     .with_status(ReservationStatus::Confirmed);
/// assert!(update.payment_status.is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatusUpdate {
    /// The reservation to update.
    pub id: ReservationId,
    /// New lifecycle status, if changing.
    pub status: Option<ReservationStatus>,
    /// New payment status, if changing.
    pub payment_status: Option<PaymentStatus>,
}

impl StatusUpdate {
    /// Creates an empty update for the given reservation.
    #[must_use]
    pub const fn new(id: ReservationId) -> Self {
        Self {
            id,
            status: None,
            payment_status: None,
        }
    }

    /// Creates a cancellation update, optionally recording a refund.
    #[must_use]
    pub const fn cancel(id: ReservationId, refund: bool) -> Self {
        Self {
            id,
            status: Some(ReservationStatus::Cancelled),
            payment_status: if refund {
                Some(PaymentStatus::Refunded)
            } else {
                None
            },
        }
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the payment status.
    #[must_use]
    pub const fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = Some(payment_status);
        self
    }
}

/// A status update plan generator.
pub struct StatusPlan {
    update: StatusUpdate,
}

impl StatusPlan {
    /// Creates a new status plan for the given update.
    #[must_use]
    pub const fn new(update: StatusUpdate) -> Self {
        Self { update }
    }

    /// Builds the operation plan for this update.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither status field is set
    /// - The reservation does not exist
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let update = self.update;
        if update.status.is_none() && update.payment_status.is_none() {
            return Err(Error::Validation {
                field: "status".into(),
                message: "at least one of status or payment_status must be provided".into(),
            });
        }

        let existing = Database::get_reservation(db.connection(), update.id)?.ok_or_else(|| {
            Error::NotFound {
                resource: format!("reservation {}", update.id),
            }
        })?;

        let mut plan = OperationPlan::new(format!("Update reservation {}", update.id));

        // Reviving a cancelled reservation re-blocks its dates without an
        // overlap check, so surface that to the caller
        if let Some(new_status) = update.status {
            if !existing.status().blocks_dates() && new_status.blocks_dates() {
                plan = plan.add_warning(format!(
                    "reservation {} was cancelled; setting it to {new_status} blocks {} again without a conflict check",
                    update.id,
                    existing.range()
                ));
            }
        }

        Ok(plan.add_action(PlanAction::UpdateStatus {
            id: update.id,
            status: update.status,
            payment_status: update.payment_status,
        }))
    }
}
