//! Plan types for booking operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::reservation::{PaymentStatus, Reservation, ReservationId, ReservationStatus};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation that will
/// be performed when the plan is executed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Create a new reservation, re-checking for conflicts atomically.
    CreateReservation(Reservation),

    /// Apply a partial status update to an existing reservation.
    UpdateStatus {
        /// The reservation to update.
        id: ReservationId,
        /// New lifecycle status, if changing.
        status: Option<ReservationStatus>,
        /// New payment status, if changing.
        payment_status: Option<PaymentStatus>,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateReservation(r) => {
                format!(
                    "Create reservation for user {} on space {} over {} ({} total)",
                    r.user_id(),
                    r.space_id(),
                    r.range(),
                    r.total_price()
                )
            }
            Self::UpdateStatus {
                id,
                status,
                payment_status,
            } => {
                let mut parts = Vec::new();
                if let Some(s) = status {
                    parts.push(format!("status -> {s}"));
                }
                if let Some(p) = payment_status {
                    parts.push(format!("payment -> {p}"));
                }
                format!("Update reservation {id}: {}", parts.join(", "))
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use kura::booking::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book space 3");
    /// assert_eq!(plan.description, "Book space 3");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use kura::booking::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test").add_warning("This is a warning");
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateRange, SpaceId, UserId};

    fn sample_reservation() -> Reservation {
        Reservation::new(
            SpaceId::new(1),
            UserId::new(2),
            DateRange::parse("2025-06-01", "2025-06-03").unwrap(),
            1000,
        )
    }

    #[test]
    fn test_plan_accumulates_actions_and_warnings() {
        let plan = OperationPlan::new("Test")
            .add_action(PlanAction::CreateReservation(sample_reservation()))
            .add_warning("heads up");

        assert_eq!(plan.len(), 1);
        assert!(!plan.is_empty());
        assert_eq!(plan.warnings, vec!["heads up".to_string()]);
    }

    #[test]
    fn test_create_action_description() {
        let action = PlanAction::CreateReservation(sample_reservation());
        let desc = action.description();
        assert!(desc.contains("space 1"));
        assert!(desc.contains("user 2"));
        assert!(desc.contains("2025-06-01..2025-06-03"));
        assert!(desc.contains("3000"));
    }

    #[test]
    fn test_update_status_description() {
        let action = PlanAction::UpdateStatus {
            id: ReservationId::new(7),
            status: Some(ReservationStatus::Confirmed),
            payment_status: Some(PaymentStatus::Paid),
        };
        let desc = action.description();
        assert!(desc.contains("reservation 7"));
        assert!(desc.contains("status -> confirmed"));
        assert!(desc.contains("payment -> paid"));
    }
}
