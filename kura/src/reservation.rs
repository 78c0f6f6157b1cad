//! Reservation records and their status domains.
//!
//! A reservation binds a user to a space over an inclusive date range,
//! together with the total price quoted at booking time and two
//! independent status fields. Lifecycle and payment status are free-form
//! within their domains: any value may be replaced by any other, so a
//! cancelled reservation can be revived by setting it back to pending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::error::{Error, Result};
use crate::space::SpaceId;
use crate::user::UserId;

/// A field-level validation failure raised while building a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A unique identifier for a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Creates a reservation id from its database row id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying row id.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a reservation.
///
/// New bookings start as [`Pending`](Self::Pending). Only
/// [`Cancelled`](Self::Cancelled) reservations are ignored by conflict
/// detection; the other three states all block the space.
///
/// # Examples
///
/// ```
/// use kura::ReservationStatus;
///
/// let status: ReservationStatus = "confirmed".parse().unwrap();
/// assert_eq!(status, ReservationStatus::Confirmed);
/// assert!(status.blocks_dates());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Awaiting confirmation by the space owner.
    Pending,
    /// Confirmed by the space owner.
    Confirmed,
    /// Cancelled; the dates are released.
    Cancelled,
    /// The stay has finished.
    Completed,
}

impl ReservationStatus {
    /// All valid lifecycle statuses, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    /// Returns the canonical lowercase string stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Whether a reservation in this status occupies its date range for
    /// conflict-detection purposes.
    #[must_use]
    pub const fn blocks_dates(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(Error::UnknownStatus {
                kind: "reservation".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment status of a reservation, tracked independently of lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment recorded.
    Unpaid,
    /// Payment recorded in full.
    Paid,
    /// Payment refunded.
    Refunded,
}

impl PaymentStatus {
    /// All valid payment statuses, in declaration order.
    pub const ALL: [Self; 3] = [Self::Unpaid, Self::Paid, Self::Refunded];

    /// Returns the canonical lowercase string stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unpaid" => Ok(Self::Unpaid),
            "paid" => Ok(Self::Paid),
            "refunded" => Ok(Self::Refunded),
            other => Err(Error::UnknownStatus {
                kind: "payment".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation of a space by a user over an inclusive date range.
///
/// # Examples
///
/// ```
/// use kura::{DateRange, Reservation, ReservationStatus, SpaceId, UserId};
///
/// let range = DateRange::parse("2025-06-01", "2025-06-10").unwrap();
/// let reservation = Reservation::new(SpaceId::new(1), UserId::new(2), range, 5000);
///
/// assert_eq!(reservation.status(), ReservationStatus::Pending);
/// assert_eq!(reservation.total_price(), 50_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: Option<ReservationId>,
    space_id: SpaceId,
    user_id: UserId,
    range: DateRange,
    total_price: i64,
    status: ReservationStatus,
    payment_status: PaymentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new unpersisted reservation with the default statuses.
    ///
    /// The total price is quoted immediately as
    /// `days_inclusive * price_per_day` and never recomputed, so later
    /// price changes on the space do not affect existing reservations.
    #[must_use]
    pub fn new(space_id: SpaceId, user_id: UserId, range: DateRange, price_per_day: i64) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            space_id,
            user_id,
            range,
            total_price: range.days_inclusive() * price_per_day,
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a reservation from persisted fields.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_row(
        id: ReservationId,
        space_id: SpaceId,
        user_id: UserId,
        range: DateRange,
        total_price: i64,
        status: ReservationStatus,
        payment_status: PaymentStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            space_id,
            user_id,
            range,
            total_price,
            status,
            payment_status,
            created_at,
            updated_at,
        }
    }

    /// Returns the row id, if this record has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<ReservationId> {
        self.id
    }

    /// Returns the reserved space.
    #[must_use]
    pub const fn space_id(&self) -> SpaceId {
        self.space_id
    }

    /// Returns the booking user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the reserved date range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the total price quoted at booking time.
    #[must_use]
    pub const fn total_price(&self) -> i64 {
        self.total_price
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the payment status.
    #[must_use]
    pub const fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the last status change, or the creation
    /// time if the reservation has never been updated.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether this reservation occupies its dates for conflict detection.
    #[must_use]
    pub const fn blocks_dates(&self) -> bool {
        self.status.blocks_dates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    #[test]
    fn test_new_reservation_defaults() {
        let r = Reservation::new(SpaceId::new(1), UserId::new(2), range("2025-06-01", "2025-06-03"), 1200);
        assert!(r.id().is_none());
        assert_eq!(r.status(), ReservationStatus::Pending);
        assert_eq!(r.payment_status(), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_total_price_counts_both_endpoints() {
        // 3 days inclusive at 1200/day
        let r = Reservation::new(SpaceId::new(1), UserId::new(2), range("2025-06-01", "2025-06-03"), 1200);
        assert_eq!(r.total_price(), 3600);
    }

    #[test]
    fn test_total_price_single_day() {
        let r = Reservation::new(SpaceId::new(1), UserId::new(2), range("2025-06-01", "2025-06-01"), 500);
        assert_eq!(r.total_price(), 500);
    }

    #[test]
    fn test_reservation_status_round_trip() {
        for status in ReservationStatus::ALL {
            let parsed: ReservationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_reservation_status_rejects_unknown() {
        let result = "archived".parse::<ReservationStatus>();
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("unknown reservation status"));
    }

    #[test]
    fn test_reservation_status_case_sensitive() {
        assert!("Pending".parse::<ReservationStatus>().is_err());
        assert!("CONFIRMED".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_payment_status_round_trip() {
        for status in PaymentStatus::ALL {
            let parsed: PaymentStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_payment_status_rejects_unknown() {
        let result = "partial".parse::<PaymentStatus>();
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("unknown payment status"));
    }

    #[test]
    fn test_only_cancelled_releases_dates() {
        assert!(ReservationStatus::Pending.blocks_dates());
        assert!(ReservationStatus::Confirmed.blocks_dates());
        assert!(ReservationStatus::Completed.blocks_dates());
        assert!(!ReservationStatus::Cancelled.blocks_dates());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let json = serde_json::to_string(&PaymentStatus::Refunded).unwrap();
        assert_eq!(json, "\"refunded\"");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            field: "title".to_string(),
            message: "must be non-empty".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "validation failed for 'title': must be non-empty"
        );
    }
}
