//! Database CRUD operations for users, spaces, and reservations.
//!
//! This module implements all create, read, update, and delete operations
//! for the reservation system, including the conflict-checked reservation
//! insert that keeps double bookings out of the ledger.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use serde::Serialize;

use crate::date_range::DateRange;
use crate::error::{Error, Result};
use crate::reservation::{PaymentStatus, Reservation, ReservationId, ReservationStatus};
use crate::space::{Space, SpaceId};
use crate::user::{User, UserId};

use super::connection::Database;
use super::schema::{COUNT_OVERLAPPING, INSERT_RESERVATION, SELECT_FIRST_OVERLAPPING};

/// Converts Unix epoch seconds from the database to a UTC timestamp.
fn unix_secs_to_datetime(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Integer,
            format!("timestamp {secs} out of range").into(),
        )
    })
}

/// Parses an ISO-8601 date column.
fn parse_date_column(idx: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    value.parse::<NaiveDate>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Helper function to deserialize a user from a database row.
///
/// Expects row fields in this order: id, username, email, `created_at`
fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let id: i64 = row.get(0)?;
    let username: String = row.get(1)?;
    let email: String = row.get(2)?;
    let created_secs: i64 = row.get(3)?;

    Ok(User::from_row(
        UserId::new(id),
        username,
        email,
        unix_secs_to_datetime(created_secs)?,
    ))
}

/// Helper function to deserialize a space from a database row.
///
/// Expects row fields in this order: id, owner, title, description,
/// address, `size_sqm`, `price_per_day`, `available_from`,
/// `available_until`, `created_at`
fn row_to_space(row: &rusqlite::Row<'_>) -> rusqlite::Result<Space> {
    let id: i64 = row.get(0)?;
    let owner: String = row.get(1)?;
    let title: String = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let address: String = row.get(4)?;
    let size_sqm: f64 = row.get(5)?;
    let price_per_day: i64 = row.get(6)?;
    let available_from: String = row.get(7)?;
    let available_until: Option<String> = row.get(8)?;
    let created_secs: i64 = row.get(9)?;

    let available_from = parse_date_column(7, &available_from)?;
    let available_until = available_until
        .as_deref()
        .map(|v| parse_date_column(8, v))
        .transpose()?;

    Ok(Space::from_row(
        SpaceId::new(id),
        owner,
        title,
        description,
        address,
        size_sqm,
        price_per_day,
        available_from,
        available_until,
        unix_secs_to_datetime(created_secs)?,
    ))
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: id, `space_id`, `user_id`,
/// `start_date`, `end_date`, `total_price`, status, `payment_status`,
/// `created_at`, `updated_at`
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let space_id: i64 = row.get(1)?;
    let user_id: i64 = row.get(2)?;
    let start_date: String = row.get(3)?;
    let end_date: String = row.get(4)?;
    let total_price: i64 = row.get(5)?;
    let status: String = row.get(6)?;
    let payment_status: String = row.get(7)?;
    let created_secs: i64 = row.get(8)?;
    let updated_secs: i64 = row.get(9)?;

    let range = DateRange::new(
        parse_date_column(3, &start_date)?,
        parse_date_column(4, &end_date)?,
    )
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e)))?;

    let status = status
        .parse::<ReservationStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e)))?;
    let payment_status = payment_status
        .parse::<PaymentStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e)))?;

    Ok(Reservation::from_row(
        ReservationId::new(id),
        SpaceId::new(space_id),
        UserId::new(user_id),
        range,
        total_price,
        status,
        payment_status,
        unix_secs_to_datetime(created_secs)?,
        unix_secs_to_datetime(updated_secs)?,
    ))
}

// SQL statements for CRUD operations
const INSERT_USER: &str = r"
    INSERT INTO users (username, email, created_at)
    VALUES (?, ?, ?)
";

const SELECT_USER: &str = r"
    SELECT id, username, email, created_at
    FROM users
    WHERE id = ?
";

const SELECT_USER_BY_USERNAME: &str = r"
    SELECT id, username, email, created_at
    FROM users
    WHERE username = ?
";

const LIST_USERS: &str = r"
    SELECT id, username, email, created_at
    FROM users
    ORDER BY username
";

const INSERT_SPACE: &str = r"
    INSERT INTO spaces
    (owner, title, description, address, size_sqm, price_per_day,
     available_from, available_until, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_SPACE: &str = r"
    SELECT id, owner, title, description, address, size_sqm, price_per_day,
           available_from, available_until, created_at
    FROM spaces
    WHERE id = ?
";

const LIST_SPACES: &str = r"
    SELECT id, owner, title, description, address, size_sqm, price_per_day,
           available_from, available_until, created_at
    FROM spaces
    ORDER BY id
";

const SELECT_RESERVATION: &str = r"
    SELECT id, space_id, user_id, start_date, end_date, total_price,
           status, payment_status, created_at, updated_at
    FROM reservations
    WHERE id = ?
";

const LIST_RESERVATIONS: &str = r"
    SELECT r.id, r.space_id, r.user_id, r.start_date, r.end_date,
           r.total_price, r.status, r.payment_status, r.created_at,
           r.updated_at, u.username, s.title
    FROM reservations r
    JOIN users u ON u.id = r.user_id
    JOIN spaces s ON s.id = r.space_id
    WHERE (?1 IS NULL OR r.user_id = ?1)
      AND (?2 IS NULL OR r.space_id = ?2)
    ORDER BY r.start_date, r.id
";

/// Filter criteria for listing reservations.
///
/// Empty filters match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationFilter {
    /// Only include reservations made by this user.
    pub user: Option<UserId>,
    /// Only include reservations for this space.
    pub space: Option<SpaceId>,
}

impl ReservationFilter {
    /// Restricts the filter to a single user.
    #[must_use]
    pub const fn for_user(mut self, user: UserId) -> Self {
        self.user = Some(user);
        self
    }

    /// Restricts the filter to a single space.
    #[must_use]
    pub const fn for_space(mut self, space: SpaceId) -> Self {
        self.space = Some(space);
        self
    }
}

/// A reservation joined with the display fields of its user and space.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationRecord {
    /// The reservation itself.
    #[serde(flatten)]
    pub reservation: Reservation,
    /// Username of the booking user.
    pub username: String,
    /// Title of the reserved space.
    pub space_title: String,
}

impl Database {
    /// Inserts a user and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the username is already taken, or a
    /// database error if the insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kura::database::{Database, DatabaseConfig};
    /// use kura::User;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/kura.db")).unwrap();
    /// let user = User::new("yamada", "yamada@example.com").unwrap();
    /// let id = db.insert_user(&user).unwrap();
    /// ```
    pub fn insert_user(&mut self, user: &User) -> Result<UserId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let result = tx.execute(
            INSERT_USER,
            params![user.username(), user.email(), user.created_at().timestamp()],
        );
        if let Err(e) = result {
            if is_constraint_violation(&e) {
                return Err(Error::Validation {
                    field: "username".into(),
                    message: format!("username '{}' is already taken", user.username()),
                });
            }
            return Err(e.into());
        }

        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(UserId::new(id))
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
        conn.query_row(SELECT_USER, params![id.value()], row_to_user)
            .optional()
            .map_err(Into::into)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
        conn.query_row(SELECT_USER_BY_USERNAME, params![username], row_to_user)
            .optional()
            .map_err(Into::into)
    }

    /// Lists all users, ordered by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
        let mut stmt = conn.prepare(LIST_USERS)?;
        let users = stmt
            .query_map([], row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }

    /// Inserts a space listing and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_space(&mut self, space: &Space) -> Result<SpaceId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            INSERT_SPACE,
            params![
                space.owner(),
                space.title(),
                space.description(),
                space.address(),
                space.size_sqm(),
                space.price_per_day(),
                space.available_from().to_string(),
                space.available_until().map(|d| d.to_string()),
                space.created_at().timestamp(),
            ],
        )?;

        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(SpaceId::new(id))
    }

    /// Retrieves a space by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_space(conn: &Connection, id: SpaceId) -> Result<Option<Space>> {
        conn.query_row(SELECT_SPACE, params![id.value()], row_to_space)
            .optional()
            .map_err(Into::into)
    }

    /// Lists all space listings, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_spaces(conn: &Connection) -> Result<Vec<Space>> {
        let mut stmt = conn.prepare(LIST_SPACES)?;
        let spaces = stmt
            .query_map([], row_to_space)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(spaces)
    }

    /// Counts reservations on a space that overlap the given range.
    ///
    /// Cancelled reservations release their dates and are not counted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_overlapping(conn: &Connection, space: SpaceId, range: &DateRange) -> Result<i64> {
        let count = conn.query_row(
            COUNT_OVERLAPPING,
            params![
                space.value(),
                range.end().to_string(),
                range.start().to_string()
            ],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Finds the earliest-starting reservation that overlaps the given range.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_conflicting(
        conn: &Connection,
        space: SpaceId,
        range: &DateRange,
    ) -> Result<Option<(ReservationId, DateRange)>> {
        conn.query_row(
            SELECT_FIRST_OVERLAPPING,
            params![
                space.value(),
                range.end().to_string(),
                range.start().to_string()
            ],
            |row| {
                let id: i64 = row.get(0)?;
                let start: String = row.get(1)?;
                let end: String = row.get(2)?;
                let range = DateRange::new(
                    parse_date_column(1, &start)?,
                    parse_date_column(2, &end)?,
                )
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        1,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;
                Ok((ReservationId::new(id), range))
            },
        )
        .optional()
        .map_err(Into::into)
    }

    /// Inserts a reservation after re-checking for conflicts, atomically.
    ///
    /// The overlap check and the insert run inside a single IMMEDIATE
    /// transaction, so a reservation committed by another process between
    /// the caller's availability check and this call is still detected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BookingConflict`] if a non-cancelled reservation on
    /// the same space overlaps the requested range, or a database error if
    /// the transaction fails.
    pub fn insert_reservation_checked(
        &mut self,
        reservation: &Reservation,
    ) -> Result<ReservationId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let range = reservation.range();
        let conflict = tx
            .query_row(
                SELECT_FIRST_OVERLAPPING,
                params![
                    reservation.space_id().value(),
                    range.end().to_string(),
                    range.start().to_string()
                ],
                |row| {
                    let id: i64 = row.get(0)?;
                    let start: String = row.get(1)?;
                    let end: String = row.get(2)?;
                    Ok((id, start, end))
                },
            )
            .optional()?;

        if let Some((id, start, end)) = conflict {
            return Err(Error::BookingConflict {
                details: format!(
                    "space {} is already reserved for {start}..{end} (reservation {id})",
                    reservation.space_id()
                ),
            });
        }

        tx.execute(
            INSERT_RESERVATION,
            params![
                reservation.space_id().value(),
                reservation.user_id().value(),
                range.start().to_string(),
                range.end().to_string(),
                reservation.total_price(),
                reservation.status().as_str(),
                reservation.payment_status().as_str(),
                reservation.created_at().timestamp(),
                reservation.updated_at().timestamp(),
            ],
        )?;

        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(ReservationId::new(id))
    }

    /// Retrieves a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        conn.query_row(SELECT_RESERVATION, params![id.value()], row_to_reservation)
            .optional()
            .map_err(Into::into)
    }

    /// Lists reservations matching the filter, joined with display fields.
    ///
    /// Results are ordered by start date, then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_reservations(
        conn: &Connection,
        filter: &ReservationFilter,
    ) -> Result<Vec<ReservationRecord>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let records = stmt
            .query_map(
                params![
                    filter.user.map(|u| u.value()),
                    filter.space.map(|s| s.value())
                ],
                |row| {
                    let reservation = row_to_reservation(row)?;
                    let username: String = row.get(10)?;
                    let space_title: String = row.get(11)?;
                    Ok(ReservationRecord {
                        reservation,
                        username,
                        space_title,
                    })
                },
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Applies a partial status update to a reservation.
    ///
    /// Either status may be omitted, in which case the stored value is
    /// left untouched. Any stored value may be replaced by any value of
    /// the same domain; there is no enforced transition order, so a
    /// cancelled reservation can be set back to pending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has the given id,
    /// [`Error::Validation`] if both statuses are `None`, or a database
    /// error if the update fails.
    pub fn update_reservation_status(
        &mut self,
        id: ReservationId,
        status: Option<ReservationStatus>,
        payment_status: Option<PaymentStatus>,
    ) -> Result<Reservation> {
        if status.is_none() && payment_status.is_none() {
            return Err(Error::Validation {
                field: "status".into(),
                message: "at least one of status or payment_status must be provided".into(),
            });
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = tx
            .query_row(SELECT_RESERVATION, params![id.value()], row_to_reservation)
            .optional()?;
        let existing = existing.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {id}"),
        })?;

        let new_status = status.unwrap_or_else(|| existing.status());
        let new_payment = payment_status.unwrap_or_else(|| existing.payment_status());

        tx.execute(
            "UPDATE reservations SET status = ?, payment_status = ?, updated_at = ? WHERE id = ?",
            params![
                new_status.as_str(),
                new_payment.as_str(),
                Utc::now().timestamp(),
                id.value()
            ],
        )?;

        let updated = tx.query_row(SELECT_RESERVATION, params![id.value()], row_to_reservation)?;
        tx.commit()?;
        Ok(updated)
    }
}

/// Checks whether a rusqlite error is a constraint violation.
fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
