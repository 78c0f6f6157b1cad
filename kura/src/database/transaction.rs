//! Transaction management utilities.
//!
//! This module provides batch insert helpers used when seeding a fresh
//! database with demonstration data.

use rusqlite::{params, TransactionBehavior};

use crate::error::Result;
use crate::reservation::Reservation;
use crate::space::{Space, SpaceId};
use crate::user::{User, UserId};

use super::connection::Database;
use super::schema::INSERT_RESERVATION;

const INSERT_USER: &str = r"
    INSERT INTO users (username, email, created_at)
    VALUES (?, ?, ?)
";

const INSERT_SPACE: &str = r"
    INSERT INTO spaces
    (owner, title, description, address, size_sqm, price_per_day,
     available_from, available_until, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

impl Database {
    /// Inserts multiple users in a single transaction.
    ///
    /// This operation is atomic - either all users are inserted or none
    /// are. Returns the assigned ids in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - Any insert fails
    /// - The transaction cannot be committed
    pub fn batch_insert_users(&mut self, users: &[User]) -> Result<Vec<UserId>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut ids = Vec::with_capacity(users.len());
        {
            let mut stmt = tx.prepare(INSERT_USER)?;
            for user in users {
                stmt.execute(params![
                    user.username(),
                    user.email(),
                    user.created_at().timestamp()
                ])?;
                ids.push(UserId::new(tx.last_insert_rowid()));
            }
        }

        tx.commit()?;
        Ok(ids)
    }

    /// Inserts multiple spaces in a single transaction.
    ///
    /// This operation is atomic - either all spaces are inserted or none
    /// are. Returns the assigned ids in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - Any insert fails
    /// - The transaction cannot be committed
    pub fn batch_insert_spaces(&mut self, spaces: &[Space]) -> Result<Vec<SpaceId>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut ids = Vec::with_capacity(spaces.len());
        {
            let mut stmt = tx.prepare(INSERT_SPACE)?;
            for space in spaces {
                stmt.execute(params![
                    space.owner(),
                    space.title(),
                    space.description(),
                    space.address(),
                    space.size_sqm(),
                    space.price_per_day(),
                    space.available_from().to_string(),
                    space.available_until().map(|d| d.to_string()),
                    space.created_at().timestamp(),
                ])?;
                ids.push(SpaceId::new(tx.last_insert_rowid()));
            }
        }

        tx.commit()?;
        Ok(ids)
    }

    /// Inserts multiple reservations in a single transaction, without
    /// conflict checking.
    ///
    /// Seed data is constructed to be conflict-free, so this skips the
    /// overlap re-check that `insert_reservation_checked` performs.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - Any insert fails
    /// - The transaction cannot be committed
    pub fn batch_insert_reservations(&mut self, reservations: &[Reservation]) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        {
            let mut stmt = tx.prepare(INSERT_RESERVATION)?;
            for reservation in reservations {
                let range = reservation.range();
                stmt.execute(params![
                    reservation.space_id().value(),
                    reservation.user_id().value(),
                    range.start().to_string(),
                    range.end().to_string(),
                    reservation.total_price(),
                    reservation.status().as_str(),
                    reservation.payment_status().as_str(),
                    reservation.created_at().timestamp(),
                    reservation.updated_at().timestamp(),
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}
