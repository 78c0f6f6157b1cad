//! Deterministic demonstration data for fresh databases.
//!
//! Seeding gives a new installation a few users, spaces, and
//! non-overlapping reservations to explore. The data is fixed so that
//! repeated seeding of fresh databases produces the same listings.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::space::Space;
use crate::user::User;
use crate::DateRange;

/// Counts of records inserted by [`seed_database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Number of users inserted.
    pub users: usize,
    /// Number of spaces inserted.
    pub spaces: usize,
    /// Number of reservations inserted.
    pub reservations: usize,
}

fn seed_users() -> Result<Vec<User>> {
    Ok(vec![
        User::new("yamada_taro", "yamada@example.com")?,
        User::new("tanaka_hanako", "tanaka@example.com")?,
        User::new("suzuki_ichiro", "suzuki@example.com")?,
    ])
}

fn seed_spaces() -> Result<Vec<Space>> {
    Ok(vec![
        Space::builder()
            .owner("storage-co")
            .title("Dry basement in Chiyoda")
            .description("Climate controlled, ground floor access")
            .address("2-4-1 Marunouchi, Chiyoda")
            .size_sqm(8.0)
            .price_per_day(1500)
            .available_from(seed_date("2025-01-01")?)
            .build()?,
        Space::builder()
            .owner("minato-lofts")
            .title("Attic storage near Tamachi")
            .address("5-2-3 Shibaura, Minato")
            .size_sqm(4.5)
            .price_per_day(800)
            .available_from(seed_date("2025-01-01")?)
            .available_until(seed_date("2025-12-31")?)
            .build()?,
        Space::builder()
            .owner("storage-co")
            .title("Garage bay in Setagaya")
            .description("Fits a small van, roller door")
            .address("1-8-12 Kamiuma, Setagaya")
            .size_sqm(18.0)
            .price_per_day(3200)
            .available_from(seed_date("2025-03-01")?)
            .build()?,
    ])
}

fn seed_date(value: &str) -> Result<chrono::NaiveDate> {
    value.parse().map_err(|e: chrono::ParseError| Error::Validation {
        field: "seed_date".into(),
        message: e.to_string(),
    })
}

/// Seeds a database with demonstration users, spaces, and reservations.
///
/// Intended for fresh databases; reservations are constructed to be
/// conflict-free so seeding never trips the overlap check.
///
/// # Errors
///
/// Returns an error if any insert fails, for example when seeding a
/// database that already contains the seed usernames.
///
/// # Examples
///
/// ```no_run
/// use kura::database::{Database, DatabaseConfig};
/// use kura::seed::seed_database;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/kura.db")).unwrap();
/// let summary = seed_database(&mut db).unwrap();
/// println!("seeded {} reservations", summary.reservations);
/// ```
pub fn seed_database(db: &mut Database) -> Result<SeedSummary> {
    let users = seed_users()?;
    let spaces = seed_spaces()?;

    let user_ids = db.batch_insert_users(&users)?;
    let space_ids = db.batch_insert_spaces(&spaces)?;

    let parse_range = |start: &str, end: &str| DateRange::parse(start, end);

    let reservations = vec![
        Reservation::new(
            space_ids[0],
            user_ids[0],
            parse_range("2025-06-01", "2025-06-14")?,
            spaces[0].price_per_day(),
        ),
        Reservation::new(
            space_ids[0],
            user_ids[1],
            parse_range("2025-07-01", "2025-07-10")?,
            spaces[0].price_per_day(),
        ),
        Reservation::new(
            space_ids[1],
            user_ids[2],
            parse_range("2025-06-05", "2025-06-05")?,
            spaces[1].price_per_day(),
        ),
    ];
    db.batch_insert_reservations(&reservations)?;

    Ok(SeedSummary {
        users: users.len(),
        spaces: spaces.len(),
        reservations: reservations.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::create_test_database;
    use crate::database::ReservationFilter;

    #[test]
    fn test_seed_counts() {
        let mut db = create_test_database();
        let summary = seed_database(&mut db).unwrap();

        assert_eq!(summary.users, 3);
        assert_eq!(summary.spaces, 3);
        assert_eq!(summary.reservations, 3);

        let listed =
            Database::list_reservations(db.connection(), &ReservationFilter::default()).unwrap();
        assert_eq!(listed.len(), 3);
    }

    #[test]
    fn test_seed_data_is_conflict_free() {
        let mut db = create_test_database();
        seed_database(&mut db).unwrap();

        let records =
            Database::list_reservations(db.connection(), &ReservationFilter::default()).unwrap();
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                if a.reservation.space_id() == b.reservation.space_id() {
                    assert!(!a.reservation.range().overlaps(&b.reservation.range()));
                }
            }
        }
    }

    #[test]
    fn test_seed_twice_fails_on_duplicate_usernames() {
        let mut db = create_test_database();
        seed_database(&mut db).unwrap();
        assert!(seed_database(&mut db).is_err());
    }

    #[test]
    fn test_seed_prices_match_day_counts() {
        let mut db = create_test_database();
        seed_database(&mut db).unwrap();

        let records =
            Database::list_reservations(db.connection(), &ReservationFilter::default()).unwrap();
        // Single-day reservation on the attic space at 800/day
        let single = records
            .iter()
            .find(|r| r.reservation.range().days_inclusive() == 1)
            .unwrap();
        assert_eq!(single.reservation.total_price(), 800);
    }
}
