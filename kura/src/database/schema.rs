//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the kura reservation system.
//!
//! Dates are stored as ISO-8601 `TEXT` so that lexicographic comparison in
//! SQL matches chronological order; timestamps are stored as Unix epoch
//! seconds.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the spaces table.
///
/// The availability window is advertised metadata only; conflict detection
/// looks at reservations, not at this window.
pub const CREATE_SPACES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS spaces (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner TEXT NOT NULL,
        title TEXT NOT NULL,
        description TEXT,
        address TEXT NOT NULL,
        size_sqm REAL NOT NULL,
        price_per_day INTEGER NOT NULL,
        available_from TEXT NOT NULL,
        available_until TEXT,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Both date columns are inclusive bounds. The status columns hold the
/// canonical lowercase strings of the two status domains.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        space_id INTEGER NOT NULL REFERENCES spaces(id),
        user_id INTEGER NOT NULL REFERENCES users(id),
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        total_price INTEGER NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending',
        payment_status TEXT NOT NULL DEFAULT 'unpaid',
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on the `space_id` column.
///
/// This index speeds up the overlap query, which always filters by space.
pub const CREATE_SPACE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_space ON reservations(space_id)";

/// SQL statement to create an index on the `user_id` column.
///
/// This index speeds up filtered lists by user.
pub const CREATE_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user_id)";

/// SQL statement to create a covering index for conflict detection.
pub const CREATE_DATES_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_dates
    ON reservations(space_id, start_date, end_date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
///
/// Used by both the conflict-checked create and batch seeding.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (space_id, user_id, start_date, end_date, total_price, status, payment_status,
     created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to count reservations that overlap a requested range.
///
/// Two inclusive ranges intersect iff `existing.start <= requested.end AND
/// existing.end >= requested.start`. Cancelled reservations release their
/// dates and are excluded. Parameters: `space_id`, requested end, requested
/// start.
pub const COUNT_OVERLAPPING: &str = r"
    SELECT COUNT(*)
    FROM reservations
    WHERE space_id = ?
      AND status != 'cancelled'
      AND start_date <= ?
      AND end_date >= ?
";

/// SQL statement to fetch the first reservation that overlaps a requested
/// range, for conflict error messages. Same parameters as
/// [`COUNT_OVERLAPPING`].
pub const SELECT_FIRST_OVERLAPPING: &str = r"
    SELECT id, start_date, end_date
    FROM reservations
    WHERE space_id = ?
      AND status != 'cancelled'
      AND start_date <= ?
      AND end_date >= ?
    ORDER BY start_date
    LIMIT 1
";
