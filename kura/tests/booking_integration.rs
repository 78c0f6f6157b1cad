//! Integration tests for the full booking flow.
//!
//! These tests exercise the plan/execute pipeline end to end: register
//! users and spaces, build booking plans, execute them, and verify the
//! overlap rules against the stored ledger.

mod common;

use kura::booking::{BookingPlan, BookingRequest, PlanExecutor, StatusPlan, StatusUpdate};
use kura::{Config, Database, DateRange, ReservationFilter, ReservationStatus};

use common::{create_temp_dir, insert_space, insert_user, open_database};

fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).unwrap()
}

#[test]
fn test_book_and_list() {
    let dir = create_temp_dir().unwrap();
    let mut db = open_database(&dir);
    let config = Config::default();

    let user = insert_user(&mut db, "yamada");
    let space = insert_space(&mut db, "Basement", 1500);

    let request = BookingRequest::new(space, user, range("2025-06-01", "2025-06-14"));
    let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
    let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();

    assert!(result.success);
    // 14 inclusive days at 1500/day
    assert_eq!(result.total_price, Some(21_000));
    let id = result.reservation_id.unwrap();

    let records =
        Database::list_reservations(db.connection(), &ReservationFilter::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reservation.id(), Some(id));
    assert_eq!(records[0].reservation.status(), ReservationStatus::Pending);
    assert_eq!(records[0].username, "yamada");
}

#[test]
fn test_overlapping_booking_rejected() {
    let dir = create_temp_dir().unwrap();
    let mut db = open_database(&dir);
    let config = Config::default();

    let yamada = insert_user(&mut db, "yamada");
    let tanaka = insert_user(&mut db, "tanaka");
    let space = insert_space(&mut db, "Basement", 1500);

    let first = BookingRequest::new(space, yamada, range("2025-06-01", "2025-06-10"));
    let plan = BookingPlan::new(first, &config).build_plan(&db).unwrap();
    PlanExecutor::new(&mut db).execute(&plan).unwrap();

    // Sharing the final day is an overlap under inclusive bounds
    let second = BookingRequest::new(space, tanaka, range("2025-06-10", "2025-06-15"));
    let err = BookingPlan::new(second, &config)
        .build_plan(&db)
        .unwrap_err();
    assert!(err.is_conflict());

    // The day after the existing end is fine
    let adjacent = BookingRequest::new(space, tanaka, range("2025-06-11", "2025-06-15"));
    let plan = BookingPlan::new(adjacent, &config).build_plan(&db).unwrap();
    PlanExecutor::new(&mut db).execute(&plan).unwrap();
}

#[test]
fn test_cancelled_reservation_releases_dates() {
    let dir = create_temp_dir().unwrap();
    let mut db = open_database(&dir);
    let config = Config::default();

    let yamada = insert_user(&mut db, "yamada");
    let tanaka = insert_user(&mut db, "tanaka");
    let space = insert_space(&mut db, "Basement", 1500);

    let request = BookingRequest::new(space, yamada, range("2025-06-01", "2025-06-10"));
    let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
    let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
    let id = result.reservation_id.unwrap();

    // Same dates are blocked while the reservation is live
    let retry = BookingRequest::new(space, tanaka, range("2025-06-05", "2025-06-08"));
    assert!(BookingPlan::new(retry, &config)
        .build_plan(&db)
        .unwrap_err()
        .is_conflict());

    // Cancel, then the same dates book cleanly
    let cancel = StatusPlan::new(StatusUpdate::cancel(id, false))
        .build_plan(&db)
        .unwrap();
    PlanExecutor::new(&mut db).execute(&cancel).unwrap();

    let plan = BookingPlan::new(retry, &config).build_plan(&db).unwrap();
    let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
    assert!(result.success);
}

#[test]
fn test_dry_run_booking_reports_without_writing() {
    let dir = create_temp_dir().unwrap();
    let mut db = open_database(&dir);
    let config = Config::default();

    let user = insert_user(&mut db, "yamada");
    let space = insert_space(&mut db, "Basement", 1500);

    let request = BookingRequest::new(space, user, range("2025-06-01", "2025-06-03"));
    let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
    let result = PlanExecutor::new(&mut db).dry_run().execute(&plan).unwrap();

    assert!(result.dry_run);
    assert_eq!(result.total_price, Some(4500));
    assert!(result.reservation_id.is_none());

    let records =
        Database::list_reservations(db.connection(), &ReservationFilter::default()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_single_day_booking() {
    let dir = create_temp_dir().unwrap();
    let mut db = open_database(&dir);
    let config = Config::default();

    let user = insert_user(&mut db, "yamada");
    let space = insert_space(&mut db, "Attic", 800);

    let request = BookingRequest::new(space, user, range("2025-06-05", "2025-06-05"));
    let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
    let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();

    // One inclusive day is charged, never zero
    assert_eq!(result.total_price, Some(800));
}

#[test]
fn test_same_dates_on_different_spaces() {
    let dir = create_temp_dir().unwrap();
    let mut db = open_database(&dir);
    let config = Config::default();

    let user = insert_user(&mut db, "yamada");
    let basement = insert_space(&mut db, "Basement", 1500);
    let attic = insert_space(&mut db, "Attic", 800);

    for space in [basement, attic] {
        let request = BookingRequest::new(space, user, range("2025-06-01", "2025-06-10"));
        let plan = BookingPlan::new(request, &config).build_plan(&db).unwrap();
        PlanExecutor::new(&mut db).execute(&plan).unwrap();
    }

    let records =
        Database::list_reservations(db.connection(), &ReservationFilter::default()).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_duration_cap_from_config() {
    let dir = create_temp_dir().unwrap();
    let mut db = open_database(&dir);
    let config = Config {
        max_duration_days: Some(7),
        ..Default::default()
    };

    let user = insert_user(&mut db, "yamada");
    let space = insert_space(&mut db, "Basement", 1500);

    let request = BookingRequest::new(space, user, range("2025-06-01", "2025-06-08"));
    let err = BookingPlan::new(request, &config)
        .build_plan(&db)
        .unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"));
}
