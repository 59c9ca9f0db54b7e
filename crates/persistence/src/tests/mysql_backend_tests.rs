// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! MySQL/MariaDB backend validation tests.
//!
//! These tests are `#[ignore]`d and never run automatically. They require a
//! provisioned database reachable through `STORE_ROSTER_MYSQL_URL` and fail
//! fast when the variable is missing rather than silently skipping.

use super::shift;
use crate::Persistence;
use crate::data_models::{RosterDayData, ShiftData};
use crate::error::PersistenceError;

fn create_mysql_persistence() -> Persistence {
    let url: String = std::env::var("STORE_ROSTER_MYSQL_URL")
        .expect("STORE_ROSTER_MYSQL_URL must be set for MySQL backend validation tests");
    Persistence::new_with_mysql(&url).expect("Failed to connect to MySQL validation database")
}

#[test]
#[ignore = "requires a provisioned MariaDB/MySQL database"]
fn test_mysql_roster_replace_round_trip() {
    let mut persistence: Persistence = create_mysql_persistence();
    let store_id: i64 = persistence
        .create_store("9901", "MySQL Validation Store")
        .unwrap();
    let employee_id: i64 = persistence.create_employee(store_id, "Avery").unwrap();

    persistence
        .replace_roster_day(store_id, "2026-02-14", &[shift("S-1", employee_id, 4, 36)])
        .unwrap();

    let day: RosterDayData = persistence
        .get_roster_day(store_id, "2026-02-14")
        .unwrap()
        .expect("Roster day should exist after save");
    let shifts: Vec<ShiftData> = persistence.list_shifts(day.roster_day_id).unwrap();
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].employee_id, employee_id);
}

#[test]
#[ignore = "requires a provisioned MariaDB/MySQL database"]
fn test_mysql_duplicate_external_id_constraint() {
    let mut persistence: Persistence = create_mysql_persistence();
    let store_id: i64 = persistence
        .create_store("9902", "MySQL Constraint Store")
        .unwrap();
    let first: i64 = persistence.create_employee(store_id, "Avery").unwrap();
    let second: i64 = persistence.create_employee(store_id, "Blake").unwrap();

    let result: Result<(), PersistenceError> = persistence.replace_roster_day(
        store_id,
        "2026-02-15",
        &[shift("A1", first, 0, 16), shift("a1", second, 16, 32)],
    );

    assert!(matches!(result, Err(PersistenceError::DuplicateShift(_))));
}
