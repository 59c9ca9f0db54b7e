// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_seeded_persistence;
use crate::Persistence;
use crate::data_models::EmployeeData;
use crate::error::PersistenceError;

#[test]
fn test_created_employee_is_active() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let employee_id: i64 = persistence.create_employee(store_id, "Avery").unwrap();

    let employee: EmployeeData = persistence
        .get_employee(store_id, employee_id)
        .unwrap()
        .expect("Employee should exist");
    assert_eq!(employee.display_name, "Avery");
    assert!(employee.is_active);
    assert!(!employee.created_at.is_empty());
}

#[test]
fn test_list_employees_ordered_by_display_name() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    persistence.create_employee(store_id, "Casey").unwrap();
    persistence.create_employee(store_id, "Avery").unwrap();
    persistence.create_employee(store_id, "Blake").unwrap();

    let employees: Vec<EmployeeData> = persistence.list_employees(store_id, false).unwrap();
    let names: Vec<&str> = employees.iter().map(|e| e.display_name.as_str()).collect();
    assert_eq!(names, vec!["Avery", "Blake", "Casey"]);
}

#[test]
fn test_list_employees_excludes_inactive_by_default() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let active: i64 = persistence.create_employee(store_id, "Avery").unwrap();
    let inactive: i64 = persistence.create_employee(store_id, "Blake").unwrap();
    persistence.deactivate_employee(store_id, inactive).unwrap();

    let employees: Vec<EmployeeData> = persistence.list_employees(store_id, false).unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].employee_id, active);

    let all: Vec<EmployeeData> = persistence.list_employees(store_id, true).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn test_employees_are_scoped_per_store() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let other_store: i64 = persistence.create_store("0002", "Other Store").unwrap();
    let employee_id: i64 = persistence.create_employee(store_id, "Avery").unwrap();

    assert!(
        persistence
            .get_employee(other_store, employee_id)
            .unwrap()
            .is_none()
    );
    assert!(persistence.list_employees(other_store, true).unwrap().is_empty());
}

#[test]
fn test_update_employee_changes_name_and_active_flag() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let employee_id: i64 = persistence.create_employee(store_id, "Avery").unwrap();

    persistence
        .update_employee(store_id, employee_id, "Avery Q.", false)
        .unwrap();

    let employee: EmployeeData = persistence
        .get_employee(store_id, employee_id)
        .unwrap()
        .unwrap();
    assert_eq!(employee.display_name, "Avery Q.");
    assert!(!employee.is_active);
}

#[test]
fn test_update_employee_in_wrong_store_is_not_found() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let other_store: i64 = persistence.create_store("0002", "Other Store").unwrap();
    let employee_id: i64 = persistence.create_employee(store_id, "Avery").unwrap();

    let result: Result<(), PersistenceError> =
        persistence.update_employee(other_store, employee_id, "Mallory", true);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_count_active_employees_matches_membership() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let other_store: i64 = persistence.create_store("0002", "Other Store").unwrap();
    let active: i64 = persistence.create_employee(store_id, "Avery").unwrap();
    let inactive: i64 = persistence.create_employee(store_id, "Blake").unwrap();
    let foreign: i64 = persistence.create_employee(other_store, "Casey").unwrap();
    persistence.deactivate_employee(store_id, inactive).unwrap();

    let count: i64 = persistence
        .count_active_employees(store_id, &[active, inactive, foreign, 9999])
        .unwrap();
    assert_eq!(count, 1);
}
