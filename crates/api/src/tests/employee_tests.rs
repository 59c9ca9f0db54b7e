// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_seeded_persistence, manager, staff};
use crate::error::ApiError;
use crate::handlers::{
    create_employee, deactivate_employee, get_employee, list_employees, update_employee,
};
use crate::request_response::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};
use store_roster_persistence::Persistence;

#[test]
fn test_create_employee_trims_display_name() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();

    let created: EmployeeResponse = create_employee(
        &mut persistence,
        &manager(store_id),
        &CreateEmployeeRequest {
            display_name: String::from("  Avery  "),
        },
    )
    .unwrap();

    assert_eq!(created.display_name, "Avery");
    assert!(created.is_active);

    let fetched: EmployeeResponse =
        get_employee(&mut persistence, &manager(store_id), created.id).unwrap();
    assert_eq!(fetched.display_name, "Avery");
}

#[test]
fn test_create_employee_rejects_blank_name() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();

    let result: Result<EmployeeResponse, ApiError> = create_employee(
        &mut persistence,
        &manager(store_id),
        &CreateEmployeeRequest {
            display_name: String::from("   "),
        },
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_create_employee_requires_manager() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();

    let result: Result<EmployeeResponse, ApiError> = create_employee(
        &mut persistence,
        &staff(store_id),
        &CreateEmployeeRequest {
            display_name: String::from("Avery"),
        },
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_list_employees_honors_include_inactive() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let account = manager(store_id);
    let kept: EmployeeResponse = create_employee(
        &mut persistence,
        &account,
        &CreateEmployeeRequest {
            display_name: String::from("Avery"),
        },
    )
    .unwrap();
    let dropped: EmployeeResponse = create_employee(
        &mut persistence,
        &account,
        &CreateEmployeeRequest {
            display_name: String::from("Blake"),
        },
    )
    .unwrap();
    deactivate_employee(&mut persistence, &account, dropped.id).unwrap();

    let active_only: Vec<EmployeeResponse> =
        list_employees(&mut persistence, &account, false).unwrap();
    assert_eq!(active_only.len(), 1);
    assert_eq!(active_only[0].id, kept.id);

    let everyone: Vec<EmployeeResponse> = list_employees(&mut persistence, &account, true).unwrap();
    assert_eq!(everyone.len(), 2);
}

#[test]
fn test_get_employee_not_found() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();

    let result: Result<EmployeeResponse, ApiError> =
        get_employee(&mut persistence, &staff(store_id), 9999);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_update_employee_changes_name_and_flag() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let account = manager(store_id);
    let created: EmployeeResponse = create_employee(
        &mut persistence,
        &account,
        &CreateEmployeeRequest {
            display_name: String::from("Avery"),
        },
    )
    .unwrap();

    let updated: EmployeeResponse = update_employee(
        &mut persistence,
        &account,
        created.id,
        &UpdateEmployeeRequest {
            display_name: String::from("Avery Q."),
            is_active: false,
        },
    )
    .unwrap();
    assert_eq!(updated.display_name, "Avery Q.");
    assert!(!updated.is_active);

    let fetched: EmployeeResponse = get_employee(&mut persistence, &account, created.id).unwrap();
    assert_eq!(fetched.display_name, "Avery Q.");
    assert!(!fetched.is_active);
}

#[test]
fn test_update_employee_requires_manager() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let created: EmployeeResponse = create_employee(
        &mut persistence,
        &manager(store_id),
        &CreateEmployeeRequest {
            display_name: String::from("Avery"),
        },
    )
    .unwrap();

    let result: Result<EmployeeResponse, ApiError> = update_employee(
        &mut persistence,
        &staff(store_id),
        created.id,
        &UpdateEmployeeRequest {
            display_name: String::from("Mallory"),
            is_active: true,
        },
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_update_employee_not_found_in_other_store() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let other_store: i64 = persistence.create_store("0002", "Other Store").unwrap();
    let created: EmployeeResponse = create_employee(
        &mut persistence,
        &manager(store_id),
        &CreateEmployeeRequest {
            display_name: String::from("Avery"),
        },
    )
    .unwrap();

    let result: Result<EmployeeResponse, ApiError> = update_employee(
        &mut persistence,
        &manager(other_store),
        created.id,
        &UpdateEmployeeRequest {
            display_name: String::from("Mallory"),
            is_active: true,
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_deactivate_employee_requires_manager() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let created: EmployeeResponse = create_employee(
        &mut persistence,
        &manager(store_id),
        &CreateEmployeeRequest {
            display_name: String::from("Avery"),
        },
    )
    .unwrap();

    let result: Result<(), ApiError> =
        deactivate_employee(&mut persistence, &staff(store_id), created.id);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_deactivate_employee_soft_deletes() {
    let (mut persistence, store_id): (Persistence, i64) = create_seeded_persistence();
    let account = manager(store_id);
    let created: EmployeeResponse = create_employee(
        &mut persistence,
        &account,
        &CreateEmployeeRequest {
            display_name: String::from("Avery"),
        },
    )
    .unwrap();

    deactivate_employee(&mut persistence, &account, created.id).unwrap();

    // Still fetchable, just inactive.
    let fetched: EmployeeResponse = get_employee(&mut persistence, &account, created.id).unwrap();
    assert!(!fetched.is_active);
}
