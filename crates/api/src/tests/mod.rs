// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod employee_tests;

use store_roster_domain::{BreakSpan, RoleSegment};
use store_roster_persistence::Persistence;

use crate::auth::{AuthenticatedAccount, Role};
use crate::request_response::{SaveRosterRequest, ShiftPayload};

/// Creates a persistence instance seeded with one store.
pub fn create_seeded_persistence() -> (Persistence, i64) {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    let store_id: i64 = persistence
        .create_store("0001", "Test Store")
        .expect("Failed to create store");
    (persistence, store_id)
}

/// Builds an authenticated manager for a store.
///
/// Handlers trust the resolved identity, so tests fabricate it directly;
/// session issuance is exercised separately in `auth_tests`.
pub fn manager(store_id: i64) -> AuthenticatedAccount {
    AuthenticatedAccount {
        account_id: 1,
        login_name: String::from("manager"),
        display_name: String::from("Morgan"),
        store_id,
        role: Role::Manager,
    }
}

/// Builds an authenticated staff account for a store.
pub fn staff(store_id: i64) -> AuthenticatedAccount {
    AuthenticatedAccount {
        account_id: 2,
        login_name: String::from("staff"),
        display_name: String::from("Sam"),
        store_id,
        role: Role::Staff,
    }
}

/// Builds a save request from shift payloads.
pub fn save_request(shifts: Vec<ShiftPayload>) -> SaveRosterRequest {
    SaveRosterRequest { shifts }
}

/// Builds a bare shift payload with no breaks or roles.
pub fn payload(external_id: &str, employee_id: i64, start_slot: u8, end_slot: u8) -> ShiftPayload {
    ShiftPayload {
        external_shift_id: external_id.to_owned(),
        employee_id,
        start_slot,
        end_slot,
        breaks: Vec::new(),
        roles: Vec::new(),
    }
}

/// Builds a shift payload carrying breaks and roles.
pub fn payload_with(
    external_id: &str,
    employee_id: i64,
    start_slot: u8,
    end_slot: u8,
    breaks: Vec<BreakSpan>,
    roles: Vec<RoleSegment>,
) -> ShiftPayload {
    ShiftPayload {
        external_shift_id: external_id.to_owned(),
        employee_id,
        start_slot,
        end_slot,
        breaks,
        roles,
    }
}
