// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod employee_tests;
mod mysql_backend_tests;

use crate::Persistence;
use store_roster_domain::{BreakSpan, RoleSegment, ShiftProposal};

/// Creates an isolated in-memory persistence instance.
pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Creates a persistence instance seeded with one store.
///
/// Returns the persistence and the store id.
pub fn create_seeded_persistence() -> (Persistence, i64) {
    let mut persistence: Persistence = create_test_persistence();
    let store_id: i64 = persistence
        .create_store("0001", "Test Store")
        .expect("Failed to create store");
    (persistence, store_id)
}

/// Builds a bare shift proposal with no breaks or roles.
pub fn shift(external_id: &str, employee_id: i64, start_slot: u8, end_slot: u8) -> ShiftProposal {
    ShiftProposal::new(
        external_id.to_owned(),
        employee_id,
        start_slot,
        end_slot,
        Vec::new(),
        Vec::new(),
    )
}

/// Builds a shift proposal carrying breaks and roles.
pub fn shift_with_payloads(
    external_id: &str,
    employee_id: i64,
    start_slot: u8,
    end_slot: u8,
    breaks: Vec<BreakSpan>,
    roles: Vec<RoleSegment>,
) -> ShiftProposal {
    ShiftProposal::new(
        external_id.to_owned(),
        employee_id,
        start_slot,
        end_slot,
        breaks,
        roles,
    )
}
