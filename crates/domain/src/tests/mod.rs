// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod slot;

use crate::types::{BreakSpan, RoleSegment, ShiftProposal};

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

/// Builds a break span.
pub fn brk(start: u8, end: u8, kind: &str) -> BreakSpan {
    BreakSpan::new(start, end, kind.to_owned())
}

/// Builds a role segment.
pub fn role(start_slot: u8, end_slot: u8, kind: &str) -> RoleSegment {
    RoleSegment::new(start_slot, end_slot, kind.to_owned())
}
