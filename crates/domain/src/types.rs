// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::slot::SlotRange;
use serde::{Deserialize, Serialize};

/// A break within a shift.
///
/// Breaks occupy a slot sub-range `[start, end)` of their shift and carry a
/// free-form kind label (e.g. "lunch", "rest"). Breaks are serialized onto
/// the shift row as an opaque JSON payload, so the field layout here is the
/// persisted wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakSpan {
    /// The first slot of the break (inclusive).
    pub start: u8,
    /// The first slot past the break (exclusive).
    pub end: u8,
    /// The break kind label.
    #[serde(rename = "type")]
    pub kind: String,
}

impl BreakSpan {
    /// Creates a new break span.
    #[must_use]
    pub const fn new(start: u8, end: u8, kind: String) -> Self {
        Self { start, end, kind }
    }

    /// Returns the break's slot range.
    #[must_use]
    pub const fn range(&self) -> SlotRange {
        SlotRange::new(self.start, self.end)
    }
}

/// A role segment within a shift.
///
/// Role segments tag a slot sub-range of the shift with the duty performed
/// (e.g. "cashier", "stockroom"). Unlike breaks, role segments of one shift
/// must not overlap each other. Serialized onto the shift row as JSON, same
/// as breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSegment {
    /// The first slot of the segment (inclusive).
    pub start_slot: u8,
    /// The first slot past the segment (exclusive).
    pub end_slot: u8,
    /// The role kind label.
    #[serde(rename = "type")]
    pub kind: String,
}

impl RoleSegment {
    /// Creates a new role segment.
    #[must_use]
    pub const fn new(start_slot: u8, end_slot: u8, kind: String) -> Self {
        Self {
            start_slot,
            end_slot,
            kind,
        }
    }

    /// Returns the segment's slot range.
    #[must_use]
    pub const fn range(&self) -> SlotRange {
        SlotRange::new(self.start_slot, self.end_slot)
    }
}

/// One proposed shift of a roster day submission.
///
/// A proposal carries everything a saved shift row will hold: the external
/// shift identifier supplied by the caller, the employee reference, the slot
/// range, and the break/role payloads. Proposals are plain data; acceptance
/// is decided by [`crate::validate_roster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftProposal {
    /// Caller-supplied identifier correlating this shift to an external
    /// system. Unique per day after trimming, compared case-insensitively;
    /// blank ids are permitted and exempt from uniqueness.
    pub external_id: String,
    /// The employee assigned to this shift.
    pub employee_id: i64,
    /// The first slot of the shift (inclusive).
    pub start_slot: u8,
    /// The first slot past the shift (exclusive).
    pub end_slot: u8,
    /// Breaks within the shift, in submission order.
    pub breaks: Vec<BreakSpan>,
    /// Role segments within the shift, in submission order.
    pub roles: Vec<RoleSegment>,
}

impl ShiftProposal {
    /// Creates a new shift proposal.
    #[must_use]
    pub const fn new(
        external_id: String,
        employee_id: i64,
        start_slot: u8,
        end_slot: u8,
        breaks: Vec<BreakSpan>,
        roles: Vec<RoleSegment>,
    ) -> Self {
        Self {
            external_id,
            employee_id,
            start_slot,
            end_slot,
            breaks,
            roles,
        }
    }

    /// Returns the shift's slot range.
    #[must_use]
    pub const fn range(&self) -> SlotRange {
        SlotRange::new(self.start_slot, self.end_slot)
    }

    /// Returns the external id with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_external_id(&self) -> &str {
        self.external_id.trim()
    }
}
