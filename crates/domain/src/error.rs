// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::slot::SLOTS_PER_DAY;

/// A single validation failure in a proposed roster day.
///
/// Violations reference shifts, breaks and role segments by their position
/// in the submitted payload so callers can point at the offending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterViolation {
    /// A shift's slot range is inverted, empty, or extends past the day.
    ShiftRange {
        /// Index of the shift in the submission.
        shift: usize,
        /// The submitted start slot.
        start: u8,
        /// The submitted end slot.
        end: u8,
    },
    /// A break's end slot is not greater than its start slot.
    BreakBounds {
        /// Index of the shift in the submission.
        shift: usize,
        /// Index of the break within the shift.
        index: usize,
    },
    /// A break extends outside its shift's slot range.
    BreakOutsideShift {
        /// Index of the shift in the submission.
        shift: usize,
        /// Index of the break within the shift.
        index: usize,
    },
    /// A role segment's end slot is not greater than its start slot.
    RoleBounds {
        /// Index of the shift in the submission.
        shift: usize,
        /// Index of the role segment within the shift.
        index: usize,
    },
    /// A role segment extends outside its shift's slot range.
    RoleOutsideShift {
        /// Index of the shift in the submission.
        shift: usize,
        /// Index of the role segment within the shift.
        index: usize,
    },
    /// Two role segments of the same shift overlap.
    RoleOverlap {
        /// Index of the shift in the submission.
        shift: usize,
    },
    /// The same employee appears on more than one shift in the submission.
    DuplicateEmployee {
        /// The duplicated employee id.
        employee_id: i64,
    },
    /// Two shifts share an external shift id (trimmed, case-insensitive).
    DuplicateExternalId {
        /// The duplicated external id as first submitted (trimmed).
        external_id: String,
    },
}

impl std::fmt::Display for RosterViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShiftRange { shift, start, end } => {
                write!(
                    f,
                    "Shift[{shift}]: slot range {start}..{end} is invalid \
                     (end must be greater than start and at most {SLOTS_PER_DAY})"
                )
            }
            Self::BreakBounds { shift, index } => {
                write!(
                    f,
                    "Shift[{shift}] Break[{index}]: end must be greater than start"
                )
            }
            Self::BreakOutsideShift { shift, index } => {
                write!(
                    f,
                    "Shift[{shift}] Break[{index}]: must lie inside the shift range"
                )
            }
            Self::RoleBounds { shift, index } => {
                write!(
                    f,
                    "Shift[{shift}] Role[{index}]: end slot must be greater than start slot"
                )
            }
            Self::RoleOutsideShift { shift, index } => {
                write!(
                    f,
                    "Shift[{shift}] Role[{index}]: must lie inside the shift range"
                )
            }
            Self::RoleOverlap { shift } => {
                write!(f, "Shift[{shift}]: role segments overlap")
            }
            Self::DuplicateEmployee { employee_id } => {
                write!(
                    f,
                    "Employee {employee_id} has more than one shift in this roster day"
                )
            }
            Self::DuplicateExternalId { external_id } => {
                write!(f, "Duplicate external shift id '{external_id}' in request")
            }
        }
    }
}

impl std::error::Error for RosterViolation {}
