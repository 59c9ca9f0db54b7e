// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RosterViolation;
use crate::slot::SlotRange;
use crate::types::{RoleSegment, ShiftProposal};
use std::collections::HashMap;

/// Validates a proposed roster day.
///
/// Evaluates every rule over the whole submission without short-circuiting
/// and returns all violations found; an empty vector means the roster is
/// accepted. This function is pure, deterministic, and has no side effects.
///
/// Rules:
/// - each shift's slot range must be non-empty and within the day
/// - each break must be non-empty and contained in its shift's range
/// - each role segment must be non-empty and contained in its shift's range
/// - role segments of one shift must be pairwise non-overlapping
/// - no employee may appear on more than one shift
/// - no two shifts may share an external id (trimmed, case-insensitive;
///   blank ids are exempt)
///
/// Breaks are deliberately not checked for mutual overlap — only for
/// containment. Known asymmetry with role segments.
#[must_use]
pub fn validate_roster(shifts: &[ShiftProposal]) -> Vec<RosterViolation> {
    let mut violations: Vec<RosterViolation> = Vec::new();

    for (i, shift) in shifts.iter().enumerate() {
        let shift_range: SlotRange = shift.range();

        if !shift_range.is_valid() {
            violations.push(RosterViolation::ShiftRange {
                shift: i,
                start: shift.start_slot,
                end: shift.end_slot,
            });
        }

        for (j, brk) in shift.breaks.iter().enumerate() {
            if brk.end <= brk.start {
                violations.push(RosterViolation::BreakBounds { shift: i, index: j });
            }
            if !shift_range.contains(&brk.range()) {
                violations.push(RosterViolation::BreakOutsideShift { shift: i, index: j });
            }
        }

        for (j, role) in shift.roles.iter().enumerate() {
            if role.end_slot <= role.start_slot {
                violations.push(RosterViolation::RoleBounds { shift: i, index: j });
            }
            if !shift_range.contains(&role.range()) {
                violations.push(RosterViolation::RoleOutsideShift { shift: i, index: j });
            }
        }

        check_role_overlaps(i, &shift.roles, &mut violations);
    }

    check_duplicate_employees(shifts, &mut violations);
    check_duplicate_external_ids(shifts, &mut violations);

    violations
}

/// Reports a violation for each adjacent overlapping pair of role segments.
///
/// Segments are sorted by `(start_slot, end_slot)`; in sorted order an
/// overlap exists exactly when a segment starts before its predecessor ends.
fn check_role_overlaps(shift: usize, roles: &[RoleSegment], violations: &mut Vec<RosterViolation>) {
    if roles.len() < 2 {
        return;
    }

    let mut ordered: Vec<&RoleSegment> = roles.iter().collect();
    ordered.sort_by_key(|role| (role.start_slot, role.end_slot));

    for pair in ordered.windows(2) {
        if pair[1].start_slot < pair[0].end_slot {
            violations.push(RosterViolation::RoleOverlap { shift });
        }
    }
}

/// Reports one violation per employee referenced by more than one shift.
fn check_duplicate_employees(shifts: &[ShiftProposal], violations: &mut Vec<RosterViolation>) {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for shift in shifts {
        *counts.entry(shift.employee_id).or_insert(0) += 1;
    }

    // Walk the submission rather than the map so reporting order is stable.
    let mut reported: Vec<i64> = Vec::new();
    for shift in shifts {
        if counts.get(&shift.employee_id).copied().unwrap_or(0) > 1
            && !reported.contains(&shift.employee_id)
        {
            reported.push(shift.employee_id);
            violations.push(RosterViolation::DuplicateEmployee {
                employee_id: shift.employee_id,
            });
        }
    }
}

/// Reports one violation per duplicated external id.
///
/// Ids are trimmed before comparison and compared case-insensitively; blank
/// ids never count as duplicates. The reported id is the first submitted
/// spelling.
fn check_duplicate_external_ids(shifts: &[ShiftProposal], violations: &mut Vec<RosterViolation>) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for shift in shifts {
        let trimmed: &str = shift.trimmed_external_id();
        if trimmed.is_empty() {
            continue;
        }
        *counts.entry(trimmed.to_lowercase()).or_insert(0) += 1;
    }

    // Walk the submission rather than the map so reporting order is stable
    // and the first submitted spelling is the one reported.
    let mut reported: Vec<String> = Vec::new();
    for shift in shifts {
        let trimmed: &str = shift.trimmed_external_id();
        if trimmed.is_empty() {
            continue;
        }
        let key: String = trimmed.to_lowercase();
        if counts.get(&key).copied().unwrap_or(0) > 1 && !reported.contains(&key) {
            reported.push(key);
            violations.push(RosterViolation::DuplicateExternalId {
                external_id: trimmed.to_owned(),
            });
        }
    }
}
