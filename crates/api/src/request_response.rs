// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use store_roster_domain::{BreakSpan, RoleSegment};

/// API request to log in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The account login name.
    pub login_name: String,
    /// The plain-text password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The bearer token for subsequent requests.
    pub session_token: String,
    /// The account login name.
    pub login_name: String,
    /// The account display name.
    pub display_name: String,
    /// The account role (`Manager` or `Staff`).
    pub role: String,
    /// The session expiration timestamp (ISO 8601).
    pub expires_at: String,
}

/// API response describing the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// The account login name.
    pub login_name: String,
    /// The account display name.
    pub display_name: String,
    /// The account role (`Manager` or `Staff`).
    pub role: String,
    /// The store the account belongs to.
    pub store_id: i64,
}

/// One proposed shift in a roster save request.
///
/// Break and role entries use the same shapes the system persists
/// ([`BreakSpan`] / [`RoleSegment`]), so a saved roster reads back exactly
/// as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPayload {
    /// Caller-supplied identifier correlating the shift to an external
    /// system.
    pub external_shift_id: String,
    /// The employee assigned to the shift.
    pub employee_id: i64,
    /// The first slot of the shift (inclusive).
    pub start_slot: u8,
    /// The first slot past the shift (exclusive).
    pub end_slot: u8,
    /// Breaks within the shift.
    #[serde(default)]
    pub breaks: Vec<BreakSpan>,
    /// Role segments within the shift.
    #[serde(default)]
    pub roles: Vec<RoleSegment>,
}

/// API request to replace a roster day's whole shift set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRosterRequest {
    /// The full replacement shift set for the day.
    pub shifts: Vec<ShiftPayload>,
}

/// API response for a successful roster save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRosterResponse {
    /// Success indicator.
    pub saved: bool,
}

/// A `(id, display name)` employee projection for roster responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee's canonical identifier.
    pub id: i64,
    /// The employee's display name.
    pub display_name: String,
}

/// One saved shift in a roster response, with payloads decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterShiftResponse {
    /// The shift's canonical identifier.
    pub id: i64,
    /// The caller-supplied external shift id (stored trimmed).
    pub external_shift_id: String,
    /// The assigned employee.
    pub employee_id: i64,
    /// The first slot of the shift (inclusive).
    pub start_slot: i32,
    /// The first slot past the shift (exclusive).
    pub end_slot: i32,
    /// Decoded breaks, in saved order.
    pub breaks: Vec<BreakSpan>,
    /// Decoded role segments, in saved order.
    pub roles: Vec<RoleSegment>,
}

/// The read projection of one roster day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    /// The roster date (ISO 8601 calendar date).
    pub date: String,
    /// Number of slots in a day.
    pub slots_per_day: u8,
    /// Length of a slot in minutes.
    pub slot_minutes: u8,
    /// Active employees of the store, ordered by display name.
    pub employees: Vec<EmployeeSummary>,
    /// The day's shifts ordered by ascending start slot.
    pub shifts: Vec<RosterShiftResponse>,
    /// Whether the caller may edit this roster.
    pub can_edit: bool,
}

/// An employee in directory responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// The employee's canonical identifier.
    pub id: i64,
    /// The employee's display name.
    pub display_name: String,
    /// Whether the employee may be assigned to new shifts.
    pub is_active: bool,
}

/// API request to create an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The employee's display name (trimmed before storage).
    pub display_name: String,
}

/// API request to update an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// The employee's display name (trimmed before storage).
    pub display_name: String,
    /// Whether the employee may be assigned to new shifts.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

const fn default_is_active() -> bool {
    true
}
