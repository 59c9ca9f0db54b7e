// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// An employee row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeData {
    pub employee_id: i64,
    pub store_id: i64,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: String,
}

/// A roster day row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDayData {
    pub roster_day_id: i64,
    pub store_id: i64,
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// ISO 8601 timestamp of the last successful save.
    pub updated_at: String,
}

/// A shift row with its break/role payloads still encoded as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftData {
    pub shift_id: i64,
    pub roster_day_id: i64,
    pub employee_id: i64,
    pub external_shift_id: String,
    pub start_slot: i32,
    pub end_slot: i32,
    pub breaks_json: String,
    pub roles_json: String,
}

/// A login account row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub account_id: i64,
    pub login_name: String,
    pub display_name: String,
    pub password_hash: String,
    pub store_id: i64,
    pub role: String,
    pub is_disabled: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// A session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub account_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}
