// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Handlers are pure functions over the persistence layer and the
//! authenticated account; HTTP concerns (routing, status codes, extractors)
//! live in the server crate. Every handler trusts the account's resolved
//! `(store_id, role)` completely.

use serde::de::DeserializeOwned;
use time::Date;
use time::macros::format_description;
use tracing::{debug, info};

use store_roster_domain::{
    BreakSpan, RoleSegment, RosterViolation, SLOT_MINUTES, SLOTS_PER_DAY, ShiftProposal,
    validate_roster,
};
use store_roster_persistence::{EmployeeData, Persistence, PersistenceError, ShiftData};

use crate::auth::{AuthenticatedAccount, AuthenticationService, AuthorizationService};
use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    CreateEmployeeRequest, EmployeeResponse, EmployeeSummary, LoginRequest, LoginResponse,
    RosterResponse, RosterShiftResponse, SaveRosterRequest, SaveRosterResponse,
    UpdateEmployeeRequest, WhoAmIResponse,
};

/// Storage format for roster dates (`YYYY-MM-DD`).
const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parses a roster date, rejecting anything that is not an ISO calendar
/// date.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] if the date does not parse.
fn parse_roster_date(date: &str) -> Result<Date, ApiError> {
    Date::parse(date, DATE_FORMAT).map_err(|_| ApiError::InvalidInput {
        field: String::from("date"),
        message: String::from("Invalid date. Use YYYY-MM-DD"),
    })
}

/// Formats a roster date in its canonical storage form.
fn format_roster_date(date: Date) -> Result<String, ApiError> {
    date.format(DATE_FORMAT).map_err(|e| ApiError::Internal {
        message: format!("Failed to format date: {e}"),
    })
}

/// Decodes a JSON payload column, defaulting to empty for an empty payload.
///
/// Payloads are written by this system, so a malformed payload is an
/// internal error rather than a client one.
fn decode_payload<T: DeserializeOwned + Default>(payload: &str) -> Result<T, ApiError> {
    if payload.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(payload).map_err(|e| ApiError::Internal {
        message: format!("Malformed shift payload: {e}"),
    })
}

// ============================================================================
// Roster
// ============================================================================

/// Assembles the read projection of one roster day.
///
/// A date with no saved roster yields an empty shift list, not an error.
/// `can_edit` reflects the caller's role and is never derived from roster
/// state.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `account` - The authenticated caller
/// * `date` - The requested calendar date (must be ISO 8601)
///
/// # Errors
///
/// Returns an error if the date is malformed or the database fails.
pub fn get_roster(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    date: &str,
) -> Result<RosterResponse, ApiError> {
    let parsed: Date = parse_roster_date(date)?;
    let date_str: String = format_roster_date(parsed)?;

    let employees: Vec<EmployeeSummary> = persistence
        .list_employees(account.store_id, false)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|e| EmployeeSummary {
            id: e.employee_id,
            display_name: e.display_name,
        })
        .collect();

    let shift_rows: Vec<ShiftData> = match persistence
        .get_roster_day(account.store_id, &date_str)
        .map_err(translate_persistence_error)?
    {
        Some(day) => persistence
            .list_shifts(day.roster_day_id)
            .map_err(translate_persistence_error)?,
        None => Vec::new(),
    };

    let mut shifts: Vec<RosterShiftResponse> = Vec::with_capacity(shift_rows.len());
    for row in shift_rows {
        let breaks: Vec<BreakSpan> = decode_payload(&row.breaks_json)?;
        let roles: Vec<RoleSegment> = decode_payload(&row.roles_json)?;
        shifts.push(RosterShiftResponse {
            id: row.shift_id,
            external_shift_id: row.external_shift_id,
            employee_id: row.employee_id,
            start_slot: row.start_slot,
            end_slot: row.end_slot,
            breaks,
            roles,
        });
    }

    debug!(
        store_id = account.store_id,
        date = %date_str,
        shift_count = shifts.len(),
        "Assembled roster projection"
    );

    Ok(RosterResponse {
        date: date_str,
        slots_per_day: SLOTS_PER_DAY,
        slot_minutes: SLOT_MINUTES,
        employees,
        shifts,
        can_edit: account.is_manager(),
    })
}

/// Validates and saves a roster day, replacing its whole shift set.
///
/// The protocol, in order:
/// 1. authorize the caller (Manager only)
/// 2. validate the proposal; reject with the full violation list
/// 3. membership check: every referenced employee must be an active
///    employee of the caller's store (before any transaction)
/// 4. transactional replace via the persistence layer
///
/// # Errors
///
/// * [`ApiError::Unauthorized`] - caller is not a manager
/// * [`ApiError::InvalidInput`] - malformed date
/// * [`ApiError::ValidationFailed`] - the proposal violated roster rules
/// * [`ApiError::InvalidEmployeeReference`] - an employee id is not active
///   in this store
/// * [`ApiError::Conflict`] / [`ApiError::DuplicateShift`] - concurrent
///   save races, surfaced from the transaction
pub fn save_roster(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    date: &str,
    request: &SaveRosterRequest,
) -> Result<SaveRosterResponse, ApiError> {
    AuthorizationService::authorize_edit_roster(account)?;

    let parsed: Date = parse_roster_date(date)?;
    let date_str: String = format_roster_date(parsed)?;

    let proposals: Vec<ShiftProposal> = request
        .shifts
        .iter()
        .map(|s| {
            ShiftProposal::new(
                s.external_shift_id.clone(),
                s.employee_id,
                s.start_slot,
                s.end_slot,
                s.breaks.clone(),
                s.roles.clone(),
            )
        })
        .collect();

    let violations: Vec<RosterViolation> = validate_roster(&proposals);
    if !violations.is_empty() {
        return Err(ApiError::ValidationFailed {
            violations: violations.iter().map(ToString::to_string).collect(),
        });
    }

    let mut employee_ids: Vec<i64> = proposals.iter().map(|p| p.employee_id).collect();
    employee_ids.sort_unstable();
    employee_ids.dedup();

    let valid_count: i64 = persistence
        .count_active_employees(account.store_id, &employee_ids)
        .map_err(translate_persistence_error)?;
    let referenced_count: i64 =
        i64::try_from(employee_ids.len()).map_err(|e| ApiError::Internal {
            message: format!("Employee count overflow: {e}"),
        })?;
    if valid_count != referenced_count {
        return Err(ApiError::InvalidEmployeeReference {
            message: String::from("One or more employee ids are invalid for this store"),
        });
    }

    persistence
        .replace_roster_day(account.store_id, &date_str, &proposals)
        .map_err(translate_persistence_error)?;

    info!(
        store_id = account.store_id,
        date = %date_str,
        shift_count = proposals.len(),
        "Saved roster day"
    );

    Ok(SaveRosterResponse { saved: true })
}

// ============================================================================
// Employees
// ============================================================================

fn employee_to_response(employee: EmployeeData) -> EmployeeResponse {
    EmployeeResponse {
        id: employee.employee_id,
        display_name: employee.display_name,
        is_active: employee.is_active,
    }
}

/// Lists the caller's store employees ordered by display name.
///
/// # Errors
///
/// Returns an error if the database fails.
pub fn list_employees(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    include_inactive: bool,
) -> Result<Vec<EmployeeResponse>, ApiError> {
    let employees: Vec<EmployeeData> = persistence
        .list_employees(account.store_id, include_inactive)
        .map_err(translate_persistence_error)?;

    Ok(employees.into_iter().map(employee_to_response).collect())
}

/// Fetches one employee of the caller's store.
///
/// # Errors
///
/// Returns [`ApiError::ResourceNotFound`] when the employee does not exist
/// in this store.
pub fn get_employee(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    employee_id: i64,
) -> Result<EmployeeResponse, ApiError> {
    persistence
        .get_employee(account.store_id, employee_id)
        .map_err(translate_persistence_error)?
        .map(employee_to_response)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} does not exist in this store"),
        })
}

/// Creates an active employee in the caller's store.
///
/// Manager only. The display name is trimmed and must not be empty.
///
/// # Errors
///
/// Returns an error if the caller is not a manager, the name is empty, or
/// the database fails.
pub fn create_employee(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    request: &CreateEmployeeRequest,
) -> Result<EmployeeResponse, ApiError> {
    AuthorizationService::authorize_manage_employees(account)?;

    let display_name: &str = request.display_name.trim();
    if display_name.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("display_name"),
            message: String::from("Display name cannot be empty"),
        });
    }

    let employee_id: i64 = persistence
        .create_employee(account.store_id, display_name)
        .map_err(translate_persistence_error)?;

    info!(
        store_id = account.store_id,
        employee_id, "Created employee via API"
    );

    Ok(EmployeeResponse {
        id: employee_id,
        display_name: display_name.to_owned(),
        is_active: true,
    })
}

/// Updates an employee's display name and active flag.
///
/// Manager only.
///
/// # Errors
///
/// Returns an error if the caller is not a manager, the name is empty, the
/// employee is not in this store, or the database fails.
pub fn update_employee(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    employee_id: i64,
    request: &UpdateEmployeeRequest,
) -> Result<EmployeeResponse, ApiError> {
    AuthorizationService::authorize_manage_employees(account)?;

    let display_name: &str = request.display_name.trim();
    if display_name.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("display_name"),
            message: String::from("Display name cannot be empty"),
        });
    }

    persistence
        .update_employee(
            account.store_id,
            employee_id,
            display_name,
            request.is_active,
        )
        .map_err(|e| match e {
            PersistenceError::NotFound(_) => ApiError::ResourceNotFound {
                resource_type: String::from("Employee"),
                message: format!("Employee {employee_id} does not exist in this store"),
            },
            other => translate_persistence_error(other),
        })?;

    Ok(EmployeeResponse {
        id: employee_id,
        display_name: display_name.to_owned(),
        is_active: request.is_active,
    })
}

/// Deactivates an employee (soft delete).
///
/// Manager only. Existing shifts referencing the employee remain readable.
///
/// # Errors
///
/// Returns an error if the caller is not a manager, the employee is not in
/// this store, or the database fails.
pub fn deactivate_employee(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    employee_id: i64,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_manage_employees(account)?;

    persistence
        .deactivate_employee(account.store_id, employee_id)
        .map_err(|e| match e {
            PersistenceError::NotFound(_) => ApiError::ResourceNotFound {
                resource_type: String::from("Employee"),
                message: format!("Employee {employee_id} does not exist in this store"),
            },
            other => translate_persistence_error(other),
        })
}

// ============================================================================
// Sessions
// ============================================================================

/// Logs in and returns a session token.
///
/// # Errors
///
/// Returns an error if authentication fails.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, account): (String, AuthenticatedAccount) =
        AuthenticationService::login(persistence, &request.login_name, &request.password)?;

    let expires_at: String = persistence
        .get_session_by_token(&session_token)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to retrieve session: {e}"),
        })?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Session not found after creation"),
        })?
        .expires_at;

    info!(login_name = %account.login_name, "Account logged in");

    Ok(LoginResponse {
        session_token,
        login_name: account.login_name,
        display_name: account.display_name,
        role: account.role.as_str().to_owned(),
        expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Returns the authenticated caller's information.
#[must_use]
pub fn whoami(account: &AuthenticatedAccount) -> WhoAmIResponse {
    WhoAmIResponse {
        login_name: account.login_name.clone(),
        display_name: account.display_name.clone(),
        role: account.role.as_str().to_owned(),
        store_id: account.store_id,
    }
}
