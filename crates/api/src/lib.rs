// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedAccount, AuthenticationService, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_persistence_error};
pub use handlers::{
    create_employee, deactivate_employee, get_employee, get_roster, list_employees, login, logout,
    save_roster, update_employee, whoami,
};
pub use request_response::{
    CreateEmployeeRequest, EmployeeResponse, EmployeeSummary, LoginRequest, LoginResponse,
    RosterResponse, RosterShiftResponse, SaveRosterRequest, SaveRosterResponse, ShiftPayload,
    UpdateEmployeeRequest, WhoAmIResponse,
};
