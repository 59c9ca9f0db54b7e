// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction and authentication middleware for the server.
//!
//! This module provides an Axum extractor that validates session tokens and
//! enforces authentication at the server boundary.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use store_roster_api::{AuthenticatedAccount, AuthenticationService};
use tracing::{debug, warn};

use crate::AppState;

/// Extractor for authenticated accounts.
///
/// Validates the `Authorization: Bearer <token>` header and resolves the
/// caller's `(store_id, role)` context. The token is carried alongside the
/// account so logout can delete the right session.
///
/// # Authentication Flow
///
/// 1. Extract `Authorization: Bearer <token>` header
/// 2. Validate the session via `AuthenticationService::validate_session`
/// 3. Check session expiration and account disabled status
/// 4. Return the `AuthenticatedAccount` and the raw token
///
/// # Errors
///
/// Rejects with HTTP 401 Unauthorized if the header is missing or
/// malformed, the token is invalid, the session has expired, or the account
/// is disabled.
pub struct SessionAccount(pub AuthenticatedAccount, pub String);

impl FromRequestParts<AppState> for SessionAccount {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let mut persistence = state.persistence.lock().await;
        let account = AuthenticationService::validate_session(&mut persistence, token).map_err(
            |e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            },
        )?;
        drop(persistence);

        debug!(
            login_name = %account.login_name,
            store_id = account.store_id,
            role = ?account.role,
            "Session validated successfully"
        );

        Ok(Self(account, token.to_owned()))
    }
}

/// Session extraction errors.
///
/// These errors are returned when session validation fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                String::from("Missing Authorization header"),
            ),
            Self::InvalidAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                String::from("Invalid Authorization header; expected 'Bearer <token>'"),
            ),
            Self::InvalidSession(reason) => (StatusCode::UNAUTHORIZED, reason),
        };

        let body = axum::Json(crate::ErrorResponse {
            error: true,
            message,
            violations: None,
        });
        (status, body).into_response()
    }
}
