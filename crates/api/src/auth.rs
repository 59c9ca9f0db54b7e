// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use time::format_description::well_known::Iso8601;
use time::{Duration, OffsetDateTime};
use store_roster_persistence::{AccountData, Persistence, SessionData};

use crate::error::AuthError;

/// Account roles for authorization.
///
/// Roles determine what actions an authenticated account may perform on its
/// store. Every account belongs to exactly one store; roles never cross
/// store boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Manager role: may edit rosters and manage the employee directory in
    /// addition to everything staff can do.
    Manager,
    /// Staff role: read-only access to rosters and the employee directory.
    Staff,
}

impl Role {
    /// Parses a role from its stored string representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid role.
    pub fn parse(s: &str) -> Result<Self, AuthError> {
        match s {
            "Manager" => Ok(Self::Manager),
            "Staff" => Ok(Self::Staff),
            _ => Err(AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {s}"),
            }),
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Staff => "Staff",
        }
    }
}

/// An authenticated account with its resolved store and role.
///
/// This is the identity context every handler trusts completely: the
/// session layer resolves `(store_id, role)` once and the engine performs
/// no further credential checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// The account's canonical identifier.
    pub account_id: i64,
    /// The account's login name.
    pub login_name: String,
    /// The account's display name.
    pub display_name: String,
    /// The store this account belongs to.
    pub store_id: i64,
    /// The role assigned to this account.
    pub role: Role,
}

impl AuthenticatedAccount {
    /// Returns whether this account holds the Manager role.
    #[must_use]
    pub const fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager)
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an account is authorized to edit rosters.
    ///
    /// Only Manager accounts may save a roster day.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not have the Manager role.
    pub fn authorize_edit_roster(account: &AuthenticatedAccount) -> Result<(), AuthError> {
        match account.role {
            Role::Manager => Ok(()),
            Role::Staff => Err(AuthError::Unauthorized {
                action: String::from("save_roster"),
                required_role: String::from("Manager"),
            }),
        }
    }

    /// Checks if an account is authorized to manage employees.
    ///
    /// Only Manager accounts may create, update, or deactivate employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not have the Manager role.
    pub fn authorize_manage_employees(account: &AuthenticatedAccount) -> Result<(), AuthError> {
        match account.role {
            Role::Manager => Ok(()),
            Role::Staff => Err(AuthError::Unauthorized {
                action: String::from("manage_employees"),
                required_role: String::from("Manager"),
            }),
        }
    }
}

/// Authentication service for session-token based login.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates an account by password and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `login_name` - The account login name
    /// * `password` - The plain-text password to verify
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_account`).
    ///
    /// # Errors
    ///
    /// Returns an error if the account is unknown or disabled, the password
    /// does not match, or the session cannot be created.
    pub fn login(
        persistence: &mut Persistence,
        login_name: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedAccount), AuthError> {
        let account: AccountData = persistence
            .get_account_by_login(login_name)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Unknown login name or wrong password"),
            })?;

        if account.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is disabled"),
            });
        }

        let password_matches: bool = persistence
            .verify_password(password, &account.password_hash)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Password verification error: {e}"),
            })?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Unknown login name or wrong password"),
            });
        }

        let role: Role = Role::parse(&account.role)?;
        let session_token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String =
            expires_at
                .format(&Iso8601::DEFAULT)
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Failed to format expiration time: {e}"),
                })?;

        persistence
            .create_session(&session_token, account.account_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        persistence
            .update_last_login(account.account_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        let authenticated: AuthenticatedAccount = AuthenticatedAccount {
            account_id: account.account_id,
            login_name: account.login_name,
            display_name: account.display_name,
            store_id: account.store_id,
            role,
        };

        Ok((session_token, authenticated))
    }

    /// Validates a session token and resolves the account behind it.
    ///
    /// Touches the session's last-activity timestamp on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unknown, the session has expired,
    /// or the account is disabled.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<AuthenticatedAccount, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(&session.expires_at, &Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Malformed session expiration: {e}"),
            })?;
        if expires_at <= OffsetDateTime::now_utc() {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session has expired"),
            });
        }

        let account: AccountData = persistence
            .get_account_by_id(session.account_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Session account no longer exists"),
            })?;

        if account.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is disabled"),
            });
        }

        let role: Role = Role::parse(&account.role)?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update session activity: {e}"),
            })?;

        Ok(AuthenticatedAccount {
            account_id: account.account_id,
            login_name: account.login_name,
            display_name: account.display_name,
            store_id: account.store_id,
            role,
        })
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be deleted.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })
    }

    /// Generates a unique session token.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }
}
