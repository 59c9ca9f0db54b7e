// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use store_roster_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the caller does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The submitted roster violated one or more validation rules.
    ///
    /// Carries the full accumulated list so a client can show every problem
    /// at once. Nothing was applied.
    ValidationFailed {
        /// Human-readable violation messages, one per rule failure.
        violations: Vec<String>,
    },
    /// A referenced employee is not a valid, active employee of the store.
    ///
    /// Detected before any transactional work begins.
    InvalidEmployeeReference {
        /// A human-readable description of the error.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Another writer modified the roster day concurrently.
    ///
    /// The caller should refetch and resubmit; never auto-retried.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A shift uniqueness constraint fired despite pre-validation, due to a
    /// race with a concurrent save. Distinct from [`Self::Conflict`] so the
    /// client can decide whether to retry.
    DuplicateShift {
        /// A human-readable description of the duplicate.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::ValidationFailed { violations } => {
                write!(f, "Roster validation failed: {}", violations.join("; "))
            }
            Self::InvalidEmployeeReference { message } => {
                write!(f, "Invalid employee reference: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => {
                write!(f, "Conflict: {message}")
            }
            Self::DuplicateShift { message } => {
                write!(f, "Duplicate shift: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures persistence errors are not
/// leaked directly. The conflict/duplicate classifications map onto the
/// distinct API failure modes of the save protocol; everything else is an
/// internal error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::RosterConflict(message) => ApiError::Conflict {
            message: format!("{message}. Refresh and try again"),
        },
        PersistenceError::DuplicateShift(message) => ApiError::DuplicateShift {
            message: format!("{message}. Check your payload"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
