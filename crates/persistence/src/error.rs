// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::DatabaseErrorKind;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Another writer modified the same roster day concurrently.
    ///
    /// Surfaces when a concurrent save created the `(store, date)` roster
    /// day first, when the transaction hits a serialization failure, or when
    /// the database reports itself busy/locked. The caller should refetch
    /// and resubmit; the save is never retried internally.
    RosterConflict(String),
    /// A shift uniqueness constraint fired during insert.
    ///
    /// A duplicate employee or duplicate external shift id slipped past
    /// validation due to a race with a concurrent save. Distinct from
    /// [`Self::RosterConflict`] so callers can decide whether to retry.
    DuplicateShift(String),
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::RosterConflict(msg) => write!(f, "Roster conflict: {msg}"),
            Self::DuplicateShift(msg) => write!(f, "Duplicate shift: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::SerializationFailure, info) => {
                Self::RosterConflict(info.message().to_string())
            }
            diesel::result::Error::DatabaseError(kind, info)
                if is_busy(&kind, info.message()) =>
            {
                Self::RosterConflict(info.message().to_string())
            }
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Detects a busy/locked database, which SQLite reports as a generic
/// database error rather than a serialization failure.
fn is_busy(kind: &DatabaseErrorKind, message: &str) -> bool {
    matches!(kind, DatabaseErrorKind::Unknown) && message.contains("database is locked")
}

/// Checks whether a Diesel error is a uniqueness-constraint violation.
///
/// The save protocol uses this to classify constraint hits by the statement
/// that raised them (roster day creation race vs duplicate shift insert).
#[must_use]
pub(crate) fn is_unique_violation(err: &diesel::result::Error) -> bool {
    matches!(
        err,
        diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}
