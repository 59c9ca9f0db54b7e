// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-specific database support.
//!
//! Everything that cannot be expressed in backend-agnostic Diesel DSL lives
//! here: connection initialization, migration execution, PRAGMA/variable
//! checks, and last-insert-id retrieval. Domain queries and mutations must
//! stay out of this module.

use diesel::{MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

pub mod mysql;
pub mod sqlite;

/// Backend-specific operations exposed uniformly over both connections.
pub trait PersistenceBackend {
    /// Verifies that foreign key enforcement is enabled on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if enforcement is off or the check fails.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }
}
