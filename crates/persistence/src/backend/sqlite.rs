// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! This module is limited to connection initialization, migration execution,
//! PRAGMA configuration, and SQLite workarounds (`last_insert_rowid()`).

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

/// SQLite-specific migrations.
///
/// These migrations use SQLite syntax and are the default for development
/// and standard testing.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Helper row struct for PRAGMA queries.
///
/// Raw SQL is justified here: Diesel has no PRAGMA DSL.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Opens a `SQLite` connection, enables foreign keys, and runs migrations.
///
/// # Arguments
///
/// * `database_url` - File path or `file:...?mode=memory` URL
///
/// # Errors
///
/// Returns an error if the connection cannot be established or a migration
/// fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    // PRAGMA is per-connection in SQLite; enforcement must be switched on
    // before anything touches the schema.
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| {
            PersistenceError::InitializationError(format!("Failed to enable foreign keys: {e}"))
        })?;

    run_migrations(&mut conn)?;

    info!(database_url, "Initialized SQLite database");
    Ok(conn)
}

/// Runs all pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    Ok(())
}

/// Enables WAL journal mode for better read concurrency on file databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // PRAGMA journal_mode returns the resulting mode as a row.
    #[derive(QueryableByName)]
    struct JournalModeRow {
        #[diesel(sql_type = diesel::sql_types::Text)]
        journal_mode: String,
    }

    let row: JournalModeRow = diesel::sql_query("PRAGMA journal_mode = WAL")
        .get_result(conn)
        .map_err(|e| {
            PersistenceError::InitializationError(format!("Failed to enable WAL mode: {e}"))
        })?;
    info!(journal_mode = %row.journal_mode, "SQLite journal mode configured");
    Ok(())
}

/// Verifies that foreign key enforcement is enabled.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    Ok(())
}

/// Returns the row id assigned by the most recent insert.
///
/// `SQLite` does not support `RETURNING` in all contexts, so new ids are
/// read back via `last_insert_rowid()`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}
