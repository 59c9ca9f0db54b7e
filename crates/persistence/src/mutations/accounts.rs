// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::backend;
use crate::diesel_schema;
use crate::error::PersistenceError;

/// Creates a store (`SQLite` version).
///
/// # Arguments
///
/// * `code` - Store code, unique across the system
/// * `name` - Store display name
///
/// # Returns
///
/// The generated `store_id`.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate code).
pub fn create_store_sqlite(
    conn: &mut SqliteConnection,
    code: &str,
    name: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(diesel_schema::stores::table)
        .values((
            diesel_schema::stores::code.eq(code),
            diesel_schema::stores::name.eq(name),
        ))
        .execute(conn)?;

    let store_id: i64 = backend::sqlite::get_last_insert_rowid(conn)?;
    debug!(store_id, code, "Created store");
    Ok(store_id)
}

/// Creates a store (`MySQL` version).
///
/// # Arguments
///
/// * `code` - Store code, unique across the system
/// * `name` - Store display name
///
/// # Returns
///
/// The generated `store_id`.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate code).
pub fn create_store_mysql(
    conn: &mut MysqlConnection,
    code: &str,
    name: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(diesel_schema::stores::table)
        .values((
            diesel_schema::stores::code.eq(code),
            diesel_schema::stores::name.eq(name),
        ))
        .execute(conn)?;

    let store_id: i64 = backend::mysql::get_last_insert_id(conn)?;
    debug!(store_id, code, "Created store");
    Ok(store_id)
}

/// Creates a login account (`SQLite` version).
///
/// The password is hashed with bcrypt before storage.
///
/// # Arguments
///
/// * `login_name` - Unique login name
/// * `display_name` - Display name
/// * `password` - Plain-text password (hashed here, never stored)
/// * `store_id` - The store the account belongs to
/// * `role` - `"Manager"` or `"Staff"`
/// * `created_at` - ISO 8601 creation timestamp
///
/// # Returns
///
/// The generated `account_id`.
///
/// # Errors
///
/// Returns an error if hashing or the insert fails.
pub fn create_account_sqlite(
    conn: &mut SqliteConnection,
    login_name: &str,
    display_name: &str,
    password: &str,
    store_id: i64,
    role: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::DatabaseError(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(diesel_schema::accounts::table)
        .values((
            diesel_schema::accounts::login_name.eq(login_name),
            diesel_schema::accounts::display_name.eq(display_name),
            diesel_schema::accounts::password_hash.eq(&password_hash),
            diesel_schema::accounts::store_id.eq(store_id),
            diesel_schema::accounts::role.eq(role),
            diesel_schema::accounts::is_disabled.eq(0),
            diesel_schema::accounts::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let account_id: i64 = backend::sqlite::get_last_insert_rowid(conn)?;
    debug!(account_id, login_name, role, "Created account");
    Ok(account_id)
}

/// Creates a login account (`MySQL` version).
///
/// The password is hashed with bcrypt before storage.
///
/// # Arguments
///
/// * `login_name` - Unique login name
/// * `display_name` - Display name
/// * `password` - Plain-text password (hashed here, never stored)
/// * `store_id` - The store the account belongs to
/// * `role` - `"Manager"` or `"Staff"`
/// * `created_at` - ISO 8601 creation timestamp
///
/// # Returns
///
/// The generated `account_id`.
///
/// # Errors
///
/// Returns an error if hashing or the insert fails.
pub fn create_account_mysql(
    conn: &mut MysqlConnection,
    login_name: &str,
    display_name: &str,
    password: &str,
    store_id: i64,
    role: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::DatabaseError(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(diesel_schema::accounts::table)
        .values((
            diesel_schema::accounts::login_name.eq(login_name),
            diesel_schema::accounts::display_name.eq(display_name),
            diesel_schema::accounts::password_hash.eq(&password_hash),
            diesel_schema::accounts::store_id.eq(store_id),
            diesel_schema::accounts::role.eq(role),
            diesel_schema::accounts::is_disabled.eq(0),
            diesel_schema::accounts::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let account_id: i64 = backend::mysql::get_last_insert_id(conn)?;
    debug!(account_id, login_name, role, "Created account");
    Ok(account_id)
}

backend_fn! {
    /// Records a successful login.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(
        conn: &mut _,
        account_id: i64,
        now: &str,
    ) -> Result<(), PersistenceError> {
        diesel::update(
            diesel_schema::accounts::table
                .filter(diesel_schema::accounts::account_id.eq(account_id)),
        )
        .set(diesel_schema::accounts::last_login_at.eq(Some(now)))
        .execute(conn)?;
        Ok(())
    }
}

backend_fn! {
    /// Disables an account.
    ///
    /// Disabled accounts can no longer log in or use existing sessions.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::NotFound`] if the account does not
    /// exist, or an error if the update fails.
    pub fn disable_account(
        conn: &mut _,
        account_id: i64,
    ) -> Result<(), PersistenceError> {
        let rows_affected: usize = diesel::update(
            diesel_schema::accounts::table
                .filter(diesel_schema::accounts::account_id.eq(account_id)),
        )
        .set(diesel_schema::accounts::is_disabled.eq(1))
        .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(String::from(
                "Account not found",
            )));
        }

        debug!(account_id, "Disabled account");
        Ok(())
    }
}

backend_fn! {
    /// Creates a session row for an account.
    ///
    /// # Arguments
    ///
    /// * `session_token` - Unique session token
    /// * `account_id` - The authenticated account
    /// * `now` - ISO 8601 creation timestamp
    /// * `expires_at` - ISO 8601 expiration timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        conn: &mut _,
        session_token: &str,
        account_id: i64,
        now: &str,
        expires_at: &str,
    ) -> Result<(), PersistenceError> {
        diesel::insert_into(diesel_schema::sessions::table)
            .values((
                diesel_schema::sessions::session_token.eq(session_token),
                diesel_schema::sessions::account_id.eq(account_id),
                diesel_schema::sessions::created_at.eq(now),
                diesel_schema::sessions::last_activity_at.eq(now),
                diesel_schema::sessions::expires_at.eq(expires_at),
            ))
            .execute(conn)?;
        debug!(account_id, "Created session");
        Ok(())
    }
}

backend_fn! {
    /// Updates a session's last activity timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(
        conn: &mut _,
        session_id: i64,
        now: &str,
    ) -> Result<(), PersistenceError> {
        diesel::update(
            diesel_schema::sessions::table
                .filter(diesel_schema::sessions::session_id.eq(session_id)),
        )
        .set(diesel_schema::sessions::last_activity_at.eq(now))
        .execute(conn)?;
        Ok(())
    }
}

backend_fn! {
    /// Deletes a session by token (logout).
    ///
    /// Deleting an unknown token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(
        conn: &mut _,
        session_token: &str,
    ) -> Result<(), PersistenceError> {
        diesel::delete(
            diesel_schema::sessions::table
                .filter(diesel_schema::sessions::session_token.eq(session_token)),
        )
        .execute(conn)?;
        Ok(())
    }
}

backend_fn! {
    /// Deletes all sessions that expired before `now`.
    ///
    /// # Returns
    ///
    /// The number of sessions removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_expired_sessions(
        conn: &mut _,
        now: &str,
    ) -> Result<usize, PersistenceError> {
        let deleted: usize = diesel::delete(
            diesel_schema::sessions::table
                .filter(diesel_schema::sessions::expires_at.lt(now)),
        )
        .execute(conn)?;
        debug!(deleted, "Deleted expired sessions");
        Ok(deleted)
    }
}
