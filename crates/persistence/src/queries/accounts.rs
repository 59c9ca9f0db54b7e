// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{AccountData, SessionData};
use crate::diesel_schema;
use crate::error::PersistenceError;

type AccountRow = (
    i64,
    String,
    String,
    String,
    i64,
    String,
    i32,
    String,
    Option<String>,
);

fn row_to_account(row: AccountRow) -> AccountData {
    let (
        account_id,
        login_name,
        display_name,
        password_hash,
        store_id,
        role,
        is_disabled,
        created_at,
        last_login_at,
    ) = row;
    AccountData {
        account_id,
        login_name,
        display_name,
        password_hash,
        store_id,
        role,
        is_disabled: is_disabled != 0,
        created_at,
        last_login_at,
    }
}

backend_fn! {
    /// Looks up an account by login name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_account_by_login(
        conn: &mut _,
        login_name: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        let row: Option<AccountRow> = diesel_schema::accounts::table
            .filter(diesel_schema::accounts::login_name.eq(login_name))
            .select((
                diesel_schema::accounts::account_id,
                diesel_schema::accounts::login_name,
                diesel_schema::accounts::display_name,
                diesel_schema::accounts::password_hash,
                diesel_schema::accounts::store_id,
                diesel_schema::accounts::role,
                diesel_schema::accounts::is_disabled,
                diesel_schema::accounts::created_at,
                diesel_schema::accounts::last_login_at,
            ))
            .first::<AccountRow>(conn)
            .optional()?;

        Ok(row.map(row_to_account))
    }
}

backend_fn! {
    /// Looks up an account by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_account_by_id(
        conn: &mut _,
        account_id: i64,
    ) -> Result<Option<AccountData>, PersistenceError> {
        let row: Option<AccountRow> = diesel_schema::accounts::table
            .filter(diesel_schema::accounts::account_id.eq(account_id))
            .select((
                diesel_schema::accounts::account_id,
                diesel_schema::accounts::login_name,
                diesel_schema::accounts::display_name,
                diesel_schema::accounts::password_hash,
                diesel_schema::accounts::store_id,
                diesel_schema::accounts::role,
                diesel_schema::accounts::is_disabled,
                diesel_schema::accounts::created_at,
                diesel_schema::accounts::last_login_at,
            ))
            .first::<AccountRow>(conn)
            .optional()?;

        Ok(row.map(row_to_account))
    }
}

backend_fn! {
    /// Looks up a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_session_by_token(
        conn: &mut _,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        type SessionRow = (i64, String, i64, String, String, String);

        let row: Option<SessionRow> = diesel_schema::sessions::table
            .filter(diesel_schema::sessions::session_token.eq(session_token))
            .select((
                diesel_schema::sessions::session_id,
                diesel_schema::sessions::session_token,
                diesel_schema::sessions::account_id,
                diesel_schema::sessions::created_at,
                diesel_schema::sessions::last_activity_at,
                diesel_schema::sessions::expires_at,
            ))
            .first::<SessionRow>(conn)
            .optional()?;

        Ok(row.map(
            |(session_id, session_token, account_id, created_at, last_activity_at, expires_at)| {
                SessionData {
                    session_id,
                    session_token,
                    account_id,
                    created_at,
                    last_activity_at,
                    expires_at,
                }
            },
        ))
    }
}

/// Verifies a password against a stored bcrypt hash.
///
/// Backend-agnostic utility; no database access.
///
/// # Errors
///
/// Returns an error if the stored hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::DatabaseError(format!("Password verification failed: {e}")))
}
