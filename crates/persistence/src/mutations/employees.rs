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

/// Creates an employee (`SQLite` version).
///
/// Hand-written per backend: the new id is read back via
/// `last_insert_rowid()`.
///
/// # Arguments
///
/// * `store_id` - The owning store
/// * `display_name` - The employee's display name (stored as given)
/// * `created_at` - ISO 8601 creation timestamp
///
/// # Returns
///
/// The generated `employee_id`.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_employee_sqlite(
    conn: &mut SqliteConnection,
    store_id: i64,
    display_name: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(diesel_schema::employees::table)
        .values((
            diesel_schema::employees::store_id.eq(store_id),
            diesel_schema::employees::display_name.eq(display_name),
            diesel_schema::employees::is_active.eq(1),
            diesel_schema::employees::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let employee_id: i64 = backend::sqlite::get_last_insert_rowid(conn)?;
    debug!(store_id, employee_id, "Created employee");
    Ok(employee_id)
}

/// Creates an employee (`MySQL` version).
///
/// Hand-written per backend: the new id is read back via
/// `LAST_INSERT_ID()`.
///
/// # Arguments
///
/// * `store_id` - The owning store
/// * `display_name` - The employee's display name (stored as given)
/// * `created_at` - ISO 8601 creation timestamp
///
/// # Returns
///
/// The generated `employee_id`.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_employee_mysql(
    conn: &mut MysqlConnection,
    store_id: i64,
    display_name: &str,
    created_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(diesel_schema::employees::table)
        .values((
            diesel_schema::employees::store_id.eq(store_id),
            diesel_schema::employees::display_name.eq(display_name),
            diesel_schema::employees::is_active.eq(1),
            diesel_schema::employees::created_at.eq(created_at),
        ))
        .execute(conn)?;

    let employee_id: i64 = backend::mysql::get_last_insert_id(conn)?;
    debug!(store_id, employee_id, "Created employee");
    Ok(employee_id)
}

backend_fn! {
    /// Updates an employee's display name and active flag.
    ///
    /// Scoped to the store so one store can never edit another's employees.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::NotFound`] if the employee does not exist
    /// in the store, or an error if the update fails.
    pub fn update_employee(
        conn: &mut _,
        store_id: i64,
        employee_id: i64,
        display_name: &str,
        is_active: bool,
    ) -> Result<(), PersistenceError> {
        let rows_affected: usize = diesel::update(
            diesel_schema::employees::table
                .filter(diesel_schema::employees::employee_id.eq(employee_id))
                .filter(diesel_schema::employees::store_id.eq(store_id)),
        )
        .set((
            diesel_schema::employees::display_name.eq(display_name),
            diesel_schema::employees::is_active.eq(i32::from(is_active)),
        ))
        .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(String::from(
                "Employee not found",
            )));
        }

        debug!(store_id, employee_id, is_active, "Updated employee");
        Ok(())
    }
}

backend_fn! {
    /// Deactivates an employee (soft delete).
    ///
    /// The employee's existing shifts remain readable; only new assignments
    /// are blocked.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::NotFound`] if the employee does not exist
    /// in the store, or an error if the update fails.
    pub fn deactivate_employee(
        conn: &mut _,
        store_id: i64,
        employee_id: i64,
    ) -> Result<(), PersistenceError> {
        let rows_affected: usize = diesel::update(
            diesel_schema::employees::table
                .filter(diesel_schema::employees::employee_id.eq(employee_id))
                .filter(diesel_schema::employees::store_id.eq(store_id)),
        )
        .set(diesel_schema::employees::is_active.eq(0))
        .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(String::from(
                "Employee not found",
            )));
        }

        debug!(store_id, employee_id, "Deactivated employee");
        Ok(())
    }
}
