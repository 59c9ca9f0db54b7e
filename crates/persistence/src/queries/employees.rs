// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::EmployeeData;
use crate::diesel_schema;
use crate::error::PersistenceError;

type EmployeeRow = (i64, i64, String, i32, String);

fn row_to_employee(row: EmployeeRow) -> EmployeeData {
    let (employee_id, store_id, display_name, is_active, created_at) = row;
    EmployeeData {
        employee_id,
        store_id,
        display_name,
        is_active: is_active != 0,
        created_at,
    }
}

backend_fn! {
    /// Lists a store's employees ordered by display name.
    ///
    /// # Arguments
    ///
    /// * `store_id` - The owning store
    /// * `include_inactive` - Whether deactivated employees are included
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_employees(
        conn: &mut _,
        store_id: i64,
        include_inactive: bool,
    ) -> Result<Vec<EmployeeData>, PersistenceError> {
        let mut query = diesel_schema::employees::table
            .filter(diesel_schema::employees::store_id.eq(store_id))
            .select((
                diesel_schema::employees::employee_id,
                diesel_schema::employees::store_id,
                diesel_schema::employees::display_name,
                diesel_schema::employees::is_active,
                diesel_schema::employees::created_at,
            ))
            .into_boxed();

        if !include_inactive {
            query = query.filter(diesel_schema::employees::is_active.eq(1));
        }

        let rows: Vec<EmployeeRow> = query
            .order(diesel_schema::employees::display_name.asc())
            .load::<EmployeeRow>(conn)?;

        Ok(rows.into_iter().map(row_to_employee).collect())
    }
}

backend_fn! {
    /// Looks up one employee scoped to a store.
    ///
    /// Returns `None` when the employee does not exist or belongs to a
    /// different store; callers cannot observe other stores' employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_employee(
        conn: &mut _,
        store_id: i64,
        employee_id: i64,
    ) -> Result<Option<EmployeeData>, PersistenceError> {
        let row: Option<EmployeeRow> = diesel_schema::employees::table
            .filter(diesel_schema::employees::employee_id.eq(employee_id))
            .filter(diesel_schema::employees::store_id.eq(store_id))
            .select((
                diesel_schema::employees::employee_id,
                diesel_schema::employees::store_id,
                diesel_schema::employees::display_name,
                diesel_schema::employees::is_active,
                diesel_schema::employees::created_at,
            ))
            .first::<EmployeeRow>(conn)
            .optional()?;

        Ok(row.map(row_to_employee))
    }
}

backend_fn! {
    /// Counts how many of the given ids are active employees of the store.
    ///
    /// The save protocol compares this count against the number of distinct
    /// referenced ids before opening a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn count_active_employees(
        conn: &mut _,
        store_id: i64,
        employee_ids: &[i64],
    ) -> Result<i64, PersistenceError> {
        let count: i64 = diesel_schema::employees::table
            .filter(diesel_schema::employees::store_id.eq(store_id))
            .filter(diesel_schema::employees::is_active.eq(1))
            .filter(diesel_schema::employees::employee_id.eq_any(employee_ids))
            .count()
            .get_result(conn)?;

        Ok(count)
    }
}
