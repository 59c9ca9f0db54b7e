// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{RosterDayData, ShiftData};
use crate::diesel_schema;
use crate::error::PersistenceError;

backend_fn! {
    /// Looks up the roster day for a `(store, date)` pair.
    ///
    /// Returns `None` when no roster has been saved for that date; an
    /// unsaved day is a valid empty roster, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_roster_day(
        conn: &mut _,
        store_id: i64,
        date: &str,
    ) -> Result<Option<RosterDayData>, PersistenceError> {
        let row: Option<(i64, i64, String, String)> = diesel_schema::roster_days::table
            .filter(diesel_schema::roster_days::store_id.eq(store_id))
            .filter(diesel_schema::roster_days::date.eq(date))
            .select((
                diesel_schema::roster_days::roster_day_id,
                diesel_schema::roster_days::store_id,
                diesel_schema::roster_days::date,
                diesel_schema::roster_days::updated_at,
            ))
            .first::<(i64, i64, String, String)>(conn)
            .optional()?;

        Ok(row.map(|(roster_day_id, store_id, date, updated_at)| RosterDayData {
            roster_day_id,
            store_id,
            date,
            updated_at,
        }))
    }
}

backend_fn! {
    /// Lists the shifts of a roster day ordered by ascending start slot.
    ///
    /// Break and role payloads are returned still JSON-encoded; decoding is
    /// the read projection's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_shifts(
        conn: &mut _,
        roster_day_id: i64,
    ) -> Result<Vec<ShiftData>, PersistenceError> {
        type ShiftRow = (i64, i64, i64, String, i32, i32, String, String);

        let rows: Vec<ShiftRow> = diesel_schema::shifts::table
            .filter(diesel_schema::shifts::roster_day_id.eq(roster_day_id))
            .select((
                diesel_schema::shifts::shift_id,
                diesel_schema::shifts::roster_day_id,
                diesel_schema::shifts::employee_id,
                diesel_schema::shifts::external_shift_id,
                diesel_schema::shifts::start_slot,
                diesel_schema::shifts::end_slot,
                diesel_schema::shifts::breaks_json,
                diesel_schema::shifts::roles_json,
            ))
            .order((
                diesel_schema::shifts::start_slot.asc(),
                diesel_schema::shifts::shift_id.asc(),
            ))
            .load::<ShiftRow>(conn)?;

        Ok(rows
            .into_iter()
            .map(
                |(
                    shift_id,
                    roster_day_id,
                    employee_id,
                    external_shift_id,
                    start_slot,
                    end_slot,
                    breaks_json,
                    roles_json,
                )| ShiftData {
                    shift_id,
                    roster_day_id,
                    employee_id,
                    external_shift_id,
                    start_slot,
                    end_slot,
                    breaks_json,
                    roles_json,
                },
            )
            .collect())
    }
}
