// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use store_roster_domain::ShiftProposal;
use tracing::debug;

use crate::diesel_schema;
use crate::error::{PersistenceError, is_unique_violation};

backend_fn! {
    /// Atomically replaces every shift of a `(store, date)` roster day.
    ///
    /// Runs one transaction that upserts the roster day row, touches its
    /// `updated_at` timestamp, deletes all existing shifts, and inserts the
    /// full new set with breaks/roles serialized as JSON payloads. Either
    /// the whole day is replaced or nothing changes.
    ///
    /// Caller contract: the proposals have passed roster validation and the
    /// membership check. The uniqueness constraints on `shifts` remain the
    /// backstop against concurrent saves racing past both.
    ///
    /// # Arguments
    ///
    /// * `store_id` - The owning store
    /// * `date` - ISO 8601 calendar date
    /// * `now` - ISO 8601 timestamp to record as `updated_at`
    /// * `proposals` - The validated replacement shift set
    ///
    /// # Errors
    ///
    /// * [`PersistenceError::RosterConflict`] - another writer created the
    ///   same roster day first, or the transaction could not be serialized;
    ///   the caller should refetch and resubmit
    /// * [`PersistenceError::DuplicateShift`] - a shift uniqueness
    ///   constraint fired during insert (duplicate employee or external id
    ///   racing a concurrent save)
    /// * [`PersistenceError::SerializationError`] - a break/role payload
    ///   could not be encoded
    /// * [`PersistenceError::DatabaseError`] - any other database failure
    pub fn replace_roster_day(
        conn: &mut _,
        store_id: i64,
        date: &str,
        now: &str,
        proposals: &[ShiftProposal],
    ) -> Result<(), PersistenceError> {
        conn.transaction::<(), PersistenceError, _>(|conn| {
            let existing: Option<i64> = diesel_schema::roster_days::table
                .filter(diesel_schema::roster_days::store_id.eq(store_id))
                .filter(diesel_schema::roster_days::date.eq(date))
                .select(diesel_schema::roster_days::roster_day_id)
                .first::<i64>(conn)
                .optional()?;

            let roster_day_id: i64 = match existing {
                Some(id) => {
                    diesel::update(
                        diesel_schema::roster_days::table
                            .filter(diesel_schema::roster_days::roster_day_id.eq(id)),
                    )
                    .set(diesel_schema::roster_days::updated_at.eq(now))
                    .execute(conn)?;
                    id
                }
                None => {
                    diesel::insert_into(diesel_schema::roster_days::table)
                        .values((
                            diesel_schema::roster_days::store_id.eq(store_id),
                            diesel_schema::roster_days::date.eq(date),
                            diesel_schema::roster_days::updated_at.eq(now),
                        ))
                        .execute(conn)
                        .map_err(|e| {
                            // A unique hit on (store_id, date) means another
                            // writer created this day between our lookup and
                            // the insert.
                            if is_unique_violation(&e) {
                                PersistenceError::RosterConflict(format!(
                                    "Roster day for store {store_id} on {date} \
                                     was created by a concurrent save"
                                ))
                            } else {
                                e.into()
                            }
                        })?;

                    diesel_schema::roster_days::table
                        .filter(diesel_schema::roster_days::store_id.eq(store_id))
                        .filter(diesel_schema::roster_days::date.eq(date))
                        .select(diesel_schema::roster_days::roster_day_id)
                        .first::<i64>(conn)?
                }
            };

            let deleted: usize = diesel::delete(
                diesel_schema::shifts::table
                    .filter(diesel_schema::shifts::roster_day_id.eq(roster_day_id)),
            )
            .execute(conn)?;

            for proposal in proposals {
                let breaks_json: String = serde_json::to_string(&proposal.breaks)?;
                let roles_json: String = serde_json::to_string(&proposal.roles)?;

                diesel::insert_into(diesel_schema::shifts::table)
                    .values((
                        diesel_schema::shifts::roster_day_id.eq(roster_day_id),
                        diesel_schema::shifts::employee_id.eq(proposal.employee_id),
                        diesel_schema::shifts::external_shift_id
                            .eq(proposal.trimmed_external_id()),
                        diesel_schema::shifts::start_slot.eq(i32::from(proposal.start_slot)),
                        diesel_schema::shifts::end_slot.eq(i32::from(proposal.end_slot)),
                        diesel_schema::shifts::breaks_json.eq(&breaks_json),
                        diesel_schema::shifts::roles_json.eq(&roles_json),
                    ))
                    .execute(conn)
                    .map_err(|e| {
                        if is_unique_violation(&e) {
                            PersistenceError::DuplicateShift(format!(
                                "Duplicate shift for employee {} or external id '{}'",
                                proposal.employee_id,
                                proposal.trimmed_external_id()
                            ))
                        } else {
                            e.into()
                        }
                    })?;
            }

            debug!(
                store_id,
                date,
                roster_day_id,
                deleted,
                inserted = proposals.len(),
                "Replaced roster day shifts"
            );

            Ok(())
        })
    }
}
