// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bill mutations.
//!
//! Every mutation runs in a single transaction. The `UNIQUE` constraint on
//! `bills.date` is the only guard against duplicate dates; violations are
//! reported as `PersistenceError::DuplicateDate`.

use bill_tracker_domain::{Bill, BillDraft};
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{BillChangeset, NewBillRow};
use crate::diesel_schema::bills;
use crate::error::PersistenceError;
use crate::queries::bills::get_bill;

/// Timestamp layout shared with `CURRENT_TIMESTAMP`, extended to microseconds.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]");

/// Formats the current UTC time for the `created_at`/`updated_at` columns.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn current_timestamp() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}

/// Maps a unique-constraint failure on a write to `DuplicateDate`.
fn map_date_conflict(err: diesel::result::Error, date: &str) -> PersistenceError {
    match err {
        diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            PersistenceError::DuplicateDate(date.to_string())
        }
        other => other.into(),
    }
}

/// Inserts a new bill and returns it as stored.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `draft` - The validated bill fields
/// * `now` - The timestamp recorded as both `created_at` and `updated_at`
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateDate` if another bill holds the
/// same date, or an error if the insert fails.
pub fn insert_bill(
    conn: &mut SqliteConnection,
    draft: &BillDraft,
    now: &str,
) -> Result<Bill, PersistenceError> {
    conn.transaction(|conn| {
        diesel::insert_into(bills::table)
            .values(NewBillRow::from_draft(draft, now))
            .execute(conn)
            .map_err(|e| map_date_conflict(e, draft.date()))?;

        let bill_id: i64 = get_last_insert_rowid(conn)?;
        info!(bill_id, date = draft.date(), "Inserted bill");

        get_bill(conn, bill_id)
    })
}

/// Replaces the date and amounts of an existing bill.
///
/// `id` and `created_at` are preserved and `updated_at` is set to `now`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `bill_id` - The bill to update
/// * `draft` - The validated replacement fields
/// * `now` - The new `updated_at` value
///
/// # Errors
///
/// Returns an error if:
/// - No bill has this ID (`BillNotFound`)
/// - A different bill already holds the new date (`DuplicateDate`)
/// - The database operation fails
pub fn update_bill(
    conn: &mut SqliteConnection,
    bill_id: i64,
    draft: &BillDraft,
    now: &str,
) -> Result<Bill, PersistenceError> {
    conn.transaction(|conn| {
        let rows_affected: usize = diesel::update(bills::table.filter(bills::id.eq(bill_id)))
            .set(BillChangeset::from_draft(draft, now))
            .execute(conn)
            .map_err(|e| map_date_conflict(e, draft.date()))?;

        if rows_affected == 0 {
            return Err(PersistenceError::BillNotFound(bill_id));
        }

        info!(bill_id, date = draft.date(), "Updated bill");
        get_bill(conn, bill_id)
    })
}

/// Permanently deletes a bill.
///
/// # Errors
///
/// Returns `PersistenceError::BillNotFound` if no bill has this ID,
/// or an error if the delete fails.
pub fn delete_bill(conn: &mut SqliteConnection, bill_id: i64) -> Result<(), PersistenceError> {
    debug!(bill_id, "Attempting to delete bill");

    let rows_affected: usize =
        diesel::delete(bills::table.filter(bills::id.eq(bill_id))).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::BillNotFound(bill_id));
    }

    info!(bill_id, "Deleted bill");
    Ok(())
}
