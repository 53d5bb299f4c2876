// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bill queries.
//!
//! Dates are stored as `YYYY-MM-DD` text, so lexical ordering on the
//! `date` column is chronological ordering.

use bill_tracker_domain::{Bill, HISTORY_WINDOW};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::BillRow;
use crate::diesel_schema::bills;
use crate::error::PersistenceError;

/// Lists every bill, newest date first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_bills(conn: &mut SqliteConnection) -> Result<Vec<Bill>, PersistenceError> {
    let rows: Vec<BillRow> = bills::table
        .order(bills::date.desc())
        .select(BillRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded bills");
    Ok(rows.into_iter().map(Bill::from).collect())
}

/// Gets a single bill by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `bill_id` - The bill ID
///
/// # Errors
///
/// Returns `PersistenceError::BillNotFound` if no bill has this ID,
/// or an error if the query fails.
pub fn get_bill(conn: &mut SqliteConnection, bill_id: i64) -> Result<Bill, PersistenceError> {
    bills::table
        .filter(bills::id.eq(bill_id))
        .select(BillRow::as_select())
        .first::<BillRow>(conn)
        .optional()?
        .map(Bill::from)
        .ok_or(PersistenceError::BillNotFound(bill_id))
}

/// Lists bills for the history charts in chronological order.
///
/// When `windowed` is set only the `HISTORY_WINDOW` most recent bills
/// are returned; otherwise every bill is returned.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_bill_history(
    conn: &mut SqliteConnection,
    windowed: bool,
) -> Result<Vec<Bill>, PersistenceError> {
    let mut query = bills::table
        .order(bills::date.desc())
        .select(BillRow::as_select())
        .into_boxed();

    if windowed {
        query = query.limit(HISTORY_WINDOW);
    }

    let rows: Vec<BillRow> = query.load(conn)?;

    // Newest-first from the store; charts read oldest to newest.
    Ok(rows.into_iter().rev().map(Bill::from).collect())
}
