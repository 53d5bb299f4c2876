// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the utility bill tracker.
//!
//! This crate stores bills in a single `SQLite` table through Diesel.
//!
//! ## Schema
//!
//! The `bills` table is created by an embedded migration using
//! `CREATE TABLE IF NOT EXISTS`, so a database file written by an earlier
//! deployment of the tracker is adopted as-is.
//!
//! ## Concurrency
//!
//! A `Persistence` owns one connection. Callers share it behind a lock and
//! hold the lock only for the duration of one operation. Each mutation is a
//! single transaction, and the `UNIQUE` constraint on `date` decides races
//! between writers of the same date.
//!
//! ## Testing Philosophy
//!
//! - Tests run against isolated in-memory databases (`new_in_memory`)
//! - No test depends on files or external infrastructure

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use bill_tracker_domain::{Bill, BillDraft};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Persistence adapter for bills.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// so tests never observe each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:bills_memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Bill Queries
    // ========================================================================

    /// Lists all bills ordered by date, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_bills(&mut self) -> Result<Vec<Bill>, PersistenceError> {
        queries::list_bills(&mut self.conn)
    }

    /// Retrieves a bill by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BillNotFound` if no bill has this ID.
    pub fn get_bill(&mut self, bill_id: i64) -> Result<Bill, PersistenceError> {
        queries::get_bill(&mut self.conn, bill_id)
    }

    /// Lists bills for the history view in chronological order.
    ///
    /// # Arguments
    ///
    /// * `windowed` - Limit the result to the most recent bills
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_bill_history(&mut self, windowed: bool) -> Result<Vec<Bill>, PersistenceError> {
        queries::list_bill_history(&mut self.conn, windowed)
    }

    // ========================================================================
    // Bill Mutations
    // ========================================================================

    /// Inserts a new bill stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateDate` if the date is taken.
    pub fn create_bill(&mut self, draft: &BillDraft) -> Result<Bill, PersistenceError> {
        let now: String = mutations::current_timestamp()?;
        mutations::insert_bill(&mut self.conn, draft, &now)
    }

    /// Replaces an existing bill's date and amounts.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BillNotFound` for an unknown ID and
    /// `PersistenceError::DuplicateDate` if another bill holds the date.
    pub fn update_bill(
        &mut self,
        bill_id: i64,
        draft: &BillDraft,
    ) -> Result<Bill, PersistenceError> {
        let now: String = mutations::current_timestamp()?;
        mutations::update_bill(&mut self.conn, bill_id, draft, &now)
    }

    /// Permanently deletes a bill.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BillNotFound` if no bill has this ID.
    pub fn delete_bill(&mut self, bill_id: i64) -> Result<(), PersistenceError> {
        mutations::delete_bill(&mut self.conn, bill_id)
    }
}
