// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test opens an in-memory database, so connection
//! setup and migration are exercised implicitly. These tests cover
//! isolation and the file-backed path.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use super::create_test_draft;
use crate::{Persistence, PersistenceError};

static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

fn temp_database_path() -> PathBuf {
    let n = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("bill_tracker_test_{}_{n}.db", std::process::id()))
}

fn remove_database_files(path: &Path) {
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.list_bills();

    assert!(
        result.is_ok(),
        "Migrations must have applied for bills table to exist"
    );
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    db1.create_bill(&create_test_draft("2026-01-28")).unwrap();

    assert_eq!(db1.list_bills().unwrap().len(), 1);
    assert_eq!(
        db2.list_bills().unwrap().len(),
        0,
        "db2 should not see bills from db1"
    );
}

#[test]
fn test_file_database_survives_reopen() {
    let path = temp_database_path();

    let created = {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence.create_bill(&create_test_draft("2026-01-28")).unwrap()
    };

    // Re-running migrations against an existing file must be harmless.
    let mut reopened = Persistence::new_with_file(&path).unwrap();
    let fetched = reopened.get_bill(created.id).unwrap();
    assert_eq!(fetched, created);

    drop(reopened);
    remove_database_files(&path);
}
