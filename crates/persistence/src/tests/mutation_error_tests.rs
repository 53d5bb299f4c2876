// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence mutation error handling tests.
//!
//! Covers unique-date violations and unknown IDs, and checks that a failed
//! write leaves the store untouched.

use bill_tracker_domain::{Bill, BillAmounts, BillDraft};

use super::{create_empty_draft, create_test_draft, create_test_persistence};
use crate::PersistenceError;

#[test]
fn test_create_with_duplicate_date_fails_and_leaves_store_unchanged() {
    let mut persistence = create_test_persistence();
    persistence.create_bill(&create_test_draft("2026-01-28")).unwrap();
    let before: Vec<Bill> = persistence.list_bills().unwrap();

    let result = persistence.create_bill(&create_empty_draft("2026-01-28"));

    assert_eq!(
        result,
        Err(PersistenceError::DuplicateDate(String::from("2026-01-28")))
    );
    assert_eq!(persistence.list_bills().unwrap(), before);
}

#[test]
fn test_update_to_colliding_date_fails_and_preserves_record() {
    let mut persistence = create_test_persistence();
    let bill_a: Bill = persistence.create_bill(&create_test_draft("2026-01-01")).unwrap();
    persistence.create_bill(&create_test_draft("2026-02-01")).unwrap();

    let colliding: BillDraft = BillDraft::new(
        String::from("2026-02-01"),
        BillAmounts {
            gas_cost: 1234.0,
            ..BillAmounts::default()
        },
    );
    let result = persistence.update_bill(bill_a.id, &colliding);

    assert_eq!(
        result,
        Err(PersistenceError::DuplicateDate(String::from("2026-02-01")))
    );
    assert_eq!(persistence.get_bill(bill_a.id).unwrap(), bill_a);
}

#[test]
fn test_update_keeping_own_date_is_not_a_conflict() {
    let mut persistence = create_test_persistence();
    let created: Bill = persistence.create_bill(&create_test_draft("2026-01-01")).unwrap();

    let result = persistence.update_bill(created.id, &create_empty_draft("2026-01-01"));

    assert!(result.is_ok());
}

#[test]
fn test_update_with_nonexistent_id_returns_not_found() {
    let mut persistence = create_test_persistence();

    let result = persistence.update_bill(99_999, &create_test_draft("2026-01-01"));

    assert_eq!(result, Err(PersistenceError::BillNotFound(99_999)));
    assert!(persistence.list_bills().unwrap().is_empty());
}

#[test]
fn test_update_nonexistent_id_with_taken_date_returns_not_found() {
    let mut persistence = create_test_persistence();
    persistence.create_bill(&create_test_draft("2026-01-01")).unwrap();

    let result = persistence.update_bill(99_999, &create_test_draft("2026-01-01"));

    assert_eq!(result, Err(PersistenceError::BillNotFound(99_999)));
}

#[test]
fn test_get_with_nonexistent_id_returns_not_found() {
    let mut persistence = create_test_persistence();

    assert_eq!(
        persistence.get_bill(42),
        Err(PersistenceError::BillNotFound(42))
    );
}

#[test]
fn test_second_delete_reports_not_found() {
    let mut persistence = create_test_persistence();
    let created: Bill = persistence.create_bill(&create_test_draft("2026-01-01")).unwrap();

    assert!(persistence.delete_bill(created.id).is_ok());
    assert_eq!(
        persistence.delete_bill(created.id),
        Err(PersistenceError::BillNotFound(created.id))
    );
}
