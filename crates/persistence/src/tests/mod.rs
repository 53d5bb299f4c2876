// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod mutation_error_tests;

use bill_tracker_domain::{BillAmounts, BillDraft};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_draft(date: &str) -> BillDraft {
    BillDraft::new(
        date.to_string(),
        BillAmounts {
            gas_cost: 10.0,
            electricity_delivery_cost: 5.0,
            electricity_generation_cost: 3.0,
            other_cost: 2.0,
            gas_therms: 25.0,
            electricity_on_peak_kwh: 100.0,
            electricity_off_peak_kwh: 200.0,
            electricity_super_off_peak_kwh: 50.0,
        },
    )
}

pub fn create_empty_draft(date: &str) -> BillDraft {
    BillDraft::new(date.to_string(), BillAmounts::default())
}
