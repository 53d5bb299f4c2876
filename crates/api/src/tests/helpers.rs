// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use bill_tracker_domain::RawAmount;
use bill_tracker_persistence::Persistence;

use crate::BillRequest;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// A request with only the date set.
pub fn create_date_only_request(date: &str) -> BillRequest {
    BillRequest {
        date: Some(date.to_string()),
        ..BillRequest::default()
    }
}

/// A request with every amount set to a distinct JSON number.
pub fn create_valid_request(date: &str) -> BillRequest {
    BillRequest {
        date: Some(date.to_string()),
        gas_cost: Some(RawAmount::Number(10.0)),
        electricity_delivery_cost: Some(RawAmount::Number(5.0)),
        electricity_generation_cost: Some(RawAmount::Number(3.0)),
        other_cost: Some(RawAmount::Number(2.0)),
        gas_therms: Some(RawAmount::Number(31.5)),
        electricity_on_peak_kwh: Some(RawAmount::Number(120.0)),
        electricity_off_peak_kwh: Some(RawAmount::Number(240.0)),
        electricity_super_off_peak_kwh: Some(RawAmount::Number(60.0)),
    }
}
