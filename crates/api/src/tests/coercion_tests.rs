// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Numeric coercion as seen through the service operations.

use super::helpers::{create_date_only_request, create_test_persistence};
use crate::{BillRequest, BillResponse, build_draft, create_bill};

#[test]
fn test_empty_and_malformed_gas_cost_both_store_zero() {
    let mut persistence = create_test_persistence();

    let mut empty: BillRequest = create_date_only_request("2026-01-01");
    empty.gas_cost = Some("".into());
    let mut malformed: BillRequest = create_date_only_request("2026-02-01");
    malformed.gas_cost = Some("not-a-number".into());

    let from_empty: BillResponse = create_bill(&mut persistence, &empty).unwrap();
    let from_malformed: BillResponse = create_bill(&mut persistence, &malformed).unwrap();

    assert!(from_empty.amounts.gas_cost.abs() < f64::EPSILON);
    assert!(from_malformed.amounts.gas_cost.abs() < f64::EPSILON);
}

#[test]
fn test_json_body_with_mixed_value_types_is_coerced() {
    let request: BillRequest = serde_json::from_str(
        r#"{
            "date": "2026-01-28",
            "gas_cost": "42.10",
            "electricity_delivery_cost": 17,
            "electricity_generation_cost": null,
            "other_cost": true,
            "gas_therms": "",
            "electricity_on_peak_kwh": [1, 2],
            "electricity_off_peak_kwh": "abc"
        }"#,
    )
    .unwrap();

    let draft = build_draft(&request).unwrap();
    let amounts = draft.amounts();

    assert_eq!(draft.date(), "2026-01-28");
    assert!((amounts.gas_cost - 42.10).abs() < f64::EPSILON);
    assert!((amounts.electricity_delivery_cost - 17.0).abs() < f64::EPSILON);
    assert!(amounts.electricity_generation_cost.abs() < f64::EPSILON);
    assert!(amounts.other_cost.abs() < f64::EPSILON);
    assert!(amounts.gas_therms.abs() < f64::EPSILON);
    assert!(amounts.electricity_on_peak_kwh.abs() < f64::EPSILON);
    assert!(amounts.electricity_off_peak_kwh.abs() < f64::EPSILON);
    assert!(amounts.electricity_super_off_peak_kwh.abs() < f64::EPSILON);
}

#[test]
fn test_unknown_json_fields_are_ignored() {
    let request: BillRequest =
        serde_json::from_str(r#"{"date": "2026-01-28", "id": 99, "notes": "x"}"#).unwrap();

    assert_eq!(request.date.as_deref(), Some("2026-01-28"));
}
