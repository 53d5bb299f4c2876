// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_bill;
use crate::{Bill, BillAmounts, BillDraft};

#[test]
fn test_total_cost_sums_the_four_cost_fields() {
    let amounts: BillAmounts = BillAmounts {
        gas_cost: 10.0,
        electricity_delivery_cost: 5.0,
        electricity_generation_cost: 3.0,
        other_cost: 2.0,
        gas_therms: 100.0,
        ..BillAmounts::default()
    };

    assert!((amounts.total_cost() - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_total_kwh_sums_the_three_usage_fields() {
    let amounts: BillAmounts = BillAmounts {
        gas_therms: 35.0,
        electricity_on_peak_kwh: 120.0,
        electricity_off_peak_kwh: 200.0,
        electricity_super_off_peak_kwh: 80.0,
        ..BillAmounts::default()
    };

    assert!((amounts.total_kwh() - 400.0).abs() < f64::EPSILON);
}

#[test]
fn test_default_amounts_total_zero() {
    let amounts: BillAmounts = BillAmounts::default();
    assert!(amounts.total_cost().abs() < f64::EPSILON);
    assert!(amounts.total_kwh().abs() < f64::EPSILON);
}

#[test]
fn test_bill_totals_delegate_to_amounts() {
    let bill: Bill = create_test_bill(
        1,
        "2026-01-28",
        BillAmounts {
            gas_cost: 1.5,
            other_cost: 2.5,
            electricity_off_peak_kwh: 7.0,
            ..BillAmounts::default()
        },
    );

    assert!((bill.total_cost() - 4.0).abs() < f64::EPSILON);
    assert!((bill.total_kwh() - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_bill_serializes_flat() {
    let bill: Bill = create_test_bill(
        7,
        "2026-02-01",
        BillAmounts {
            gas_cost: 3.0,
            ..BillAmounts::default()
        },
    );

    let value: serde_json::Value = serde_json::to_value(&bill).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["date"], "2026-02-01");
    assert_eq!(value["gas_cost"], 3.0);
    assert_eq!(value["electricity_super_off_peak_kwh"], 0.0);
    assert!(value.get("amounts").is_none());
}

#[test]
fn test_bill_draft_accessors() {
    let amounts: BillAmounts = BillAmounts {
        gas_therms: 12.0,
        ..BillAmounts::default()
    };
    let draft: BillDraft = BillDraft::new(String::from("2026-03-01"), amounts);

    assert_eq!(draft.date(), "2026-03-01");
    assert_eq!(draft.amounts(), &amounts);
}
