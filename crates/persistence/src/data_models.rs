// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row types for the `bills` table.

use bill_tracker_domain::{Bill, BillAmounts, BillDraft};
use diesel::prelude::*;

use crate::diesel_schema::bills;

/// A row in `bills` as read from the store.
///
/// Numeric and timestamp columns are nullable so that rows written by
/// older deployments load cleanly. NULL amounts read as zero.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bills, check_for_backend(diesel::sqlite::Sqlite))]
pub struct BillRow {
    pub id: i64,
    pub date: String,
    pub gas_cost: Option<f64>,
    pub electricity_delivery_cost: Option<f64>,
    pub electricity_generation_cost: Option<f64>,
    pub other_cost: Option<f64>,
    pub gas_therms: Option<f64>,
    pub electricity_on_peak_kwh: Option<f64>,
    pub electricity_off_peak_kwh: Option<f64>,
    pub electricity_super_off_peak_kwh: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<BillRow> for Bill {
    fn from(row: BillRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            amounts: BillAmounts {
                gas_cost: row.gas_cost.unwrap_or_default(),
                electricity_delivery_cost: row.electricity_delivery_cost.unwrap_or_default(),
                electricity_generation_cost: row.electricity_generation_cost.unwrap_or_default(),
                other_cost: row.other_cost.unwrap_or_default(),
                gas_therms: row.gas_therms.unwrap_or_default(),
                electricity_on_peak_kwh: row.electricity_on_peak_kwh.unwrap_or_default(),
                electricity_off_peak_kwh: row.electricity_off_peak_kwh.unwrap_or_default(),
                electricity_super_off_peak_kwh: row
                    .electricity_super_off_peak_kwh
                    .unwrap_or_default(),
            },
            created_at: row.created_at.unwrap_or_default(),
            updated_at: row.updated_at.unwrap_or_default(),
        }
    }
}

/// Insertable form of a bill. Timestamps are supplied by the caller.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bills)]
pub struct NewBillRow<'a> {
    pub date: &'a str,
    pub gas_cost: f64,
    pub electricity_delivery_cost: f64,
    pub electricity_generation_cost: f64,
    pub other_cost: f64,
    pub gas_therms: f64,
    pub electricity_on_peak_kwh: f64,
    pub electricity_off_peak_kwh: f64,
    pub electricity_super_off_peak_kwh: f64,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}

impl<'a> NewBillRow<'a> {
    /// Builds an insertable row stamped with `now` for both timestamps.
    #[must_use]
    pub fn from_draft(draft: &'a BillDraft, now: &'a str) -> Self {
        let amounts: &BillAmounts = draft.amounts();
        Self {
            date: draft.date(),
            gas_cost: amounts.gas_cost,
            electricity_delivery_cost: amounts.electricity_delivery_cost,
            electricity_generation_cost: amounts.electricity_generation_cost,
            other_cost: amounts.other_cost,
            gas_therms: amounts.gas_therms,
            electricity_on_peak_kwh: amounts.electricity_on_peak_kwh,
            electricity_off_peak_kwh: amounts.electricity_off_peak_kwh,
            electricity_super_off_peak_kwh: amounts.electricity_super_off_peak_kwh,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full replacement of a bill's mutable columns.
///
/// Excludes `id` and `created_at`, which never change after insert.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = bills)]
pub struct BillChangeset<'a> {
    pub date: &'a str,
    pub gas_cost: f64,
    pub electricity_delivery_cost: f64,
    pub electricity_generation_cost: f64,
    pub other_cost: f64,
    pub gas_therms: f64,
    pub electricity_on_peak_kwh: f64,
    pub electricity_off_peak_kwh: f64,
    pub electricity_super_off_peak_kwh: f64,
    pub updated_at: &'a str,
}

impl<'a> BillChangeset<'a> {
    /// Builds a changeset that refreshes `updated_at` to `now`.
    #[must_use]
    pub fn from_draft(draft: &'a BillDraft, now: &'a str) -> Self {
        let amounts: &BillAmounts = draft.amounts();
        Self {
            date: draft.date(),
            gas_cost: amounts.gas_cost,
            electricity_delivery_cost: amounts.electricity_delivery_cost,
            electricity_generation_cost: amounts.electricity_generation_cost,
            other_cost: amounts.other_cost,
            gas_therms: amounts.gas_therms,
            electricity_on_peak_kwh: amounts.electricity_on_peak_kwh,
            electricity_off_peak_kwh: amounts.electricity_off_peak_kwh,
            electricity_super_off_peak_kwh: amounts.electricity_super_off_peak_kwh,
            updated_at: now,
        }
    }
}
