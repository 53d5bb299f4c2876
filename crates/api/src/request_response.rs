// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use bill_tracker_domain::{Bill, BillAmounts, HistorySeries, RawAmount};
use serde::{Deserialize, Serialize};

/// API request to create or replace a bill.
///
/// Deserializes from a JSON object or from an HTML form body. Every field
/// is optional at this layer; the date requirement and numeric coercion
/// are applied by the service operations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BillRequest {
    /// The billing date (`YYYY-MM-DD`).
    pub date: Option<String>,
    pub gas_cost: Option<RawAmount>,
    pub electricity_delivery_cost: Option<RawAmount>,
    pub electricity_generation_cost: Option<RawAmount>,
    pub other_cost: Option<RawAmount>,
    pub gas_therms: Option<RawAmount>,
    pub electricity_on_peak_kwh: Option<RawAmount>,
    pub electricity_off_peak_kwh: Option<RawAmount>,
    pub electricity_super_off_peak_kwh: Option<RawAmount>,
}

/// A bill as returned to clients, including derived totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillResponse {
    /// The store-assigned identifier.
    pub id: i64,
    /// The billing date.
    pub date: String,
    /// The eight cost and usage fields.
    #[serde(flatten)]
    pub amounts: BillAmounts,
    /// When the bill was first stored.
    pub created_at: String,
    /// When the bill was last modified.
    pub updated_at: String,
    /// Sum of the four cost fields.
    pub total_cost: f64,
    /// Sum of the three electricity usage fields.
    pub total_kwh: f64,
}

impl From<Bill> for BillResponse {
    fn from(bill: Bill) -> Self {
        let total_cost: f64 = bill.total_cost();
        let total_kwh: f64 = bill.total_kwh();
        Self {
            id: bill.id,
            date: bill.date,
            amounts: bill.amounts,
            created_at: bill.created_at,
            updated_at: bill.updated_at,
            total_cost,
            total_kwh,
        }
    }
}

/// API response for a successful deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBillResponse {
    /// A success message.
    pub message: String,
}

/// API response for the usage history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Whether every bill was requested rather than the recent window.
    pub show_all: bool,
    /// Bills in chronological order.
    pub bills: Vec<BillResponse>,
    /// Per-bill chart series aligned with `bills`.
    pub series: HistorySeries,
}

/// API response for health checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
