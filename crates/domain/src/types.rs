// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The eight cost and usage line items recorded for a billing period.
///
/// Every field defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BillAmounts {
    /// Gas charges.
    pub gas_cost: f64,
    /// Electricity delivery charges.
    pub electricity_delivery_cost: f64,
    /// Electricity generation charges.
    pub electricity_generation_cost: f64,
    /// Any charges not covered by the other cost fields.
    pub other_cost: f64,
    /// Gas usage in therms.
    pub gas_therms: f64,
    /// On-peak electricity usage in kWh.
    pub electricity_on_peak_kwh: f64,
    /// Off-peak electricity usage in kWh.
    pub electricity_off_peak_kwh: f64,
    /// Super-off-peak electricity usage in kWh.
    pub electricity_super_off_peak_kwh: f64,
}

impl BillAmounts {
    /// Sum of the four cost fields.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.gas_cost
            + self.electricity_delivery_cost
            + self.electricity_generation_cost
            + self.other_cost
    }

    /// Sum of the three electricity usage fields.
    ///
    /// Gas therms are not included.
    #[must_use]
    pub fn total_kwh(&self) -> f64 {
        self.electricity_on_peak_kwh
            + self.electricity_off_peak_kwh
            + self.electricity_super_off_peak_kwh
    }
}

/// A validated bill submission that has not been persisted.
///
/// The date is guaranteed non-blank; see [`crate::validate_bill_date`].
#[derive(Debug, Clone, PartialEq)]
pub struct BillDraft {
    date: String,
    amounts: BillAmounts,
}

impl BillDraft {
    /// Creates a new draft from an already-validated date.
    #[must_use]
    pub const fn new(date: String, amounts: BillAmounts) -> Self {
        Self { date, amounts }
    }

    /// Returns the billing date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the cost and usage amounts.
    #[must_use]
    pub const fn amounts(&self) -> &BillAmounts {
        &self.amounts
    }
}

/// A persisted bill, one per billing period.
///
/// `id` is assigned by the store and `date` is the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// The store-assigned identifier.
    pub id: i64,
    /// The billing date in `YYYY-MM-DD` form.
    pub date: String,
    /// The cost and usage amounts.
    #[serde(flatten)]
    pub amounts: BillAmounts,
    /// When the bill was first stored.
    pub created_at: String,
    /// When the bill was last modified.
    pub updated_at: String,
}

impl Bill {
    /// Sum of the four cost fields.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.amounts.total_cost()
    }

    /// Sum of the three electricity usage fields.
    #[must_use]
    pub fn total_kwh(&self) -> f64 {
        self.amounts.total_kwh()
    }
}
