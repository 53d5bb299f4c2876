// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chart series derived from a chronological run of bills.

use serde::{Deserialize, Serialize};

use crate::types::Bill;

/// Number of bills shown by the default (windowed) history view.
pub const HISTORY_WINDOW: i64 = 13;

/// Parallel per-bill series for charting, aligned by position.
///
/// Element `i` of every vector describes the same bill.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistorySeries {
    pub dates: Vec<String>,
    pub on_peak: Vec<f64>,
    pub off_peak: Vec<f64>,
    pub super_off_peak: Vec<f64>,
    pub gas_cost: Vec<f64>,
    pub electricity_delivery_cost: Vec<f64>,
    pub electricity_generation_cost: Vec<f64>,
    pub other_cost: Vec<f64>,
}

impl HistorySeries {
    /// Builds the series from bills in the order given.
    #[must_use]
    pub fn from_bills(bills: &[Bill]) -> Self {
        let mut series: Self = Self::default();
        for bill in bills {
            let amounts = &bill.amounts;
            series.dates.push(bill.date.clone());
            series.on_peak.push(amounts.electricity_on_peak_kwh);
            series.off_peak.push(amounts.electricity_off_peak_kwh);
            series
                .super_off_peak
                .push(amounts.electricity_super_off_peak_kwh);
            series.gas_cost.push(amounts.gas_cost);
            series
                .electricity_delivery_cost
                .push(amounts.electricity_delivery_cost);
            series
                .electricity_generation_cost
                .push(amounts.electricity_generation_cost);
            series.other_cost.push(amounts.other_cost);
        }
        series
    }

    /// Number of bills in the series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the series holds no bills.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
