// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod coercion;
mod error;
mod history;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use coercion::{RawAmount, coerce_amount};
pub use error::DomainError;
pub use history::{HISTORY_WINDOW, HistorySeries};
pub use types::{Bill, BillAmounts, BillDraft};
pub use validation::validate_bill_date;
