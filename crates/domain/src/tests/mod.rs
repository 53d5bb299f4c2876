// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error;
mod types;

use crate::{Bill, BillAmounts};

/// Builds a stored bill with the given date and amounts.
pub fn create_test_bill(id: i64, date: &str, amounts: BillAmounts) -> Bill {
    Bill {
        id,
        date: date.to_string(),
        amounts,
        created_at: String::from("2026-01-01 00:00:00.000000"),
        updated_at: String::from("2026-01-01 00:00:00.000000"),
    }
}
