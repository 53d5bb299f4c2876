// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lenient coercion of submitted numeric fields.
//!
//! Bill amounts arrive either as JSON numbers, as JSON strings, or as
//! HTML form text. Anything that does not read as a finite number is
//! stored as zero rather than rejected.

use serde::Deserialize;
use serde::de::IgnoredAny;

/// A numeric field exactly as it was submitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A JSON number.
    Number(f64),
    /// A JSON string or a form value.
    Text(String),
    /// Any other JSON value (boolean, array, object).
    Other(IgnoredAny),
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Coerces a submitted amount to a finite `f64`.
///
/// Missing values, blank strings, unparseable strings, non-numeric JSON
/// values and non-finite numbers all coerce to `0.0`.
///
/// # Arguments
///
/// * `raw` - The submitted value, if any
#[must_use]
pub fn coerce_amount(raw: Option<&RawAmount>) -> f64 {
    let value: f64 = match raw {
        Some(RawAmount::Number(n)) => *n,
        Some(RawAmount::Text(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        Some(RawAmount::Other(_)) | None => 0.0,
    };

    if value.is_finite() { value } else { 0.0 }
}
