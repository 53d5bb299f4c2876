// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates the required bill date.
///
/// The date is the natural key of a bill and, unlike the numeric fields,
/// is never coerced to a default. Surrounding whitespace is trimmed.
///
/// # Arguments
///
/// * `date` - The submitted date, if any
///
/// # Returns
///
/// The trimmed date string.
///
/// # Errors
///
/// Returns `DomainError::MissingDate` if the date is absent or blank.
pub fn validate_bill_date(date: Option<&str>) -> Result<String, DomainError> {
    match date.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(DomainError::MissingDate),
    }
}
