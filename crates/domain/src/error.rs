// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
///
/// Numeric fields never produce errors: malformed amounts coerce to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The bill date was absent or blank.
    #[error("Date is required")]
    MissingDate,
}
