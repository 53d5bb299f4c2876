// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use bill_tracker_domain::DomainError;
use bill_tracker_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. Their `Display` output is the user-facing message shown by
/// both the JSON API and the HTML forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("{message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// Another bill already holds the submitted date.
    #[error("A bill with this date already exists")]
    DuplicateBill {
        /// The conflicting date.
        date: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// The identifier that was looked up.
        id: i64,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingDate => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Only unique-date conflicts and unknown bills are user-correctable;
/// everything else becomes `ApiError::Internal`.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DuplicateDate(date) => ApiError::DuplicateBill { date },
        PersistenceError::BillNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Bill"),
            id,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
