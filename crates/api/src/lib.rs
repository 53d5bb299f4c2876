// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bill record service.
//!
//! Every operation the HTML pages and the JSON API perform goes through the
//! functions in this crate. Callers pass in the store handle they acquired
//! for the request; nothing here holds global state.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod request_response;

#[cfg(test)]
mod tests;

use bill_tracker_domain::{
    Bill, BillAmounts, BillDraft, DomainError, HistorySeries, coerce_amount, validate_bill_date,
};
use bill_tracker_persistence::Persistence;
use tracing::{debug, info, warn};

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use request_response::{
    BillRequest, BillResponse, DeleteBillResponse, HealthResponse, HistoryResponse,
};

/// Result alias for service operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Validates a request and coerces its amounts into a draft.
///
/// The date check happens first and is the only way this can fail.
///
/// # Errors
///
/// Returns `DomainError::MissingDate` if the date is absent or blank.
pub fn build_draft(request: &BillRequest) -> Result<BillDraft, DomainError> {
    let date: String = validate_bill_date(request.date.as_deref())?;

    let amounts: BillAmounts = BillAmounts {
        gas_cost: coerce_amount(request.gas_cost.as_ref()),
        electricity_delivery_cost: coerce_amount(request.electricity_delivery_cost.as_ref()),
        electricity_generation_cost: coerce_amount(request.electricity_generation_cost.as_ref()),
        other_cost: coerce_amount(request.other_cost.as_ref()),
        gas_therms: coerce_amount(request.gas_therms.as_ref()),
        electricity_on_peak_kwh: coerce_amount(request.electricity_on_peak_kwh.as_ref()),
        electricity_off_peak_kwh: coerce_amount(request.electricity_off_peak_kwh.as_ref()),
        electricity_super_off_peak_kwh: coerce_amount(
            request.electricity_super_off_peak_kwh.as_ref(),
        ),
    };

    Ok(BillDraft::new(date, amounts))
}

/// Lists every bill, newest date first.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the store cannot be queried.
pub fn list_bills(persistence: &mut Persistence) -> ApiResult<Vec<BillResponse>> {
    let bills: Vec<Bill> = persistence
        .list_bills()
        .map_err(translate_persistence_error)?;

    debug!(count = bills.len(), "Listed bills");
    Ok(bills.into_iter().map(BillResponse::from).collect())
}

/// Retrieves a single bill.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no bill has this ID.
pub fn get_bill(persistence: &mut Persistence, bill_id: i64) -> ApiResult<BillResponse> {
    persistence
        .get_bill(bill_id)
        .map(BillResponse::from)
        .map_err(translate_persistence_error)
}

/// Creates a bill.
///
/// Amounts that are missing, blank or unparseable are stored as zero.
///
/// # Errors
///
/// Returns an error if:
/// - The date is missing (`ApiError::InvalidInput`), checked before the store is touched
/// - Another bill holds the date (`ApiError::DuplicateBill`)
/// - The store fails (`ApiError::Internal`)
pub fn create_bill(
    persistence: &mut Persistence,
    request: &BillRequest,
) -> ApiResult<BillResponse> {
    let draft: BillDraft = build_draft(request).map_err(translate_domain_error)?;

    match persistence.create_bill(&draft) {
        Ok(bill) => {
            info!(bill_id = bill.id, date = %bill.date, "Created bill");
            Ok(BillResponse::from(bill))
        }
        Err(err) => {
            warn!(date = draft.date(), error = %err, "Failed to create bill");
            Err(translate_persistence_error(err))
        }
    }
}

/// Replaces the date and amounts of an existing bill.
///
/// # Errors
///
/// Returns an error if:
/// - The date is missing (`ApiError::InvalidInput`)
/// - No bill has this ID (`ApiError::ResourceNotFound`)
/// - A different bill holds the date (`ApiError::DuplicateBill`)
/// - The store fails (`ApiError::Internal`)
pub fn update_bill(
    persistence: &mut Persistence,
    bill_id: i64,
    request: &BillRequest,
) -> ApiResult<BillResponse> {
    let draft: BillDraft = build_draft(request).map_err(translate_domain_error)?;

    match persistence.update_bill(bill_id, &draft) {
        Ok(bill) => {
            info!(bill_id, date = %bill.date, "Updated bill");
            Ok(BillResponse::from(bill))
        }
        Err(err) => {
            warn!(bill_id, date = draft.date(), error = %err, "Failed to update bill");
            Err(translate_persistence_error(err))
        }
    }
}

/// Permanently deletes a bill.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no bill has this ID, including
/// when it was already deleted.
pub fn delete_bill(persistence: &mut Persistence, bill_id: i64) -> ApiResult<DeleteBillResponse> {
    persistence
        .delete_bill(bill_id)
        .map_err(translate_persistence_error)?;

    info!(bill_id, "Deleted bill");
    Ok(DeleteBillResponse {
        message: String::from("Bill deleted successfully"),
    })
}

/// Builds the usage history view.
///
/// # Arguments
///
/// * `show_all` - Return every bill instead of the most recent window
///
/// # Errors
///
/// Returns `ApiError::Internal` if the store cannot be queried.
pub fn get_history(persistence: &mut Persistence, show_all: bool) -> ApiResult<HistoryResponse> {
    let bills: Vec<Bill> = persistence
        .list_bill_history(!show_all)
        .map_err(translate_persistence_error)?;

    let series: HistorySeries = HistorySeries::from_bills(&bills);

    Ok(HistoryResponse {
        show_all,
        bills: bills.into_iter().map(BillResponse::from).collect(),
        series,
    })
}

/// Reports service liveness.
#[must_use]
pub fn health() -> HealthResponse {
    HealthResponse {
        status: String::from("ok"),
    }
}
