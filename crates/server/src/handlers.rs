// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON API handlers.

use axum::{
    Json,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bill_tracker_api::{
    BillRequest, BillResponse, DeleteBillResponse, HealthResponse, HistoryResponse, create_bill,
    delete_bill, get_bill, get_history, health, list_bills, update_bill,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::AppState;
use crate::error::HttpError;
use crate::extract::{HxRequest, JsonBody};

/// Query parameters for the history views.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HistoryQuery {
    /// `true` (case-insensitive) selects every bill.
    pub all: Option<String>,
}

impl HistoryQuery {
    /// Returns true if every bill was requested.
    #[must_use]
    pub fn show_all(&self) -> bool {
        self.all
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

/// Handler for GET `/api/bills`.
pub async fn handle_list_bills(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<BillResponse>>, HttpError> {
    debug!("Handling list_bills request");

    let mut persistence = app_state.persistence.lock().await;
    let bills: Vec<BillResponse> = list_bills(&mut persistence)?;
    drop(persistence);

    Ok(Json(bills))
}

/// Handler for GET `/api/bills/{id}`.
pub async fn handle_get_bill(
    AxumState(app_state): AxumState<AppState>,
    Path(bill_id): Path<i64>,
) -> Result<Json<BillResponse>, HttpError> {
    debug!(bill_id, "Handling get_bill request");

    let mut persistence = app_state.persistence.lock().await;
    let bill: BillResponse = get_bill(&mut persistence, bill_id)?;
    drop(persistence);

    Ok(Json(bill))
}

/// Handler for POST `/api/bills`.
///
/// Responds 201 with the stored bill.
pub async fn handle_create_bill(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(request): JsonBody<BillRequest>,
) -> Result<(StatusCode, Json<BillResponse>), HttpError> {
    info!(date = ?request.date, "Handling create_bill request");

    let mut persistence = app_state.persistence.lock().await;
    let bill: BillResponse = create_bill(&mut persistence, &request)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(bill)))
}

/// Handler for PUT `/api/bills/{id}`.
pub async fn handle_update_bill(
    AxumState(app_state): AxumState<AppState>,
    Path(bill_id): Path<i64>,
    JsonBody(request): JsonBody<BillRequest>,
) -> Result<Json<BillResponse>, HttpError> {
    info!(bill_id, date = ?request.date, "Handling update_bill request");

    let mut persistence = app_state.persistence.lock().await;
    let bill: BillResponse = update_bill(&mut persistence, bill_id, &request)?;
    drop(persistence);

    Ok(Json(bill))
}

/// Handler for DELETE `/api/bills/{id}`.
///
/// htmx callers get an empty 200 so the swapped row simply disappears.
pub async fn handle_delete_bill(
    AxumState(app_state): AxumState<AppState>,
    Path(bill_id): Path<i64>,
    HxRequest(from_htmx): HxRequest,
) -> Result<Response, HttpError> {
    info!(bill_id, from_htmx, "Handling delete_bill request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteBillResponse = delete_bill(&mut persistence, bill_id)?;
    drop(persistence);

    if from_htmx {
        return Ok(StatusCode::OK.into_response());
    }
    Ok(Json(response).into_response())
}

/// Handler for GET `/api/history`.
pub async fn handle_get_history(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, HttpError> {
    let show_all: bool = query.show_all();
    debug!(show_all, "Handling get_history request");

    let mut persistence = app_state.persistence.lock().await;
    let history: HistoryResponse = get_history(&mut persistence, show_all)?;
    drop(persistence);

    Ok(Json(history))
}

/// Handler for GET `/health` and `/api/health`.
#[allow(clippy::unused_async)]
pub async fn handle_health() -> Json<HealthResponse> {
    Json(health())
}
