// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTML page and form handlers.
//!
//! Form submissions redirect to the list on success. Validation and
//! duplicate-date failures re-render the form with status 200, the inline
//! message and the values as submitted.

use axum::{
    Form,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use bill_tracker_api::{
    ApiError, BillRequest, BillResponse, create_bill, get_bill, get_history,
    list_bills, update_bill,
};
use time::OffsetDateTime;
use tracing::{debug, error, info};

use crate::AppState;
use crate::handlers::HistoryQuery;
use crate::render::{
    FormMode, FormValues, ISO_DATE, bill_form_page, bills_list_page, history_page,
};

/// Today's UTC date as `YYYY-MM-DD`.
fn today() -> String {
    OffsetDateTime::now_utc()
        .date()
        .format(ISO_DATE)
        .unwrap_or_default()
}

/// Maps a service error to a plain-text page response.
fn page_error(err: &ApiError) -> Response {
    match err {
        ApiError::ResourceNotFound { .. } => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        _ => {
            error!(error = %err, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// Handler for GET `/`.
pub async fn page_bills_list(AxumState(app_state): AxumState<AppState>) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    let result = list_bills(&mut persistence);
    drop(persistence);

    match result {
        Ok(bills) => Html(bills_list_page(&bills)).into_response(),
        Err(err) => page_error(&err),
    }
}

/// Handler for GET `/add`.
#[allow(clippy::unused_async)]
pub async fn page_add_bill() -> Html<String> {
    Html(bill_form_page(
        FormMode::Create,
        &FormValues::blank(today()),
        None,
    ))
}

/// Handler for GET `/edit/{id}`.
pub async fn page_edit_bill(
    AxumState(app_state): AxumState<AppState>,
    Path(bill_id): Path<i64>,
) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    let result = get_bill(&mut persistence, bill_id);
    drop(persistence);

    match result {
        Ok(bill) => Html(bill_form_page(
            FormMode::Edit(bill.id),
            &FormValues::from_bill(&bill),
            None,
        ))
        .into_response(),
        Err(err) => page_error(&err),
    }
}

/// Handler for GET `/history`.
pub async fn page_history(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    let show_all: bool = query.show_all();

    let mut persistence = app_state.persistence.lock().await;
    let result = get_history(&mut persistence, show_all);
    drop(persistence);

    match result {
        Ok(history) => Html(history_page(&history)).into_response(),
        Err(err) => page_error(&err),
    }
}

/// Re-renders a form after a correctable failure, or maps the error.
fn form_failure(mode: FormMode, request: &BillRequest, err: &ApiError) -> Response {
    match err {
        ApiError::InvalidInput { .. } | ApiError::DuplicateBill { .. } => {
            debug!(error = %err, "Re-rendering bill form");
            let values: FormValues = FormValues::from_request(request);
            Html(bill_form_page(mode, &values, Some(&err.to_string()))).into_response()
        }
        _ => page_error(err),
    }
}

/// Handler for POST `/bills/create`.
pub async fn page_create_bill(
    AxumState(app_state): AxumState<AppState>,
    Form(request): Form<BillRequest>,
) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    let result: Result<BillResponse, ApiError> = create_bill(&mut persistence, &request);
    drop(persistence);

    match result {
        Ok(bill) => {
            info!(bill_id = bill.id, "Created bill from form");
            Redirect::to("/").into_response()
        }
        Err(err) => form_failure(FormMode::Create, &request, &err),
    }
}

/// Handler for POST `/bills/update/{id}`.
pub async fn page_update_bill(
    AxumState(app_state): AxumState<AppState>,
    Path(bill_id): Path<i64>,
    Form(request): Form<BillRequest>,
) -> Response {
    let mut persistence = app_state.persistence.lock().await;
    let result: Result<BillResponse, ApiError> =
        update_bill(&mut persistence, bill_id, &request);
    drop(persistence);

    match result {
        Ok(bill) => {
            info!(bill_id = bill.id, "Updated bill from form");
            Redirect::to("/").into_response()
        }
        Err(err) => form_failure(FormMode::Edit(bill_id), &request, &err),
    }
}
