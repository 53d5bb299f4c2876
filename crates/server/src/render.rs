// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Server-rendered HTML pages.
//!
//! Pages are built directly as strings. Every user-supplied value passes
//! through [`escape_html`] before it is written into markup.

use bill_tracker_api::{BillRequest, BillResponse, HistoryResponse};
use bill_tracker_domain::{BillAmounts, HISTORY_WINDOW, RawAmount};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::chart::{Segment, StackedBarChart};

/// `YYYY-MM-DD`, the stored date layout.
pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day], [year]");

const CHART_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [year]");

/// Form inputs in display order: field name and label.
const AMOUNT_FIELDS: [(&str, &str); 8] = [
    ("gas_cost", "Gas Cost ($)"),
    ("electricity_delivery_cost", "Electricity Delivery Cost ($)"),
    ("electricity_generation_cost", "Electricity Generation Cost ($)"),
    ("other_cost", "Other Cost ($)"),
    ("gas_therms", "Gas Usage (therms)"),
    ("electricity_on_peak_kwh", "On-Peak Usage (kWh)"),
    ("electricity_off_peak_kwh", "Off-Peak Usage (kWh)"),
    ("electricity_super_off_peak_kwh", "Super Off-Peak Usage (kWh)"),
];

const ON_PEAK_COLOR: &str = "#e4572e";
const OFF_PEAK_COLOR: &str = "#29335c";
const SUPER_OFF_PEAK_COLOR: &str = "#669bbc";
const GAS_COLOR: &str = "#f3a712";
const DELIVERY_COLOR: &str = "#a8c686";
const GENERATION_COLOR: &str = "#4c956c";
const OTHER_COLOR: &str = "#8d99ae";

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0 auto;max-width:960px;padding:1rem;color:#222}\
nav a{margin-right:1rem}nav a.active{font-weight:bold}\
table{border-collapse:collapse;width:100%}th,td{padding:.4rem .6rem;border-bottom:1px solid #ddd;text-align:right}\
th:first-child,td:first-child{text-align:left}\
form label{display:block;margin-top:.6rem}.error{color:#b00020;font-weight:bold}\
.chart{width:100%;height:auto;margin:1rem 0}";

/// Escapes text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Formats an amount as `$12.34`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

/// Formats a usage quantity with at most two decimals.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    let rounded: String = format!("{value:.2}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Formats a stored `YYYY-MM-DD` date as `Jan 28, 2026`.
///
/// Dates that do not parse are returned unchanged.
#[must_use]
pub fn format_date(date: &str) -> String {
    reformat_date(date, DISPLAY_DATE)
}

fn reformat_date(date: &str, layout: &[BorrowedFormatItem<'_>]) -> String {
    Date::parse(date, ISO_DATE)
        .ok()
        .and_then(|parsed| parsed.format(layout).ok())
        .unwrap_or_else(|| date.to_string())
}

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Bills,
    Add,
    History,
}

fn layout(title: &str, active: Nav, body: &str) -> String {
    let link = |nav: Nav, href: &str, text: &str| -> String {
        let class: &str = if nav == active { " class=\"active\"" } else { "" };
        format!("<a href=\"{href}\"{class}>{text}</a>")
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} - Utility Bills</title>\n\
         <script src=\"https://unpkg.com/htmx.org@1.9.12\"></script>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<nav>{}{}{}</nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        escape_html(title),
        link(Nav::Bills, "/", "Bills"),
        link(Nav::Add, "/add", "Add Bill"),
        link(Nav::History, "/history", "History"),
    )
}

/// Renders the bill list, newest first as given.
#[must_use]
pub fn bills_list_page(bills: &[BillResponse]) -> String {
    let mut body: String = String::from("<h1>Utility Bills</h1>\n");

    if bills.is_empty() {
        body.push_str("<p class=\"empty\">No bills yet. <a href=\"/add\">Add the first one</a>.</p>\n");
        return layout("Bills", Nav::Bills, &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Date</th><th>Gas</th><th>Delivery</th><th>Generation</th>\
         <th>Other</th><th>Total Cost</th><th>Therms</th><th>Total kWh</th><th></th></tr></thead>\n<tbody>\n",
    );
    for bill in bills {
        body.push_str(&bill_row(bill));
    }
    body.push_str("</tbody>\n</table>\n");

    layout("Bills", Nav::Bills, &body)
}

fn bill_row(bill: &BillResponse) -> String {
    let amounts: &BillAmounts = &bill.amounts;
    format!(
        "<tr id=\"bill-{id}\"><td>{date}</td><td>{gas}</td><td>{delivery}</td><td>{generation}</td>\
         <td>{other}</td><td>{total_cost}</td><td>{therms}</td><td>{total_kwh}</td>\
         <td><a href=\"/edit/{id}\">Edit</a> \
         <button hx-delete=\"/api/bills/{id}\" hx-target=\"closest tr\" hx-swap=\"outerHTML\" \
         hx-confirm=\"Delete the bill for {date}?\">Delete</button></td></tr>\n",
        id = bill.id,
        date = escape_html(&format_date(&bill.date)),
        gas = format_currency(amounts.gas_cost),
        delivery = format_currency(amounts.electricity_delivery_cost),
        generation = format_currency(amounts.electricity_generation_cost),
        other = format_currency(amounts.other_cost),
        total_cost = format_currency(bill.total_cost),
        therms = format_quantity(amounts.gas_therms),
        total_kwh = format_quantity(bill.total_kwh),
    )
}

/// Whether a form creates a new bill or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// The values shown in the bill form inputs, in `AMOUNT_FIELDS` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub date: String,
    pub amounts: [String; 8],
}

impl FormValues {
    /// Empty inputs with the given date.
    #[must_use]
    pub fn blank(date: String) -> Self {
        Self {
            date,
            amounts: Default::default(),
        }
    }

    /// Inputs prefilled from a stored bill.
    #[must_use]
    pub fn from_bill(bill: &BillResponse) -> Self {
        let a: &BillAmounts = &bill.amounts;
        let values: [f64; 8] = [
            a.gas_cost,
            a.electricity_delivery_cost,
            a.electricity_generation_cost,
            a.other_cost,
            a.gas_therms,
            a.electricity_on_peak_kwh,
            a.electricity_off_peak_kwh,
            a.electricity_super_off_peak_kwh,
        ];
        Self {
            date: bill.date.clone(),
            amounts: values.map(|v| v.to_string()),
        }
    }

    /// Inputs echoing a rejected submission exactly as typed.
    #[must_use]
    pub fn from_request(request: &BillRequest) -> Self {
        let raw: [Option<&RawAmount>; 8] = [
            request.gas_cost.as_ref(),
            request.electricity_delivery_cost.as_ref(),
            request.electricity_generation_cost.as_ref(),
            request.other_cost.as_ref(),
            request.gas_therms.as_ref(),
            request.electricity_on_peak_kwh.as_ref(),
            request.electricity_off_peak_kwh.as_ref(),
            request.electricity_super_off_peak_kwh.as_ref(),
        ];
        Self {
            date: request.date.clone().unwrap_or_default(),
            amounts: raw.map(|value| match value {
                Some(RawAmount::Number(n)) => n.to_string(),
                Some(RawAmount::Text(text)) => text.clone(),
                Some(RawAmount::Other(_)) | None => String::new(),
            }),
        }
    }
}

/// Renders the create or edit form, with an optional inline error.
#[must_use]
pub fn bill_form_page(mode: FormMode, values: &FormValues, error: Option<&str>) -> String {
    let (title, action, submit, nav): (&str, String, &str, Nav) = match mode {
        FormMode::Create => ("Add Bill", String::from("/bills/create"), "Add Bill", Nav::Add),
        FormMode::Edit(id) => (
            "Edit Bill",
            format!("/bills/update/{id}"),
            "Save Changes",
            Nav::Bills,
        ),
    };

    let mut body: String = format!("<h1>{title}</h1>\n");
    if let Some(message) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(message)));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label for=\"date\">Bill Date</label>\n\
         <input type=\"date\" id=\"date\" name=\"date\" value=\"{}\" required>\n",
        escape_html(&values.date)
    ));
    for ((name, label), value) in AMOUNT_FIELDS.iter().zip(values.amounts.iter()) {
        body.push_str(&format!(
            "<label for=\"{name}\">{label}</label>\n\
             <input type=\"number\" step=\"0.01\" id=\"{name}\" name=\"{name}\" value=\"{}\">\n",
            escape_html(value)
        ));
    }
    body.push_str(&format!(
        "<p><button type=\"submit\">{submit}</button> <a href=\"/\">Cancel</a></p>\n</form>\n"
    ));

    layout(title, nav, &body)
}

/// Renders the usage history page: two stacked charts and a table.
#[must_use]
pub fn history_page(history: &HistoryResponse) -> String {
    let mut body: String = String::from("<h1>Usage History</h1>\n");

    if history.show_all {
        body.push_str(&format!(
            "<p>Showing all {} bills. <a href=\"/history\">Show last {HISTORY_WINDOW}</a></p>\n",
            history.bills.len()
        ));
    } else {
        body.push_str(&format!(
            "<p>Showing the last {HISTORY_WINDOW} bills. <a href=\"/history?all=true\">Show all</a></p>\n"
        ));
    }

    if history.bills.is_empty() {
        body.push_str("<p class=\"empty\">No bills recorded yet.</p>\n");
        return layout("History", Nav::History, &body);
    }

    let series = &history.series;
    let labels: Vec<String> = series
        .dates
        .iter()
        .map(|date| reformat_date(date, CHART_DATE))
        .collect();

    let usage_chart: StackedBarChart<'_> = StackedBarChart {
        title: "Electricity usage (kWh)",
        labels: &labels,
        segments: vec![
            Segment { label: "On-Peak", color: ON_PEAK_COLOR, values: &series.on_peak },
            Segment { label: "Off-Peak", color: OFF_PEAK_COLOR, values: &series.off_peak },
            Segment {
                label: "Super Off-Peak",
                color: SUPER_OFF_PEAK_COLOR,
                values: &series.super_off_peak,
            },
        ],
        format_value: format_quantity,
    };
    let cost_chart: StackedBarChart<'_> = StackedBarChart {
        title: "Cost breakdown",
        labels: &labels,
        segments: vec![
            Segment { label: "Gas", color: GAS_COLOR, values: &series.gas_cost },
            Segment {
                label: "Delivery",
                color: DELIVERY_COLOR,
                values: &series.electricity_delivery_cost,
            },
            Segment {
                label: "Generation",
                color: GENERATION_COLOR,
                values: &series.electricity_generation_cost,
            },
            Segment { label: "Other", color: OTHER_COLOR, values: &series.other_cost },
        ],
        format_value: format_currency,
    };

    body.push_str("<h2>Electricity Usage</h2>\n");
    body.push_str(&usage_chart.render());
    body.push_str("\n<h2>Costs</h2>\n");
    body.push_str(&cost_chart.render());
    body.push('\n');
    body.push_str(&history_table(&history.bills));

    layout("History", Nav::History, &body)
}

fn history_table(bills: &[BillResponse]) -> String {
    let mut table: String = String::from(
        "<table>\n<thead><tr><th>Date</th><th>On-Peak</th><th>Off-Peak</th><th>Super Off-Peak</th>\
         <th>Total kWh</th><th>Total Cost</th></tr></thead>\n<tbody>\n",
    );
    for bill in bills {
        let amounts: &BillAmounts = &bill.amounts;
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&format_date(&bill.date)),
            format_quantity(amounts.electricity_on_peak_kwh),
            format_quantity(amounts.electricity_off_peak_kwh),
            format_quantity(amounts.electricity_super_off_peak_kwh),
            format_quantity(bill.total_kwh),
            format_currency(bill.total_cost),
        ));
    }
    table.push_str("</tbody>\n</table>\n");
    table
}
