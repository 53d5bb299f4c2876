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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod chart;
mod error;
mod extract;
mod handlers;
mod pages;
mod render;

#[cfg(test)]
mod tests;

use axum::{
    Router,
    routing::{get, post},
};
use bill_tracker_persistence::{Persistence, PersistenceError};
use clap::Parser;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{
    handle_create_bill, handle_delete_bill, handle_get_bill, handle_get_history, handle_health,
    handle_list_bills, handle_update_bill,
};
use crate::pages::{
    page_add_bill, page_bills_list, page_create_bill, page_edit_bill, page_history,
    page_update_bill,
};

/// Database path that selects an isolated in-memory store.
const IN_MEMORY_DATABASE: &str = ":memory:";

/// Bill Tracker Server - HTTP server for tracking utility bills
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. Use `:memory:` for an in-memory database.
    #[arg(short, long, env = "DATABASE_PATH", default_value = "bills.db")]
    database: String,

    /// Address to bind the server to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store handle sits behind a Mutex; handlers hold the guard only for
/// the duration of a single service call.
#[derive(Clone)]
struct AppState {
    /// The bill store.
    persistence: Arc<Mutex<Persistence>>,
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .route("/bills", get(handle_list_bills).post(handle_create_bill))
        .route(
            "/bills/{id}",
            get(handle_get_bill)
                .put(handle_update_bill)
                .delete(handle_delete_bill),
        )
        .route("/history", get(handle_get_history))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(page_bills_list))
        .route("/add", get(page_add_bill))
        .route("/edit/{id}", get(page_edit_bill))
        .route("/history", get(page_history))
        .route("/bills/create", post(page_create_bill))
        .route("/bills/update/{id}", post(page_update_bill))
        .route("/health", get(handle_health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Opens the store selected by `--database`.
fn open_persistence(database: &str) -> Result<Persistence, PersistenceError> {
    if database == IN_MEMORY_DATABASE {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    } else {
        info!(path = %database, "Using file-based database");
        Persistence::new_with_file(database)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Bill Tracker Server");

    let persistence: Persistence = open_persistence(&args.database)?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
