//! expensed-server: HTTP API for expense records
//!
//! One Postgres table, four operations (create, fetch-one, fetch-all,
//! update), JSON in and out. Everything a handler can fail with is
//! converted to a `{"message": ...}` response at the boundary.

pub mod auth;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use server::{run_server, ServerConfig};
pub use state::AppState;

use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with all routes.
///
/// The expense routes sit behind the auth gate; `/health` does not.
pub fn build_router(state: AppState) -> Router {
    let expenses = routes::expenses::router()
        .layer(middleware::from_fn_with_state(state.clone(), auth::require_auth));

    Router::new()
        .merge(expenses)
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
