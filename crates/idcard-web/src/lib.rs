//! HTTP interface for the resident ID card validator.
//!
//! A thin wrapper over the core: `POST /api/validate` takes a block of
//! text (one ID number per line) and returns the partitioned batch
//! summary as JSON.

pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/validate", post(handlers::validate_ids))
        .layer(TraceLayer::new_for_http())
}
