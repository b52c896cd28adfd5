//! Hello World page route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, home, PageState};

/// Fixed listening address of the page server.
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Create the page router.
pub fn create_router(state: PageState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
