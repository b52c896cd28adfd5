//! Go App API route definitions.

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health, info, metrics, welcome};

/// Permissive CORS policy applied to every route, the 404 fallback included.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/api/info", get(info))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
