//! Go App API handlers.

use axum::{http::header, response::IntoResponse, Json};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::utils::rfc3339_now;

/// Service name reported by every JSON endpoint.
pub const SERVICE_NAME: &str = "go-app";
/// Service version reported by every JSON endpoint.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Static Prometheus exposition text. Values never change with traffic.
pub const METRICS_TEXT: &str = "\
# HELP go_app_requests_total Total number of HTTP requests
# TYPE go_app_requests_total counter
go_app_requests_total 0
# HELP go_app_errors_total Total number of HTTP errors
# TYPE go_app_errors_total counter
go_app_errors_total 0
# HELP go_app_up Whether the application is up
# TYPE go_app_up gauge
go_app_up 1
";

const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Welcome response.
#[derive(Debug, Serialize)]
pub struct WelcomePayload {
    /// Greeting.
    pub message: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Service name.
    pub service: &'static str,
    /// Always "healthy".
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// RFC 3339 timestamp of the check.
    pub time: String,
}

/// Application info response.
#[derive(Debug, Serialize)]
pub struct InfoPayload {
    /// Human-readable application name.
    pub app_name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Feature list, in display order.
    pub features: Vec<&'static str>,
}

static INFO: Lazy<InfoPayload> = Lazy::new(|| InfoPayload {
    app_name: "Go App",
    description: "A simple Go web application with health checks and metrics",
    features: vec![
        "RESTful API",
        "Health checks",
        "CORS support",
        "Prometheus metrics",
        "Docker ready",
    ],
});

/// Welcome handler.
pub async fn welcome() -> impl IntoResponse {
    Json(WelcomePayload {
        message: "Welcome to Go App!",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthStatus {
        service: SERVICE_NAME,
        status: "healthy",
        version: SERVICE_VERSION,
        time: rfc3339_now(),
    })
}

/// Info handler.
pub async fn info() -> impl IntoResponse {
    Json(&*INFO)
}

/// Metrics handler - static exposition text.
pub async fn metrics() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)], METRICS_TEXT)
}
