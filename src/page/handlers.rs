//! Hello World page handlers.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error};

use super::template::{PageRenderContext, TemplateRenderer};
use crate::utils::rfc3339_now;

/// State shared with page handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageState {
    /// Renderer for the home page.
    pub renderer: TemplateRenderer,
}

impl PageState {
    /// State over the built-in page template.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always "healthy".
    pub status: &'static str,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
}

/// Home page handler - renders the template with the current time.
pub async fn home(State(state): State<PageState>) -> Response {
    let ctx = PageRenderContext::now();

    match state.renderer.render(&ctx) {
        Ok(html) => {
            debug!(time = %ctx.current_time, "Rendered home page");
            ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response()
        }
        Err(e) => {
            error!("Failed to render home page: {}", e);
            e.into_response()
        }
    }
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy",
        timestamp: rfc3339_now(),
    })
}
