//! Hello World page template and its render context.

use chrono::{DateTime, Local};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::RenderError;

/// Page title.
pub const PAGE_TITLE: &str = "Hello World - Go App";
/// Greeting shown under the heading.
pub const PAGE_MESSAGE: &str = "Selamat datang di aplikasi Go yang modern! 🚀";
/// Version shown on the page.
pub const PAGE_VERSION: &str = "1.0.0";

/// Clock format, e.g. `15:04:05, 2 January 2006`.
const TIME_FORMAT: &str = "%H:%M:%S, %-d %B %Y";

const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Values substituted into the page template.
#[derive(Debug, Clone, Serialize)]
pub struct PageRenderContext {
    /// Document title.
    pub title: String,
    /// Greeting message.
    pub message: String,
    /// Formatted server time.
    pub current_time: String,
    /// Application version.
    pub version: String,
}

impl PageRenderContext {
    /// Build the context for the given instant.
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            message: PAGE_MESSAGE.to_string(),
            current_time: format_clock(now),
            version: PAGE_VERSION.to_string(),
        }
    }

    /// Build the context for the current wall-clock time.
    pub fn now() -> Self {
        Self::at(Local::now())
    }
}

/// Format a timestamp the way the page displays it.
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format(TIME_FORMAT).to_string()
}

/// Renders one HTML template with HTML autoescaping.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRenderer {
    source: &'static str,
}

impl TemplateRenderer {
    /// Renderer over the built-in page template.
    pub const fn new() -> Self {
        Self {
            source: PAGE_TEMPLATE,
        }
    }

    /// Renderer over an arbitrary template source.
    pub const fn with_source(source: &'static str) -> Self {
        Self { source }
    }

    /// Compile the template and substitute `ctx` into it.
    pub fn render(&self, ctx: &PageRenderContext) -> Result<String, RenderError> {
        let context = Context::from_serialize(ctx)?;
        Ok(Tera::one_off(self.source, &context, true)?)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
