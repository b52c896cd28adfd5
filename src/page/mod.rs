//! Hello World page server: HTML home page and JSON health check.

pub mod handlers;
pub mod routes;
pub mod template;

pub use handlers::PageState;
pub use routes::{create_router, LISTEN_ADDR};
pub use template::{PageRenderContext, TemplateRenderer};
