//! Two small demo HTTP servers.
//!
//! # Servers
//!
//! - `hello-page`: renders an animated "Hello, World!" HTML page at `/` and a
//!   JSON health check at `/api/health`, on port 8080.
//! - `go-app`: a JSON API (`/`, `/health`, `/api/info`) plus a static
//!   Prometheus metrics blob at `/metrics`, behind a permissive CORS layer.
//!   Listens on `$PORT`, default 8080.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`page`]: Hello World page server
//! - [`api`]: Go App API server
//! - [`utils`]: Logging, binding and shutdown helpers

pub mod api;
pub mod config;
pub mod error;
pub mod page;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
