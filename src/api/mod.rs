//! Go App API: welcome, info, health and metrics endpoints behind CORS.

pub mod handlers;
pub mod routes;

pub use routes::{cors_layer, create_router};
