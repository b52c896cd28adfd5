//! Unified error types for the demo servers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error as StdError;

use thiserror::Error;

/// Unified error type for both servers.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address the server tried to listen on.
        addr: String,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// IO error while serving.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Template compilation or rendering failure.
///
/// Displays the whole tera error chain.
#[derive(Error, Debug)]
#[error("{}", error_chain(.0))]
pub struct RenderError(#[from] pub tera::Error);

fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
