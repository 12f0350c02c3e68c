//! Error codes and JSON error bodies shared by every handler.
//!
//! DESIGN
//! ======
//! Each domain error enum implements [`ErrorCode`] so handlers can answer
//! with a stable, grepable `E_*` code alongside the human-readable message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::config::ConfigError;

/// Trait for errors that carry a grepable error code.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl ErrorBody {
    #[must_use]
    pub fn from_error<E: ErrorCode>(err: &E) -> Self {
        Self { code: err.error_code(), message: err.to_string() }
    }
}

/// Render `err` as a JSON error response with the given status.
pub fn error_response<E: ErrorCode>(status: StatusCode, err: &E) -> Response {
    (status, Json(ErrorBody::from_error(err))).into_response()
}

/// A request body that could not be read as the expected JSON shape.
#[derive(Debug, thiserror::Error)]
#[error("invalid request body: {0}")]
pub struct BodyError(#[from] pub JsonRejection);

impl BodyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.0.status()
    }
}

impl ErrorCode for BodyError {
    fn error_code(&self) -> &'static str {
        "E_INVALID_BODY"
    }
}

/// Fatal errors before the server starts accepting connections.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}
