//! View handlers: one module per route in the table.
//!
//! Views answer with JSON view models. The input view accepts a triangle and
//! navigates to the triangle view; the triangle view reads the stored
//! triangle back and derives everything a diagram needs from it.

pub mod input;
pub mod triangle;

use axum::http::StatusCode;

use crate::diagram::ArcPropsError;
use crate::error::ErrorCode;
use crate::geometry::GeometryError;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Diagram(#[from] ArcPropsError),
}

impl ErrorCode for ViewError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Geometry(err) => err.error_code(),
            Self::Diagram(err) => err.error_code(),
        }
    }
}

impl ViewError {
    /// Degenerate triangles are the caller's fault; bad arc props are ours.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Geometry(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Diagram(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
