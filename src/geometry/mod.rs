//! Geometry — triangle value types and the angle engine.
//!
//! DESIGN
//! ======
//! Everything here is pure. The view layer hands a [`Triangle`] to a
//! [`GeometryEngine`] and gets back display strings ([`TriangleAngles`]) and
//! arc descriptors ([`TriangleArcAngles`]). How angles are printed and which
//! way arcs sweep is decided in one place, [`AngleConvention`], so the
//! computation and whoever draws the arcs cannot disagree.
//!
//! ERROR HANDLING
//! ==============
//! Degenerate triangles never produce NaN or infinite angles. The engine
//! rejects them up front with a [`GeometryError`].

pub mod convention;
pub mod engine;
pub mod types;

pub use convention::{AngleConvention, YAxis};
pub use engine::{GeometryEngine, compute_angles, compute_arcs};
pub use types::{ArcAngle, Point, Triangle, TriangleAngles, TriangleArcAngles, Vertex};

use crate::error::ErrorCode;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("vertex coordinates must be finite numbers")]
    NonFinite,
    #[error("vertices {first} and {second} coincide")]
    Coincident { first: Vertex, second: Vertex },
    #[error("vertices are collinear; the triangle has no area")]
    Collinear,
    #[error("arc {field} out of range: {value}")]
    ArcOutOfRange { field: &'static str, value: f64 },
}

impl ErrorCode for GeometryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFinite => "E_NON_FINITE",
            Self::Coincident { .. } => "E_COINCIDENT_VERTICES",
            Self::Collinear => "E_COLLINEAR_VERTICES",
            Self::ArcOutOfRange { .. } => "E_ARC_OUT_OF_RANGE",
        }
    }
}
