//! Angle-arc parameters for the diagram view.
//!
//! [`AngleArcProps`] is everything one angle-arc element needs: where its
//! center is, how large it is, which directions it spans and its color.
//! Producing them is the last step before drawing; drawing itself happens
//! on the client.

#[cfg(test)]
#[path = "diagram_test.rs"]
mod diagram_test;

use serde::Serialize;

use crate::error::ErrorCode;
use crate::geometry::{Triangle, TriangleArcAngles, Vertex};

/// Arc colors for vertices A, B, C.
pub const ARC_PALETTE: [&str; 3] = ["#e53935", "#43a047", "#1e88e5"];

/// An arc never reaches further than this fraction of its shortest adjacent edge.
pub const MAX_RADIUS_EDGE_RATIO: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArcPropsError {
    #[error("arc center must be finite")]
    NonFiniteCenter,
    #[error("arc radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
    #[error("{field} must be within [0, 360), got {value}")]
    AngleOutOfRange { field: &'static str, value: f64 },
    #[error("invalid arc color: {0:?}")]
    InvalidColor(String),
}

impl ErrorCode for ArcPropsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFiniteCenter => "E_ARC_CENTER",
            Self::InvalidRadius(_) => "E_ARC_RADIUS",
            Self::AngleOutOfRange { .. } => "E_ARC_ANGLE",
            Self::InvalidColor(_) => "E_ARC_COLOR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleArcProps {
    cx: f64,
    cy: f64,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    color: String,
}

impl AngleArcProps {
    /// # Errors
    ///
    /// Returns an [`ArcPropsError`] if the center is not finite, the radius is
    /// negative or not finite, either angle is outside `[0, 360)`, or `color`
    /// is neither `#rgb`/`#rrggbb` nor a plain color keyword.
    pub fn new(
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: impl Into<String>,
    ) -> Result<Self, ArcPropsError> {
        if !cx.is_finite() || !cy.is_finite() {
            return Err(ArcPropsError::NonFiniteCenter);
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(ArcPropsError::InvalidRadius(radius));
        }
        for (field, value) in [("startAngle", start_angle), ("endAngle", end_angle)] {
            if !(0.0..360.0).contains(&value) {
                return Err(ArcPropsError::AngleOutOfRange { field, value });
            }
        }
        let color = color.into();
        if !is_valid_color(&color) {
            return Err(ArcPropsError::InvalidColor(color));
        }
        Ok(Self { cx, cy, radius, start_angle, end_angle, color })
    }

    #[must_use]
    pub fn cx(&self) -> f64 {
        self.cx
    }

    #[must_use]
    pub fn cy(&self) -> f64 {
        self.cy
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

fn is_valid_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

/// Radius actually used at `vertex`: `requested`, capped by the shortest adjacent edge.
#[must_use]
pub fn clamp_radius(triangle: &Triangle, vertex: Vertex, requested: f64) -> f64 {
    let origin = triangle.vertex(vertex);
    let shortest = origin
        .distance(triangle.vertex(vertex.next()))
        .min(origin.distance(triangle.vertex(vertex.prev())));
    requested.min(shortest * MAX_RADIUS_EDGE_RATIO)
}

/// One [`AngleArcProps`] per vertex, centered on the vertex, in palette colors.
///
/// # Errors
///
/// Returns an [`ArcPropsError`] if `radius` is invalid or a vertex is not finite.
pub fn arc_props(
    triangle: &Triangle,
    arcs: &TriangleArcAngles,
    radius: f64,
) -> Result<[AngleArcProps; 3], ArcPropsError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(ArcPropsError::InvalidRadius(radius));
    }
    let props = |vertex: Vertex| {
        let center = triangle.vertex(vertex);
        let arc = arcs.get(vertex);
        AngleArcProps::new(
            center.x,
            center.y,
            clamp_radius(triangle, vertex, radius),
            arc.start(),
            arc.end(),
            ARC_PALETTE[vertex.index()],
        )
    };
    Ok([props(Vertex::A)?, props(Vertex::B)?, props(Vertex::C)?])
}
