#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use super::GeometryError;
use super::convention::AngleConvention;
use super::types::{ArcAngle, Point, Triangle, TriangleAngles, TriangleArcAngles, Vertex};

/// Relative tolerance for degeneracy checks. Distances are compared against
/// the triangle's longest edge, the collinearity test against `sin(angle)`.
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Computes interior angles and arc descriptors under a fixed [`AngleConvention`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometryEngine {
    convention: AngleConvention,
}

impl GeometryEngine {
    #[must_use]
    pub fn new(convention: AngleConvention) -> Self {
        Self { convention }
    }

    #[must_use]
    pub fn convention(&self) -> AngleConvention {
        self.convention
    }

    /// Reject triangles whose angles are undefined.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::NonFinite`] for NaN or infinite coordinates.
    /// - [`GeometryError::Coincident`] when two vertices share a position.
    /// - [`GeometryError::Collinear`] when the vertices lie on one line.
    pub fn validate(&self, triangle: &Triangle) -> Result<(), GeometryError> {
        if !triangle.vertices().iter().all(|p| p.is_finite()) {
            return Err(GeometryError::NonFinite);
        }

        let extent = triangle.extent();
        if !extent.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        for first in Vertex::ALL {
            let second = first.next();
            let gap = triangle.vertex(first).distance(triangle.vertex(second));
            if gap <= DEGENERATE_EPSILON * extent {
                let (first, second) = if first.index() < second.index() { (first, second) } else { (second, first) };
                return Err(GeometryError::Coincident { first, second });
            }
        }

        let [a, b, c] = triangle.vertices();
        let (u, v) = (unit(a, b), unit(a, c));
        let sin = (u.0 * v.1 - u.1 * v.0).abs();
        if !sin.is_finite() || sin < DEGENERATE_EPSILON {
            return Err(GeometryError::Collinear);
        }

        Ok(())
    }

    /// Unrounded interior angles in degrees, ordered `[A, B, C]`.
    ///
    /// # Errors
    ///
    /// Returns the [`GeometryEngine::validate`] error for degenerate input.
    pub fn interior_angles(&self, triangle: &Triangle) -> Result<[f64; 3], GeometryError> {
        self.validate(triangle)?;
        Ok(Vertex::ALL.map(|v| {
            angle_at(triangle.vertex(v), triangle.vertex(v.next()), triangle.vertex(v.prev()))
        }))
    }

    /// Display-ready interior angles. The three strings sum to exactly 180.
    ///
    /// # Errors
    ///
    /// Returns the [`GeometryEngine::validate`] error for degenerate input.
    pub fn compute_angles(&self, triangle: &Triangle) -> Result<TriangleAngles, GeometryError> {
        let angles = self.interior_angles(triangle)?;
        let [a, b, c] = self.convention.format_interior_angles(angles);
        Ok(TriangleAngles::new(a, b, c))
    }

    /// Arc descriptor per vertex.
    ///
    /// # Errors
    ///
    /// Returns the [`GeometryEngine::validate`] error for degenerate input.
    pub fn compute_arcs(&self, triangle: &Triangle) -> Result<TriangleArcAngles, GeometryError> {
        let angles = self.interior_angles(triangle)?;
        let arc = |v: Vertex| self.arc_at(triangle, v, angles[v.index()]);
        Ok(TriangleArcAngles { p1: arc(Vertex::A)?, p2: arc(Vertex::B)?, p3: arc(Vertex::C)? })
    }

    fn arc_at(&self, triangle: &Triangle, vertex: Vertex, angle: f64) -> Result<ArcAngle, GeometryError> {
        let origin = triangle.vertex(vertex);
        let toward_next = self.convention.direction(origin, triangle.vertex(vertex.next()));
        let toward_prev = self.convention.direction(origin, triangle.vertex(vertex.prev()));

        // The interior is the side less than 180 degrees wide.
        let (start, end) = if (toward_prev - toward_next).rem_euclid(360.0) <= 180.0 {
            (toward_next, toward_prev)
        } else {
            (toward_prev, toward_next)
        };
        ArcAngle::new(start, end, angle)
    }
}

/// Unit vector along `from -> to`. Products of unit vectors stay in
/// `[-1, 1]` whatever the coordinate scale.
fn unit(from: Point, to: Point) -> (f64, f64) {
    let len = from.distance(to);
    ((to.x - from.x) / len, (to.y - from.y) / len)
}

/// Angle at `vertex` between the rays to `p` and `q`, in degrees.
fn angle_at(vertex: Point, p: Point, q: Point) -> f64 {
    let (u, v) = (unit(vertex, p), unit(vertex, q));
    let cross = u.0 * v.1 - u.1 * v.0;
    let dot = u.0 * v.0 + u.1 * v.1;
    cross.abs().atan2(dot).to_degrees()
}

/// [`GeometryEngine::compute_angles`] under the default convention.
///
/// # Errors
///
/// Returns a [`GeometryError`] for degenerate input.
pub fn compute_angles(triangle: &Triangle) -> Result<TriangleAngles, GeometryError> {
    GeometryEngine::default().compute_angles(triangle)
}

/// [`GeometryEngine::compute_arcs`] under the default convention.
///
/// # Errors
///
/// Returns a [`GeometryError`] for degenerate input.
pub fn compute_arcs(triangle: &Triangle) -> Result<TriangleArcAngles, GeometryError> {
    GeometryEngine::default().compute_arcs(triangle)
}
