#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeometryError;

// =============================================================================
// POINT
// =============================================================================

/// A point on the triangle's plane. Units are whatever the caller uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point, rejecting NaN and infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if either coordinate is not finite.
    pub fn try_new(x: f64, y: f64) -> Result<Self, GeometryError> {
        let point = Self { x, y };
        if point.is_finite() { Ok(point) } else { Err(GeometryError::NonFinite) }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

// =============================================================================
// VERTEX
// =============================================================================

/// Vertex label. `A` sits at `p1`, `B` at `p2`, `C` at `p3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Position in `[p1, p2, p3]`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }

    /// The vertex that follows this one going `p1 -> p2 -> p3 -> p1`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::C,
            Self::C => Self::A,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::A => Self::C,
            Self::B => Self::A,
            Self::C => Self::B,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TRIANGLE
// =============================================================================

/// Three vertices. No orientation or ordering is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    #[must_use]
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    #[must_use]
    pub fn vertex(&self, vertex: Vertex) -> Point {
        self.vertices()[vertex.index()]
    }

    /// Length of the longest edge. Zero when all vertices coincide.
    #[must_use]
    pub fn extent(&self) -> f64 {
        let [a, b, c] = self.vertices();
        a.distance(b).max(b.distance(c)).max(c.distance(a))
    }
}

// =============================================================================
// ANGLES
// =============================================================================

/// Display-ready interior angle per vertex, in degrees.
///
/// The strings are plain decimal numbers (`"36.9"`); use [`TriangleAngles::label`]
/// for the decorated form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriangleAngles {
    #[serde(rename = "A")]
    a: String,
    #[serde(rename = "B")]
    b: String,
    #[serde(rename = "C")]
    c: String,
}

impl TriangleAngles {
    #[must_use]
    pub fn new(a: String, b: String, c: String) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub fn get(&self, vertex: Vertex) -> &str {
        match vertex {
            Vertex::A => &self.a,
            Vertex::B => &self.b,
            Vertex::C => &self.c,
        }
    }

    /// `"B = 36.9°"`
    #[must_use]
    pub fn label(&self, vertex: Vertex) -> String {
        format!("{vertex} = {}\u{b0}", self.get(vertex))
    }
}

/// Arc descriptor for one vertex, all values in degrees.
///
/// `start` and `end` are directions of the two adjacent edges in `[0, 360)`.
/// Sweeping counter-clockwise from `start` by `angle` lands on `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcAngle {
    start: f64,
    end: f64,
    angle: f64,
}

impl ArcAngle {
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcOutOfRange`] if `start` or `end` is outside
    /// `[0, 360)` or `angle` is outside `(0, 180)`.
    pub fn new(start: f64, end: f64, angle: f64) -> Result<Self, GeometryError> {
        for (field, value) in [("start", start), ("end", end)] {
            if !(0.0..360.0).contains(&value) {
                return Err(GeometryError::ArcOutOfRange { field, value });
            }
        }
        if !(angle > 0.0 && angle < 180.0) {
            return Err(GeometryError::ArcOutOfRange { field: "angle", value: angle });
        }
        Ok(Self { start, end, angle })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Counter-clockwise distance from `start` to `end`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        (self.end - self.start).rem_euclid(360.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangleArcAngles {
    pub p1: ArcAngle,
    pub p2: ArcAngle,
    pub p3: ArcAngle,
}

impl TriangleArcAngles {
    #[must_use]
    pub fn get(&self, vertex: Vertex) -> ArcAngle {
        match vertex {
            Vertex::A => self.p1,
            Vertex::B => self.p2,
            Vertex::C => self.p3,
        }
    }
}
