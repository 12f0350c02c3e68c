//! Angle convention shared by the engine and anything that draws arcs.
//!
//! Arc directions are degrees from the +x axis, increasing counter-clockwise
//! as the plane is displayed, normalized to `[0, 360)`. With [`YAxis::Down`]
//! (screen coordinates) the y delta is flipped before measuring, so the arc
//! still reads counter-clockwise on screen.

#[cfg(test)]
#[path = "convention_test.rs"]
mod convention_test;

use std::fmt;

use super::types::Point;

pub const DEFAULT_DECIMALS: u8 = 1;
pub const MAX_DECIMALS: u8 = 6;

/// Which way the y axis points on the displayed plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAxis {
    #[default]
    Up,
    Down,
}

impl YAxis {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleConvention {
    /// Digits after the decimal point in formatted angles.
    pub decimals: u8,
    pub y_axis: YAxis,
}

impl Default for AngleConvention {
    fn default() -> Self {
        Self { decimals: DEFAULT_DECIMALS, y_axis: YAxis::Up }
    }
}

impl AngleConvention {
    /// Format a degree value as a plain decimal string, no unit suffix.
    #[must_use]
    pub fn format_degrees(&self, degrees: f64) -> String {
        let precision = usize::from(self.decimals.min(MAX_DECIMALS));
        format!("{degrees:.precision$}")
    }

    /// Format the three interior angles of one triangle.
    ///
    /// Rounds by largest remainder instead of independently, so the printed
    /// values always add up to exactly 180.
    #[must_use]
    pub fn format_interior_angles(&self, angles: [f64; 3]) -> [String; 3] {
        let decimals = self.decimals.min(MAX_DECIMALS);
        let scale = 10_i64.pow(u32::from(decimals));
        #[allow(clippy::cast_precision_loss)]
        let scale_f = scale as f64;

        #[allow(clippy::cast_possible_truncation)]
        let mut units = angles.map(|deg| (deg * scale_f).floor() as i64);
        let mut order = [0_usize, 1, 2];
        let remainder = |i: usize| angles[i] * scale_f - (angles[i] * scale_f).floor();
        order.sort_by(|&i, &j| remainder(j).total_cmp(&remainder(i)));

        let missing = 180 * scale - units.iter().sum::<i64>();
        for &i in order.iter().take(usize::try_from(missing.clamp(0, 3)).unwrap_or_default()) {
            units[i] += 1;
        }

        #[allow(clippy::cast_precision_loss)]
        let formatted = units.map(|u| self.format_degrees(u as f64 / scale_f));
        formatted
    }

    /// Direction of the ray `from -> to`, in degrees within `[0, 360)`.
    #[must_use]
    pub fn direction(&self, from: Point, to: Point) -> f64 {
        let dx = to.x - from.x;
        let dy = match self.y_axis {
            YAxis::Up => to.y - from.y,
            YAxis::Down => from.y - to.y,
        };
        normalize_degrees(dy.atan2(dx).to_degrees())
    }
}

/// Wrap any finite angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
