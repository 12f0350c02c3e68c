//! Service configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

use crate::geometry::convention::{DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::geometry::{AngleConvention, YAxis};
use crate::router::{HEALTHZ_PATH, RouteTable};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_ARC_RADIUS: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    /// Path prefix every route is mounted under, e.g. `/` or `/triangles`.
    pub base_url: String,
    pub convention: AngleConvention,
    /// Requested arc radius in plane units. Clamped per vertex when drawn.
    pub arc_radius: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            convention: AngleConvention::default(),
            arc_radius: DEFAULT_ARC_RADIUS,
        }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BASE_URL`: default `/`
    /// - `ANGLE_DECIMALS`: default 1, at most 6
    /// - `ARC_RADIUS`: default 24.0, finite and non-negative
    /// - `Y_AXIS`: `up` (default) or `down`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for any malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for any malformed value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| invalid("PORT", &raw, "not a port number"))?,
            None => defaults.port,
        };

        let base_url = match get("BASE_URL") {
            Some(raw) => {
                check_base_url(&raw).map_err(|reason| invalid("BASE_URL", &raw, reason))?;
                raw
            }
            None => defaults.base_url,
        };

        let decimals = match get("ANGLE_DECIMALS") {
            Some(raw) => {
                let decimals =
                    raw.trim().parse::<u8>().map_err(|_| invalid("ANGLE_DECIMALS", &raw, "not an integer"))?;
                if decimals > MAX_DECIMALS {
                    return Err(invalid("ANGLE_DECIMALS", &raw, "at most 6 decimals"));
                }
                decimals
            }
            None => DEFAULT_DECIMALS,
        };

        let y_axis = match get("Y_AXIS") {
            Some(raw) => YAxis::parse(&raw).ok_or_else(|| invalid("Y_AXIS", &raw, "expected `up` or `down`"))?,
            None => YAxis::default(),
        };

        let arc_radius = match get("ARC_RADIUS") {
            Some(raw) => {
                let radius = raw.trim().parse::<f64>().map_err(|_| invalid("ARC_RADIUS", &raw, "not a number"))?;
                if !radius.is_finite() || radius < 0.0 {
                    return Err(invalid("ARC_RADIUS", &raw, "must be finite and non-negative"));
                }
                radius
            }
            None => defaults.arc_radius,
        };

        Ok(Self { port, base_url, convention: AngleConvention { decimals, y_axis }, arc_radius })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// The base becomes a literal route prefix, so it must not contain router
/// syntax or shadow the health check.
fn check_base_url(raw: &str) -> Result<(), &'static str> {
    if raw.contains(['{', '}', '*', '?', '#']) {
        return Err("must not contain `{`, `}`, `*`, `?` or `#`");
    }
    if RouteTable::new(raw).base() == HEALTHZ_PATH {
        return Err("collides with the health check route");
    }
    Ok(())
}

fn invalid(var: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { var, value: value.to_string(), reason }
}
