//! Static route table: which path shows which view.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use tracing::warn;

use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches {0}")]
    NotFound(String),
    #[error("{path} is outside the base path {base}")]
    OutsideBase { path: String, base: String },
    #[error("unknown route name: {0}")]
    UnknownName(String),
}

impl ErrorCode for NavigationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_ROUTE_NOT_FOUND",
            Self::OutsideBase { .. } => "E_OUTSIDE_BASE",
            Self::UnknownName(_) => "E_UNKNOWN_ROUTE",
        }
    }
}

/// The screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Triangle entry form.
    Input,
    /// Angles and arc diagram for the submitted triangle.
    Triangle,
}

impl View {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Path relative to the base.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.def().path
    }

    fn def(self) -> &'static RouteDef {
        match self {
            Self::Input => &ROUTES[0],
            Self::Triangle => &ROUTES[1],
        }
    }

    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownName`] if no route has that name.
    pub fn from_name(name: &str) -> Result<Self, NavigationError> {
        ROUTES
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.view)
            .ok_or_else(|| NavigationError::UnknownName(name.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub name: &'static str,
    pub path: &'static str,
    pub view: View,
}

pub static ROUTES: [RouteDef; 2] = [
    RouteDef { name: "input", path: "/", view: View::Input },
    RouteDef { name: "triangle", path: "/triangle", view: View::Triangle },
];

/// The route table bound to a deployment base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    /// Empty for root, otherwise `/segment[/segment...]` with no trailing slash.
    base: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new("/")
    }
}

impl RouteTable {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_matches('/');
        let base = if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") };
        Self { base }
    }

    /// Normalized base path, `/` for root.
    #[must_use]
    pub fn base(&self) -> &str {
        if self.base.is_empty() { "/" } else { &self.base }
    }

    /// Match a request path against the table.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::OutsideBase`] if the path is not under the base.
    /// - [`NavigationError::NotFound`] if nothing in the table matches.
    pub fn resolve(&self, path: &str) -> Result<View, NavigationError> {
        let path = path.split_once(['?', '#']).map_or(path, |(p, _)| p);

        let relative = if self.base.is_empty() {
            path
        } else {
            match path.strip_prefix(self.base.as_str()) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                _ => {
                    return Err(NavigationError::OutsideBase { path: path.to_string(), base: self.base.clone() });
                }
            }
        };

        let trimmed = relative.trim_end_matches('/');
        let relative = if trimmed.is_empty() { "/" } else { trimmed };

        ROUTES
            .iter()
            .find(|r| r.path == relative)
            .map(|r| r.view)
            .ok_or_else(|| NavigationError::NotFound(path.to_string()))
    }

    /// Resolve `path`, falling back to the input view when nothing matches.
    #[must_use]
    pub fn navigate(&self, path: &str) -> View {
        match self.resolve(path) {
            Ok(view) => view,
            Err(err) => {
                warn!(error = %err, code = err.error_code(), path, "navigation fell back to input view");
                View::Input
            }
        }
    }

    /// Absolute path of `view` under the base. The input view under a
    /// non-root base is the bare base, without a trailing slash.
    #[must_use]
    pub fn href(&self, view: View) -> String {
        match (self.base.is_empty(), view.path()) {
            (true, path) => path.to_string(),
            (false, "/") => self.base.clone(),
            (false, path) => format!("{}{path}", self.base),
        }
    }
}
