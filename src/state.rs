//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only mutable piece is the current triangle: the input view writes it, the
//! triangle view reads it. Navigation never carries triangle data.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::geometry::{GeometryEngine, Triangle};
use crate::router::RouteTable;

/// Clone is required by Axum; the store is Arc-wrapped, the rest is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub routes: RouteTable,
    pub engine: GeometryEngine,
    current: Arc<RwLock<Option<Triangle>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            routes: RouteTable::new(&config.base_url),
            engine: GeometryEngine::new(config.convention),
            config: Arc::new(config),
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// The most recently accepted triangle, if any.
    pub async fn current_triangle(&self) -> Option<Triangle> {
        *self.current.read().await
    }

    pub async fn store_triangle(&self, triangle: Triangle) {
        *self.current.write().await = Some(triangle);
    }
}
