//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every entry in [`ROUTES`] is mounted under the configured base path and
//! bound to its view handlers. Unknown paths never render a blank page: GET
//! requests are redirected to the view [`RouteTable::navigate`] picks (the
//! input view when nothing matches), anything else gets a JSON 404.

pub mod table;

pub use table::{NavigationError, ROUTES, RouteDef, RouteTable, View};

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{MethodRouter, get};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::error_response;
use crate::state::AppState;
use crate::views;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Liveness probe path, always mounted at the root.
pub const HEALTHZ_PATH: &str = "/healthz";

/// Handlers backing each view.
fn view_handlers(view: View) -> MethodRouter<AppState> {
    match view {
        View::Input => get(views::input::show).post(views::input::submit),
        View::Triangle => get(views::triangle::show),
    }
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new();
    for def in &ROUTES {
        router = router.route(&state.routes.href(def.view), view_handlers(def.view));
    }

    router
        .route(HEALTHZ_PATH, get(healthz))
        .fallback(fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn fallback(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method == Method::GET || method == Method::HEAD {
        let view = state.routes.navigate(uri.path());
        return Redirect::to(&state.routes.href(view)).into_response();
    }
    error_response(StatusCode::NOT_FOUND, &NavigationError::NotFound(uri.path().to_string()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
