//! Triangle view: angles, labels and arc geometry for the stored triangle.

#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use tracing::{debug, error};

use super::ViewError;
use crate::diagram::{self, AngleArcProps};
use crate::error::{ErrorCode, error_response};
use crate::geometry::{Triangle, TriangleAngles, TriangleArcAngles, Vertex};
use crate::router::View;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleViewModel {
    pub view: &'static str,
    pub triangle: Triangle,
    pub angles: TriangleAngles,
    /// `"A = 90.0°"` style label per vertex.
    pub labels: [String; 3],
    pub arcs: TriangleArcAngles,
    pub arc_props: [AngleArcProps; 3],
    /// Input view href, for editing the triangle.
    pub back: String,
}

/// Build the view model for `triangle` with the state's engine and radius.
///
/// # Errors
///
/// Returns [`ViewError::Geometry`] for a degenerate triangle and
/// [`ViewError::Diagram`] if arc props cannot be built.
pub fn build_view_model(state: &AppState, triangle: Triangle) -> Result<TriangleViewModel, ViewError> {
    let angles = state.engine.compute_angles(&triangle)?;
    let arcs = state.engine.compute_arcs(&triangle)?;
    let arc_props = diagram::arc_props(&triangle, &arcs, state.config.arc_radius)?;
    let labels = Vertex::ALL.map(|v| angles.label(v));

    Ok(TriangleViewModel {
        view: View::Triangle.name(),
        triangle,
        angles,
        labels,
        arcs,
        arc_props,
        back: state.routes.href(View::Input),
    })
}

/// `GET /triangle` — results for the stored triangle.
///
/// With nothing submitted yet, navigates back to the input view.
pub async fn show(State(state): State<AppState>) -> Response {
    let Some(triangle) = state.current_triangle().await else {
        debug!("no triangle submitted; redirecting to input view");
        return Redirect::to(&state.routes.href(View::Input)).into_response();
    };

    match build_view_model(&state, triangle) {
        Ok(model) => Json(model).into_response(),
        Err(err) => {
            error!(error = %err, code = err.error_code(), ?triangle, "triangle view failed");
            error_response(err.status(), &err)
        }
    }
}
