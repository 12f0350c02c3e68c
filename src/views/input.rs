//! Input view: shows the triangle form model and accepts submissions.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{BodyError, ErrorCode, error_response};
use crate::geometry::{Point, Triangle};
use crate::router::View;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputViewModel {
    pub view: &'static str,
    /// Prefill: the current triangle, or [`sample_triangle`] before the first submit.
    pub triangle: Triangle,
    pub has_result: bool,
    /// Where to `POST` the triangle.
    pub submit: String,
    pub result: String,
}

/// 3-4-5 right triangle.
#[must_use]
pub fn sample_triangle() -> Triangle {
    Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0))
}

/// `GET /` — input form model.
pub async fn show(State(state): State<AppState>) -> Json<InputViewModel> {
    let current = state.current_triangle().await;
    Json(InputViewModel {
        view: View::Input.name(),
        triangle: current.unwrap_or_else(sample_triangle),
        has_result: current.is_some(),
        submit: state.routes.href(View::Input),
        result: state.routes.href(View::Triangle),
    })
}

/// `POST /` — accept a triangle and navigate to the triangle view.
pub async fn submit(State(state): State<AppState>, body: Result<Json<Triangle>, JsonRejection>) -> Response {
    let triangle = match body {
        Ok(Json(triangle)) => triangle,
        Err(rejection) => {
            let err = BodyError::from(rejection);
            warn!(error = %err, "unreadable triangle submission");
            return error_response(err.status(), &err);
        }
    };

    if let Err(err) = state.engine.validate(&triangle) {
        warn!(error = %err, code = err.error_code(), ?triangle, "rejected triangle");
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, &err);
    }

    state.store_triangle(triangle).await;
    info!(?triangle, "triangle accepted");
    Redirect::to(&state.routes.href(View::Triangle)).into_response()
}
