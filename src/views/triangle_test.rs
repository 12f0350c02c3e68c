#![allow(clippy::float_cmp)]

use axum::http::StatusCode;
use axum::http::header::LOCATION;
use serde_json::Value;

use super::*;
use crate::config::AppConfig;
use crate::geometry::{AngleConvention, Point};
use crate::state::test_helpers;

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be json")
}

#[tokio::test]
async fn redirects_to_input_when_nothing_submitted() {
    let state = test_helpers::test_app_state();
    let resp = show(State(state)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn shows_angles_arcs_and_props() {
    let state = test_helpers::test_app_state();
    state.store_triangle(test_helpers::right_345()).await;

    let resp = show(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;

    assert_eq!(body["view"], "triangle");
    assert_eq!(body["angles"]["A"], "90.0");
    assert_eq!(body["angles"]["B"], "36.9");
    assert_eq!(body["angles"]["C"], "53.1");
    assert_eq!(body["labels"], serde_json::json!(["A = 90.0\u{b0}", "B = 36.9\u{b0}", "C = 53.1\u{b0}"]));
    assert_eq!(body["arcs"]["p1"]["start"], 0.0);
    assert_eq!(body["arcs"]["p1"]["end"], 90.0);
    assert_eq!(body["arcProps"][1]["cx"], 4.0);
    assert_eq!(body["arcProps"][1]["color"], "#43a047");
    assert!(body["arcProps"][0]["startAngle"].is_number());
    assert_eq!(body["back"], "/");
}

#[test]
fn view_model_arcs_agree_with_angles() {
    let state = test_helpers::test_app_state();
    let t = Triangle::new(Point::new(-2.0, 1.0), Point::new(7.0, 3.0), Point::new(1.0, 9.0));
    let model = build_view_model(&state, t).unwrap();

    let mut sum = 0.0;
    for v in Vertex::ALL {
        let shown: f64 = model.angles.get(v).parse().unwrap();
        sum += shown;
        assert!((model.arcs.get(v).angle() - shown).abs() <= 0.1, "{v}");
        let props = &model.arc_props[v.index()];
        assert_eq!(props.start_angle(), model.arcs.get(v).start());
        assert_eq!(props.end_angle(), model.arcs.get(v).end());
    }
    assert!((sum - 180.0).abs() < 1e-9);
}

#[test]
fn view_model_uses_configured_radius() {
    let state = AppState::new(AppConfig { arc_radius: 0.5, ..AppConfig::default() });
    let model = build_view_model(&state, test_helpers::right_345()).unwrap();
    assert!(model.arc_props.iter().all(|p| p.radius() == 0.5));
}

#[test]
fn view_model_uses_configured_precision() {
    let config = AppConfig { convention: AngleConvention { decimals: 2, ..AngleConvention::default() }, ..AppConfig::default() };
    let state = AppState::new(config);
    let model = build_view_model(&state, test_helpers::right_345()).unwrap();
    assert_eq!(model.angles.get(Vertex::B), "36.87");
}

#[test]
fn degenerate_triangle_is_a_geometry_error() {
    let state = test_helpers::test_app_state();
    let flat = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0));
    let err = build_view_model(&state, flat).unwrap_err();
    assert!(matches!(err, ViewError::Geometry(_)));
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.error_code(), "E_COLLINEAR_VERTICES");
}
