use axum::http::header::LOCATION;
use serde_json::Value;

use super::*;
use crate::geometry::Point;
use crate::state::test_helpers;

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be json")
}

#[tokio::test]
async fn show_prefills_sample_before_first_submit() {
    let state = test_helpers::test_app_state();
    let Json(model) = show(State(state)).await;
    assert_eq!(model.view, "input");
    assert_eq!(model.triangle, sample_triangle());
    assert!(!model.has_result);
    assert_eq!(model.submit, "/");
    assert_eq!(model.result, "/triangle");
}

#[tokio::test]
async fn show_prefills_current_triangle() {
    let state = test_helpers::test_app_state();
    let current = Triangle::new(Point::new(1.0, 1.0), Point::new(6.0, 2.0), Point::new(3.0, 7.0));
    state.store_triangle(current).await;
    let Json(model) = show(State(state)).await;
    assert_eq!(model.triangle, current);
    assert!(model.has_result);
}

#[tokio::test]
async fn submit_stores_and_navigates_to_triangle_view() {
    let state = test_helpers::test_app_state();
    let resp = submit(State(state.clone()), Ok(Json(test_helpers::right_345()))).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/triangle");
    assert_eq!(state.current_triangle().await, Some(test_helpers::right_345()));
}

#[tokio::test]
async fn submit_respects_base_path() {
    let state = test_helpers::test_app_state_with_base("/tools/");
    let resp = submit(State(state), Ok(Json(test_helpers::right_345()))).await;
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/tools/triangle");
}

#[tokio::test]
async fn submit_rejects_collinear_triangle_without_storing() {
    let state = test_helpers::test_app_state();
    let flat = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0));
    let resp = submit(State(state.clone()), Ok(Json(flat))).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    assert_eq!(body["code"], "E_COLLINEAR_VERTICES");
    assert!(body["message"].as_str().unwrap().contains("collinear"));
    assert!(state.current_triangle().await.is_none());
}

#[tokio::test]
async fn rejected_submit_keeps_previous_triangle() {
    let state = test_helpers::test_app_state();
    state.store_triangle(test_helpers::right_345()).await;
    let same = Triangle::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0), Point::new(2.0, 2.0));
    let resp = submit(State(state.clone()), Ok(Json(same))).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.current_triangle().await, Some(test_helpers::right_345()));
}

#[test]
fn sample_is_the_right_triangle() {
    let angles = crate::geometry::compute_angles(&sample_triangle()).unwrap();
    assert_eq!(angles.get(crate::geometry::Vertex::A), "90.0");
}
