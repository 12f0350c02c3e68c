use super::test_helpers::*;
use super::*;
use crate::geometry::YAxis;

#[tokio::test]
async fn new_state_has_no_triangle() {
    let state = test_app_state();
    assert!(state.current_triangle().await.is_none());
}

#[tokio::test]
async fn stored_triangle_is_visible_to_clones() {
    let state = test_app_state();
    let other = state.clone();
    state.store_triangle(right_345()).await;
    assert_eq!(other.current_triangle().await, Some(right_345()));
}

#[tokio::test]
async fn storing_replaces_previous_triangle() {
    let state = test_app_state();
    state.store_triangle(right_345()).await;
    let mut next = right_345();
    next.p3.y = 10.0;
    state.store_triangle(next).await;
    assert_eq!(state.current_triangle().await, Some(next));
}

#[test]
fn state_wires_config_into_routes_and_engine() {
    let mut config = AppConfig { base_url: "/app/".into(), ..AppConfig::default() };
    config.convention.y_axis = YAxis::Down;
    let state = AppState::new(config);
    assert_eq!(state.routes.base(), "/app");
    assert_eq!(state.engine.convention().y_axis, YAxis::Down);
    assert_eq!(state.config.base_url, "/app/");
}
