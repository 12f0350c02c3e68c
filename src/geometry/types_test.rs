#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_try_new_accepts_finite() {
    let p = Point::try_new(1.5, -2.0).unwrap();
    assert_eq!(p, Point::new(1.5, -2.0));
}

#[test]
fn point_try_new_rejects_nan_and_infinity() {
    assert_eq!(Point::try_new(f64::NAN, 0.0), Err(GeometryError::NonFinite));
    assert_eq!(Point::try_new(0.0, f64::INFINITY), Err(GeometryError::NonFinite));
}

#[test]
fn point_distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn point_deserializes_from_json() {
    let p: Point = serde_json::from_str(r#"{"x":2.5,"y":-1}"#).unwrap();
    assert_eq!(p, Point::new(2.5, -1.0));
}

// --- Vertex ---

#[test]
fn vertex_neighbors_wrap_around() {
    assert_eq!(Vertex::A.next(), Vertex::B);
    assert_eq!(Vertex::C.next(), Vertex::A);
    assert_eq!(Vertex::A.prev(), Vertex::C);
    assert_eq!(Vertex::B.prev(), Vertex::A);
}

#[test]
fn vertex_maps_to_point_slot() {
    let t = Triangle::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0));
    assert_eq!(t.vertex(Vertex::A), t.p1);
    assert_eq!(t.vertex(Vertex::B), t.p2);
    assert_eq!(t.vertex(Vertex::C), t.p3);
}

// --- Triangle ---

#[test]
fn triangle_extent_is_longest_edge() {
    let t = Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0));
    assert_eq!(t.extent(), 5.0);
}

#[test]
fn triangle_round_trips_through_json() {
    let json = r#"{"p1":{"x":0,"y":0},"p2":{"x":4,"y":0},"p3":{"x":0,"y":3}}"#;
    let t: Triangle = serde_json::from_str(json).unwrap();
    assert_eq!(t.p2, Point::new(4.0, 0.0));
    let back = serde_json::to_value(t).unwrap();
    assert_eq!(back["p3"]["y"], 3.0);
}

// --- TriangleAngles ---

#[test]
fn triangle_angles_serialize_with_uppercase_keys() {
    let angles = TriangleAngles::new("90.0".into(), "36.9".into(), "53.1".into());
    let json = serde_json::to_value(&angles).unwrap();
    assert_eq!(json, serde_json::json!({ "A": "90.0", "B": "36.9", "C": "53.1" }));
}

#[test]
fn triangle_angles_label_adds_vertex_and_degree_sign() {
    let angles = TriangleAngles::new("90.0".into(), "36.9".into(), "53.1".into());
    assert_eq!(angles.label(Vertex::B), "B = 36.9\u{b0}");
}

// --- ArcAngle ---

#[test]
fn arc_angle_accepts_wrapping_arc() {
    let arc = ArcAngle::new(330.0, 30.0, 60.0).unwrap();
    assert_eq!(arc.sweep(), 60.0);
}

#[test]
fn arc_angle_rejects_out_of_range_start() {
    let err = ArcAngle::new(360.0, 10.0, 10.0).unwrap_err();
    assert_eq!(err, GeometryError::ArcOutOfRange { field: "start", value: 360.0 });
}

#[test]
fn arc_angle_rejects_negative_end() {
    let err = ArcAngle::new(10.0, -1.0, 10.0).unwrap_err();
    assert_eq!(err, GeometryError::ArcOutOfRange { field: "end", value: -1.0 });
}

#[test]
fn arc_angle_rejects_flat_or_zero_angle() {
    assert!(ArcAngle::new(0.0, 180.0, 180.0).is_err());
    assert!(ArcAngle::new(0.0, 0.0, 0.0).is_err());
    assert!(ArcAngle::new(0.0, 10.0, f64::NAN).is_err());
}
