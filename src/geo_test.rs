#![allow(clippy::float_cmp)]

use super::*;
use crate::mercator::MercatorMap;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn london() -> MercatorMap {
    MercatorMap::new(LatLng::new(51.505, -0.09), 13.0, 19, Size::new(800.0, 600.0))
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn point_distance_is_symmetric() {
    let a = Point::new(-2.0, 7.5);
    let b = Point::new(10.0, 1.0);
    assert!(approx_eq(a.distance(b), b.distance(a)));
}

// --- Size ---

#[test]
fn size_default_is_empty() {
    assert!(Size::default().is_empty());
}

#[test]
fn size_with_zero_dimension_is_empty() {
    assert!(Size::new(0.0, 100.0).is_empty());
    assert!(Size::new(100.0, 0.0).is_empty());
}

#[test]
fn size_positive_is_not_empty() {
    assert!(!Size::new(1.0, 1.0).is_empty());
}

// --- LatLng ---

#[test]
fn lat_lng_serde_field_names() {
    let json = serde_json::to_value(LatLng::new(51.5, -0.1)).unwrap();
    assert_eq!(json["lat"], 51.5);
    assert_eq!(json["lng"], -0.1);
}

#[test]
fn lat_lng_deserializes() {
    let ll: LatLng = serde_json::from_str(r#"{"lat": 10.0, "lng": 20.0}"#).unwrap();
    assert_eq!(ll, LatLng::new(10.0, 20.0));
}

// --- Bridge ---

#[test]
fn pixel_to_geo_matches_map_projection() {
    let map = london();
    let p = Point::new(120.0, 80.0);
    assert_eq!(pixel_to_geo(&map, p), map.container_point_to_lat_lng(p));
}

#[test]
fn geo_to_pixel_matches_map_projection() {
    let map = london();
    let ll = LatLng::new(51.51, -0.1);
    assert_eq!(geo_to_pixel(&map, ll), map.lat_lng_to_container_point(ll));
}

#[test]
fn viewport_center_maps_to_map_center() {
    let map = london();
    let center = pixel_to_geo(&map, Point::new(400.0, 300.0));
    assert!(approx_eq(center.lat, 51.505));
    assert!(approx_eq(center.lng, -0.09));
}

#[test]
fn round_trip_is_stable() {
    let map = london();
    for p in [Point::new(0.0, 0.0), Point::new(799.0, 599.0), Point::new(-50.0, 900.0)] {
        let back = geo_to_pixel(&map, pixel_to_geo(&map, p));
        assert!(back.distance(p) < 1e-6, "{p:?} came back as {back:?}");
    }
}

#[test]
fn bridge_reflects_current_view() {
    let mut map = london();
    let p = Point::new(100.0, 100.0);
    let before = pixel_to_geo(&map, p);
    map.pan_by(50.0, 0.0);
    let after = pixel_to_geo(&map, p);
    assert!(after.lng > before.lng);
}
