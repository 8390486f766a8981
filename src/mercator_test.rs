#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn world_map() -> MercatorMap {
    MercatorMap::new(LatLng::new(0.0, 0.0), 0.0, 19, Size::new(256.0, 256.0))
}

fn london() -> MercatorMap {
    MercatorMap::new(LatLng::new(51.505, -0.09), 13.0, 19, Size::new(800.0, 600.0))
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_keeps_view() {
    let map = london();
    assert_eq!(map.center(), LatLng::new(51.505, -0.09));
    assert_eq!(map.zoom(), 13.0);
    assert_eq!(map.viewport_size(), Size::new(800.0, 600.0));
}

#[test]
fn new_clamps_zoom() {
    let map = MercatorMap::new(LatLng::new(0.0, 0.0), 25.0, 19, Size::new(10.0, 10.0));
    assert_eq!(map.zoom(), 19.0);
    let map = MercatorMap::new(LatLng::new(0.0, 0.0), -3.0, 19, Size::new(10.0, 10.0));
    assert_eq!(map.zoom(), 0.0);
}

#[test]
fn new_clamps_latitude() {
    let map = MercatorMap::new(LatLng::new(89.0, 0.0), 2.0, 19, Size::new(10.0, 10.0));
    assert!(map.center().lat < 85.06);
}

#[test]
fn dragging_enabled_initially() {
    assert!(london().dragging_enabled());
}

#[test]
fn set_dragging_toggles() {
    let mut map = london();
    map.set_dragging(false);
    assert!(!map.dragging_enabled());
    map.set_dragging(true);
    assert!(map.dragging_enabled());
}

// =============================================================
// Projection
// =============================================================

#[test]
fn world_corner_is_antimeridian_at_max_latitude() {
    let map = world_map();
    let ll = map.container_point_to_lat_lng(Point::new(0.0, 0.0));
    assert!(approx_eq(ll.lng, -180.0));
    assert!(approx_eq(ll.lat, MAX_MERCATOR_LAT));
}

#[test]
fn world_center_is_null_island() {
    let map = world_map();
    let ll = map.container_point_to_lat_lng(Point::new(128.0, 128.0));
    assert!(approx_eq(ll.lat, 0.0));
    assert!(approx_eq(ll.lng, 0.0));
}

#[test]
fn longitude_is_linear_in_x() {
    let map = world_map();
    let ll = map.container_point_to_lat_lng(Point::new(192.0, 128.0));
    assert!(approx_eq(ll.lng, 90.0));
}

#[test]
fn north_is_up() {
    let map = london();
    let upper = map.container_point_to_lat_lng(Point::new(400.0, 100.0));
    let lower = map.container_point_to_lat_lng(Point::new(400.0, 500.0));
    assert!(upper.lat > lower.lat);
}

#[test]
fn projection_round_trips() {
    let map = london();
    let ll = LatLng::new(51.51, -0.12);
    let back = map.container_point_to_lat_lng(map.lat_lng_to_container_point(ll));
    assert!(approx_eq(back.lat, ll.lat));
    assert!(approx_eq(back.lng, ll.lng));
}

#[test]
fn zooming_in_doubles_pixel_distances() {
    let mut map = london();
    let a = LatLng::new(51.50, -0.10);
    let b = LatLng::new(51.51, -0.08);
    let before = map.lat_lng_to_container_point(a).distance(map.lat_lng_to_container_point(b));
    map.set_zoom(14.0);
    let after = map.lat_lng_to_container_point(a).distance(map.lat_lng_to_container_point(b));
    assert!(approx_eq(after, before * 2.0));
}

// =============================================================
// Pan / zoom / resize
// =============================================================

#[test]
fn pan_shifts_projection_by_offset() {
    let mut map = london();
    let ll = LatLng::new(51.5, -0.1);
    let before = map.lat_lng_to_container_point(ll);
    map.pan_by(30.0, -20.0);
    let after = map.lat_lng_to_container_point(ll);
    assert!(approx_eq(after.x, before.x - 30.0));
    assert!(approx_eq(after.y, before.y + 20.0));
}

#[test]
fn pan_moves_layer_origin() {
    let mut map = london();
    assert_eq!(map.container_point_to_layer_point(Point::new(0.0, 0.0)), Point::new(0.0, 0.0));
    map.pan_by(10.0, 5.0);
    assert_eq!(map.container_point_to_layer_point(Point::new(0.0, 0.0)), Point::new(10.0, 5.0));
}

#[test]
fn pan_and_back_restores_center() {
    let mut map = london();
    map.pan_by(123.0, -45.0);
    map.pan_by(-123.0, 45.0);
    assert!(approx_eq(map.center().lat, 51.505));
    assert!(approx_eq(map.center().lng, -0.09));
}

#[test]
fn zoom_resets_layer_origin() {
    let mut map = london();
    map.pan_by(10.0, 5.0);
    map.set_zoom(12.0);
    assert_eq!(map.container_point_to_layer_point(Point::new(0.0, 0.0)), Point::new(0.0, 0.0));
}

#[test]
fn zoom_keeps_center() {
    let mut map = london();
    map.set_zoom(15.0);
    let ll = map.container_point_to_lat_lng(Point::new(400.0, 300.0));
    assert!(approx_eq(ll.lat, 51.505));
    assert!(approx_eq(ll.lng, -0.09));
}

#[test]
fn set_zoom_clamps_to_max() {
    let mut map = london();
    map.set_zoom(30.0);
    assert_eq!(map.zoom(), 19.0);
}

#[test]
fn set_view_replaces_center_and_zoom() {
    let mut map = london();
    map.pan_by(40.0, 40.0);
    map.set_view(LatLng::new(48.85, 2.35), 10.0);
    assert_eq!(map.center(), LatLng::new(48.85, 2.35));
    assert_eq!(map.zoom(), 10.0);
    assert_eq!(map.container_point_to_layer_point(Point::new(0.0, 0.0)), Point::new(0.0, 0.0));
}

#[test]
fn resize_keeps_center_under_new_middle() {
    let mut map = london();
    map.resize(Size::new(1000.0, 400.0));
    assert_eq!(map.viewport_size(), Size::new(1000.0, 400.0));
    let ll = map.container_point_to_lat_lng(Point::new(500.0, 200.0));
    assert!(approx_eq(ll.lat, 51.505));
    assert!(approx_eq(ll.lng, -0.09));
}
