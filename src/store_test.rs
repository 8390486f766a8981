#![allow(clippy::float_cmp)]

use super::*;

fn mark(color: &str, lat: f64, lng: f64) -> Mark {
    Mark::new(Color::new(color), LatLng::new(lat, lng))
}

#[test]
fn new_store_is_empty() {
    let store = AnnotationStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.all().is_empty());
}

#[test]
fn default_matches_new() {
    assert!(AnnotationStore::default().is_empty());
}

#[test]
fn append_grows_by_one() {
    let mut store = AnnotationStore::new();
    store.append(mark("red", 1.0, 2.0));
    assert_eq!(store.len(), 1);
    assert!(!store.is_empty());
}

#[test]
fn append_preserves_insertion_order() {
    let mut store = AnnotationStore::new();
    store.append(mark("red", 1.0, 1.0));
    store.append(mark("blue", 2.0, 2.0));
    store.append(mark("red", 3.0, 3.0));
    let lats: Vec<f64> = store.all().iter().map(|m| m.location().lat).collect();
    assert_eq!(lats, vec![1.0, 2.0, 3.0]);
    assert_eq!(store.all()[1].color(), &Color::new("blue"));
}

#[test]
fn append_keeps_duplicates() {
    let mut store = AnnotationStore::new();
    store.append(mark("red", 1.0, 1.0));
    store.append(mark("red", 1.0, 1.0));
    assert_eq!(store.len(), 2);
}

#[test]
fn append_does_not_alter_existing_marks() {
    let mut store = AnnotationStore::new();
    store.append(mark("red", 1.0, 1.0));
    let first = store.all()[0].clone();
    for i in 0..100 {
        store.append(mark("green", f64::from(i), 0.0));
    }
    assert_eq!(store.all()[0], first);
}

#[test]
fn mark_accessors() {
    let m = mark("#00f", 51.5, -0.1);
    assert_eq!(m.color().as_str(), "#00f");
    assert_eq!(m.location(), LatLng::new(51.5, -0.1));
}

#[test]
fn mark_serializes_color_and_location() {
    let json = serde_json::to_value(mark("red", 1.0, 2.0)).unwrap();
    assert_eq!(json["color"], "red");
    assert_eq!(json["location"]["lat"], 1.0);
    assert_eq!(json["location"]["lng"], 2.0);
}
