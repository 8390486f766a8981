//! Coordinate types and the pixel/geographic bridge.
//!
//! Pixel positions ([`Point`]) are relative to the top-left of the map
//! container, which is also the top-left of the overlay surface. Geographic
//! positions ([`LatLng`]) are independent of the viewport. Conversion between
//! the two always goes through the map's *current* projection; nothing here
//! caches a transform.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

use crate::map::MapView;

/// A point in container (overlay) pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Pixel dimensions of a viewport or surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Geographic location under overlay pixel `pixel`, per the map's current view.
#[must_use]
pub fn pixel_to_geo<M: MapView + ?Sized>(map: &M, pixel: Point) -> LatLng {
    map.container_point_to_lat_lng(pixel)
}

/// Overlay pixel at which `location` currently appears.
#[must_use]
pub fn geo_to_pixel<M: MapView + ?Sized>(map: &M, location: LatLng) -> Point {
    map.lat_lng_to_container_point(location)
}
