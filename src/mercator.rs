//! Headless spherical Web-Mercator (EPSG:3857) map view.
//!
//! Mirrors the slippy-map conventions of the browser map component closely
//! enough for the engine to run natively: a view is a geographic center, a
//! fractional zoom and a pixel size; world pixels span `256 * 2^zoom` on each
//! axis. Panning moves the map pane, so container and layer space drift apart
//! until the next zoom resets the pane, just as in the browser.

#[cfg(test)]
#[path = "mercator_test.rs"]
mod mercator_test;

use std::f64::consts::PI;

use crate::consts::{MAX_MERCATOR_LAT, TILE_SIZE_PX};
use crate::geo::{LatLng, Point, Size};
use crate::map::MapView;

/// In-memory map view with pan, zoom and resize.
#[derive(Debug, Clone)]
pub struct MercatorMap {
    center: LatLng,
    zoom: f64,
    max_zoom: f64,
    size: Size,
    /// Offset of the map pane inside the container, accumulated by panning.
    pane_pos: Point,
    dragging: bool,
}

impl MercatorMap {
    /// Create a view centered on `center` at `zoom`, clamped to `0..=max_zoom`.
    #[must_use]
    pub fn new(center: LatLng, zoom: f64, max_zoom: u8, size: Size) -> Self {
        let max_zoom = f64::from(max_zoom);
        Self {
            center: clamp_lat_lng(center),
            zoom: zoom.clamp(0.0, max_zoom),
            max_zoom,
            size,
            pane_pos: Point::new(0.0, 0.0),
            dragging: true,
        }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Whether drag-to-pan is currently enabled.
    #[must_use]
    pub fn dragging_enabled(&self) -> bool {
        self.dragging
    }

    /// Pan the view by a pixel offset. Positive `dx` reveals what lies east.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let scale = self.scale();
        let c = project(self.center, scale);
        self.center = unproject(Point::new(c.x + dx, c.y + dy), scale);
        self.pane_pos = Point::new(self.pane_pos.x - dx, self.pane_pos.y - dy);
    }

    /// Change zoom, keeping the center fixed. Resets the pane offset.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(0.0, self.max_zoom);
        self.pane_pos = Point::new(0.0, 0.0);
    }

    /// Jump to a new center and zoom. Resets the pane offset.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = clamp_lat_lng(center);
        self.set_zoom(zoom);
    }

    /// Change the rendered size, keeping the center fixed.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn scale(&self) -> f64 {
        TILE_SIZE_PX * self.zoom.exp2()
    }

    fn half_size(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}

impl MapView for MercatorMap {
    fn viewport_size(&self) -> Size {
        self.size
    }

    fn container_point_to_layer_point(&self, point: Point) -> Point {
        Point::new(point.x - self.pane_pos.x, point.y - self.pane_pos.y)
    }

    fn container_point_to_lat_lng(&self, point: Point) -> LatLng {
        let scale = self.scale();
        let c = project(self.center, scale);
        let half = self.half_size();
        unproject(Point::new(point.x - half.x + c.x, point.y - half.y + c.y), scale)
    }

    fn lat_lng_to_container_point(&self, location: LatLng) -> Point {
        let scale = self.scale();
        let c = project(self.center, scale);
        let p = project(location, scale);
        let half = self.half_size();
        Point::new(p.x - c.x + half.x, p.y - c.y + half.y)
    }

    fn set_dragging(&mut self, enabled: bool) {
        self.dragging = enabled;
    }
}

/// Project `location` to world pixels at `scale` (world width in pixels).
///
/// Longitude is not wrapped, so points east of the antimeridian keep
/// increasing `x`.
fn project(location: LatLng, scale: f64) -> Point {
    let lat = location.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let x = (location.lng + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
    Point::new(x * scale, y * scale)
}

fn unproject(world: Point, scale: f64) -> LatLng {
    let lng = world.x / scale * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * world.y / scale);
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

fn clamp_lat_lng(location: LatLng) -> LatLng {
    LatLng::new(location.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT), location.lng)
}
