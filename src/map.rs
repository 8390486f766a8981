//! The map component as seen from the annotation engine.
//!
//! The engine never computes projections or viewport transforms itself. It
//! asks a [`MapView`] for them on demand and is told about viewport changes
//! through [`MapEvent`]s delivered by the host.

use crate::geo::{LatLng, Point, Size};

/// Viewport change notification. Carries no payload; handlers query the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// The map container changed size.
    Resize,
    /// The view was panned.
    Move,
    /// The zoom level changed.
    Zoom,
}

/// Operations the engine consumes from the map component.
///
/// Every query reflects the map's state at the moment of the call.
pub trait MapView {
    /// Whether the map finished initializing. The engine refuses to start otherwise.
    fn is_ready(&self) -> bool {
        true
    }

    /// Rendered size of the map viewport in pixels.
    fn viewport_size(&self) -> Size;

    /// Position of container point `point` in the map's layer space.
    ///
    /// The overlay is placed at the layer-space position of container `(0, 0)`.
    fn container_point_to_layer_point(&self, point: Point) -> Point;

    /// Geographic location under container point `point`.
    fn container_point_to_lat_lng(&self, point: Point) -> LatLng;

    /// Container point at which `location` is drawn.
    fn lat_lng_to_container_point(&self, location: LatLng) -> Point;

    /// Enable or disable the map's own drag-to-pan gesture.
    fn set_dragging(&mut self, enabled: bool);
}
