//! Viewport sync: keeps the overlay's pixel buffer and screen position
//! aligned with the map container.
//!
//! Only surface geometry changes here. Repainting content is the render
//! module's job; callers decide when a redraw has to follow.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::geo::Point;
use crate::map::MapView;
use crate::render::Surface;

/// Match the surface size to the map's rendered size, then reposition it.
pub fn on_resize<M, S>(map: &M, surface: &mut S)
where
    M: MapView + ?Sized,
    S: Surface + ?Sized,
{
    let size = map.viewport_size();
    surface.resize(size);
    tracing::debug!(width = size.width, height = size.height, "overlay resized");
    reposition(map, surface);
}

/// Pin the surface to the layer-space position of the container's top-left corner.
pub fn reposition<M, S>(map: &M, surface: &mut S)
where
    M: MapView + ?Sized,
    S: Surface + ?Sized,
{
    let top_left = map.container_point_to_layer_point(Point::new(0.0, 0.0));
    surface.set_position(top_left);
    tracing::debug!(left = top_left.x, top = top_left.y, "overlay repositioned");
}
