//! Rendering: the overlay surface abstraction and the two paint paths.
//!
//! - [`paint_mark`] is the live-stroke path. It adds one circle to whatever
//!   is already on the surface and never clears.
//! - [`redraw`] is the consistency path. It clears the surface and re-projects
//!   every stored mark through the map's current view, so afterwards the
//!   raster depends only on the store and the viewport.
//!
//! Both read the color from the mark being drawn, never from surface state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::color::Color;
use crate::geo::{self, Point, Size};
use crate::map::MapView;
use crate::store::AnnotationStore;

/// A pixel-addressable drawing canvas stacked above the map tiles.
///
/// Coordinates passed to [`Surface::fill_circle`] are surface pixels, which
/// coincide with map container pixels once the surface has been positioned.
pub trait Surface {
    /// Current pixel dimensions.
    fn size(&self) -> Size;

    /// Resize the pixel buffer. Existing content is discarded.
    fn resize(&mut self, size: Size);

    /// Move the surface to `offset` in the map's layer space.
    fn set_position(&mut self, offset: Point);

    /// Erase every pixel.
    fn clear(&mut self);

    /// Fill a circle of `radius` centered at `center`.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &Color);
}

/// Paint one mark of the live stroke at `pixel`.
pub fn paint_mark<S: Surface + ?Sized>(surface: &mut S, pixel: Point, radius: f64, color: &Color) {
    surface.fill_circle(pixel, radius, color);
}

/// Clear the surface and draw every stored mark at its current pixel position,
/// in paint order. Returns the number of marks drawn.
pub fn redraw<M, S>(surface: &mut S, map: &M, store: &AnnotationStore, radius: f64) -> usize
where
    M: MapView + ?Sized,
    S: Surface + ?Sized,
{
    surface.clear();
    for mark in store.all() {
        let pixel = geo::geo_to_pixel(map, mark.location());
        surface.fill_circle(pixel, radius, mark.color());
    }
    tracing::debug!(marks = store.len(), "overlay redrawn");
    store.len()
}
