//! CPU raster [`Surface`] backed by a tiny-skia pixmap.
//!
//! Used by native hosts and by tests that need to compare real pixels. A
//! zero-sized viewport leaves the surface without a pixmap; every draw call
//! is then a no-op.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::color::Color;
use crate::geo::{Point, Size};
use crate::render::Surface;

/// Overlay surface rasterized in memory.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    pixmap: Option<Pixmap>,
    size: Size,
    position: Point,
}

impl PixmapSurface {
    /// Create a surface of `size` pixels at layer offset `(0, 0)`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { pixmap: alloc(size), size, position: Point::new(0.0, 0.0) }
    }

    /// Layer-space offset last set by [`Surface::set_position`].
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Premultiplied RGBA bytes, row-major. Empty for a zero-sized surface.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        match &self.pixmap {
            Some(pixmap) => pixmap.data(),
            None => &[],
        }
    }

    /// Straight RGBA of the pixel at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Number of pixels with any coverage.
    #[must_use]
    pub fn painted_pixels(&self) -> usize {
        self.data().chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.pixmap = alloc(size);
    }

    fn set_position(&mut self, offset: Point) {
        self.position = offset;
    }

    fn clear(&mut self) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(tiny_skia::Color::TRANSPARENT);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_circle(&mut self, center: Point, radius: f64, color: &Color) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let Some([r, g, b, a]) = color.to_rgba() else {
            tracing::warn!(%color, "unrecognized mark color; skipped");
            return;
        };
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alloc(size: Size) -> Option<Pixmap> {
    if size.is_empty() {
        return None;
    }
    Pixmap::new(size.width.round() as u32, size.height.round() as u32)
}
