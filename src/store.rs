//! Annotation store: the append-only record of painted marks.
//!
//! Marks are kept in the order they were painted, which is also the order
//! they are stacked when the overlay is rebuilt. There is no way
//! to remove or edit a mark once stored.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::Serialize;

use crate::color::Color;
use crate::geo::LatLng;

/// A single painted circle, anchored to a geographic location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    color: Color,
    location: LatLng,
}

impl Mark {
    #[must_use]
    pub fn new(color: Color, location: LatLng) -> Self {
        Self { color, location }
    }

    #[must_use]
    pub fn color(&self) -> &Color {
        &self.color
    }

    #[must_use]
    pub fn location(&self) -> LatLng {
        self.location
    }
}

/// Ordered, append-only sequence of [`Mark`]s.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    marks: Vec<Mark>,
}

impl AnnotationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Append a mark after all existing ones.
    pub fn append(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// All marks in paint order.
    #[must_use]
    pub fn all(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of stored marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if nothing has been painted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
