//! Geo-anchored freehand annotations over a pannable, zoomable map.
//!
//! This crate is compiled to WebAssembly and runs in the browser next to a
//! Leaflet map. It owns a transparent overlay canvas stacked above the map
//! tiles: while a color is selected, pointer drags paint filled circles onto
//! the overlay and record each one at its geographic location; whenever the
//! map pans, zooms or resizes, the overlay is re-aligned and rebuilt from
//! those locations so the marks stay pinned to the ground.
//!
//! Everything except [`web`] is browser-free and runs against the [`MapView`]
//! and [`Surface`] traits, so the engine is fully testable natively with
//! [`MercatorMap`] and [`PixmapSurface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EngineCore`]: owns the session, dispatches input and map events |
//! | [`session`] | Per-map-view session state |
//! | [`store`] | Append-only annotation store |
//! | [`input`] | Paint mode state machine and keyboard input |
//! | [`geo`] | Pixel and geographic coordinate types, pixel/geo bridge |
//! | [`map`] | The [`MapView`] trait consumed from the map component |
//! | [`mercator`] | Headless Web-Mercator [`MapView`] |
//! | [`viewport`] | Overlay size/position sync with the map viewport |
//! | [`render`] | [`Surface`] trait, incremental stroke paint and full redraw |
//! | [`raster`] | tiny-skia backed [`Surface`] |
//! | [`color`] | Opaque mark color |
//! | [`config`] | Engine configuration |
//! | [`error`] | Error types |
//! | [`web`] | Browser binding: Leaflet map, overlay canvas, exported engine |
//! | [`consts`] | Shared defaults |

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geo;
pub mod input;
pub mod map;
pub mod mercator;
pub mod raster;
pub mod render;
pub mod session;
pub mod store;
pub mod viewport;
pub mod web;

pub use color::Color;
pub use config::Config;
pub use engine::{Action, EngineCore};
pub use error::{ConfigError, InitError};
pub use geo::{LatLng, Point, Size};
pub use map::{MapEvent, MapView};
pub use mercator::MercatorMap;
pub use raster::PixmapSurface;
pub use render::Surface;
pub use store::Mark;
