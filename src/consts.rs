//! Shared defaults for the geosketch crate.

// ── Marks ───────────────────────────────────────────────────────

/// Radius of every painted circle, in overlay pixels.
pub const MARK_RADIUS_PX: f64 = 15.0;

// ── Initial map view ────────────────────────────────────────────

/// Latitude the map opens on.
pub const DEFAULT_CENTER_LAT: f64 = 51.505;

/// Longitude the map opens on.
pub const DEFAULT_CENTER_LNG: f64 = -0.09;

/// Zoom level the map opens on.
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Highest zoom level served by the tile layer.
pub const MAX_ZOOM: u8 = 19;

// ── Tiles ───────────────────────────────────────────────────────

/// Slippy-map tile URL template.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution shown for [`TILE_URL`].
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Edge length of one map tile in pixels at integer zoom.
pub const TILE_SIZE_PX: f64 = 256.0;

// ── Projection ──────────────────────────────────────────────────

/// Latitude bound of the square Web-Mercator world.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_6;

// ── DOM ─────────────────────────────────────────────────────────

/// Default id of the map container element.
pub const MAP_CONTAINER_ID: &str = "mapid";

/// Default id of the overlay canvas element.
pub const OVERLAY_CANVAS_ID: &str = "map-overlay";

/// Stacking order of the overlay above the map panes.
pub const OVERLAY_Z_INDEX: i32 = 1000;
