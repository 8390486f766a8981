//! Engine configuration.
//!
//! Every field has a default, so a host can pass `{}` or only the fields it
//! wants to change. [`Config::from_json`] parses and validates in one step.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_ZOOM, MAP_CONTAINER_ID, MARK_RADIUS_PX, MAX_ZOOM,
    OVERLAY_CANVAS_ID, OVERLAY_Z_INDEX, TILE_ATTRIBUTION, TILE_URL,
};
use crate::error::ConfigError;
use crate::geo::LatLng;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Radius of each painted circle, in overlay pixels.
    pub mark_radius_px: f64,
    /// Where the map opens.
    pub initial_center: LatLng,
    /// Zoom the map opens at.
    pub initial_zoom: f64,
    /// Zoom ceiling for the tile layer.
    pub max_zoom: u8,
    /// Slippy-map tile URL template.
    pub tile_url: String,
    pub tile_attribution: String,
    /// DOM id of the map container (browser binding only).
    pub map_container_id: String,
    /// DOM id of the overlay canvas (browser binding only).
    pub overlay_canvas_id: String,
    /// CSS `z-index` of the overlay canvas (browser binding only).
    pub overlay_z_index: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mark_radius_px: MARK_RADIUS_PX,
            initial_center: LatLng::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
            initial_zoom: DEFAULT_ZOOM,
            max_zoom: MAX_ZOOM,
            tile_url: TILE_URL.to_owned(),
            tile_attribution: TILE_ATTRIBUTION.to_owned(),
            map_container_id: MAP_CONTAINER_ID.to_owned(),
            overlay_canvas_id: OVERLAY_CANVAS_ID.to_owned(),
            overlay_z_index: OVERLAY_Z_INDEX,
        }
    }
}

impl Config {
    /// Parse a JSON config document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error from
    /// [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRadius`] unless the radius is finite and
    /// positive, and [`ConfigError::InvalidZoom`] unless the initial zoom lies
    /// in `0..=max_zoom`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mark_radius_px.is_finite() || self.mark_radius_px <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.mark_radius_px));
        }
        if !(0.0..=f64::from(self.max_zoom)).contains(&self.initial_zoom) {
            return Err(ConfigError::InvalidZoom { zoom: self.initial_zoom, max: self.max_zoom });
        }
        Ok(())
    }
}
