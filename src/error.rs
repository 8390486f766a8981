//! Error types.
//!
//! Once an engine is running nothing fails: out-of-range pointers and empty
//! viewports are no-ops. Errors only exist at startup.

/// Invalid or unparseable [`crate::Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config document is not valid JSON or has wrongly typed fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Mark radius must be finite and positive.
    #[error("invalid mark radius: {0}")]
    InvalidRadius(f64),
    /// Initial zoom outside `0..=max_zoom`.
    #[error("initial zoom {zoom} outside 0..={max}")]
    InvalidZoom { zoom: f64, max: u8 },
}

/// The engine refused to start.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The map component is missing or did not finish initializing.
    #[error("map component unavailable: {0}")]
    MapUnavailable(String),
    /// A required DOM element does not exist.
    #[error("element not found: #{0}")]
    ElementNotFound(String),
    /// The overlay canvas has no usable 2D context.
    #[error("overlay canvas has no 2d context: {0}")]
    Context(String),
    /// A JavaScript call failed during setup.
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
