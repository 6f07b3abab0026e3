//! Error types for drishti-map

use crate::config::ConfigLoadError;
use crate::io::ScenarioError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// drishti-map error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Per-axis pixel scales disagree beyond the allowed tolerance
    #[error(
        "Pixel scale mismatch: {x_px_per_m:.4} px/m (x) vs {y_px_per_m:.4} px/m (y), \
         normalized difference {ratio:.4} exceeds {tolerance}"
    )]
    ScaleMismatch {
        /// Pixels per meter along x
        x_px_per_m: f32,
        /// Pixels per meter along y
        y_px_per_m: f32,
        /// `(x - y) / (x + y)`
        ratio: f32,
        /// Allowed magnitude of `ratio`
        tolerance: f32,
    },

    /// Grid dimensions or buffers are inconsistent
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration file could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),

    /// Scenario file could not be loaded
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Image decode/encode error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
