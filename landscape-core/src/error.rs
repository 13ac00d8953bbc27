//! Error types shared by the sampler, the descent engine and the view composer.

use thiserror::Error;

/// Result type alias for landscape operations.
pub type Result<T> = std::result::Result<T, LandscapeError>;

/// Errors raised before any evaluation starts.
///
/// Non-finite objective or gradient values are not errors: they flow into
/// trajectories and fields unchanged.
#[derive(Debug, Error)]
pub enum LandscapeError {
    /// Bounds are not finite or `min >= max` on some axis.
    #[error("invalid domain on {axis} axis: [{min}, {max}]")]
    InvalidDomain {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    /// Grid resolution below two samples per axis.
    #[error("invalid resolution {0}: at least 2 samples per axis are required")]
    InvalidResolution(usize),

    /// Step size is zero, negative or not finite.
    #[error("invalid step size {0}: must be finite and > 0")]
    InvalidStepSize(f64),

    /// Negative iteration count coming from a signed caller.
    #[error("invalid iteration count {0}: must be >= 0")]
    InvalidIterationCount(i64),

    /// A configuration value is out of range.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
