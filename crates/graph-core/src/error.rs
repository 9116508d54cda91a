// File: crates/graph-core/src/error.rs
// Summary: Error types for configuration checks and raster output.

use thiserror::Error;

/// Result type alias for graph rendering operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Rejected [`PlotConfig`](crate::PlotConfig) values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("sampling step must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("sweep would take {steps} steps, more than the {max} allowed")]
    TooManySamples { steps: f64, max: usize },

    #[error("{name} of {total} px does not fit a pixel coordinate")]
    MarginTooLarge { name: &'static str, total: u64 },

    #[error("y axis needs at least one tick interval")]
    NoTickIntervals,

    #[error("{name} must be a non-negative pixel length, got {value}")]
    InvalidLength { name: &'static str, value: f32 },
}

/// Errors that can occur while rendering a scene to pixels or files.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid plot configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("PNG encoding failed")]
    Encode,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
