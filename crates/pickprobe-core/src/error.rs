//! Error types for PickProbe core geometry.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors raised while fitting a display/drawing transform.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The bounding box has no extent on at least one axis
    #[error("Degenerate drawing bounds: width {width}, height {height}")]
    DegenerateBounds {
        /// Width of the offending box.
        width: f64,
        /// Height of the offending box.
        height: f64,
    },

    /// The bounding box has a NaN or infinite extent
    #[error("Drawing bounds are not finite: width {width}, height {height}")]
    NonFiniteBounds {
        /// Width of the offending box.
        width: f64,
        /// Height of the offending box.
        height: f64,
    },

    /// The canvas leaves no usable area once the margin is removed
    #[error("Invalid canvas {width}x{height} with margin {margin}")]
    InvalidCanvas {
        /// Canvas width in pixels.
        width: f64,
        /// Canvas height in pixels.
        height: f64,
        /// Margin in pixels.
        margin: f64,
    },
}

/// Result type for core geometry operations
pub type Result<T> = std::result::Result<T, TransformError>;
