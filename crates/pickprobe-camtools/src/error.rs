//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for probe-cycle generation
//! and parameter validation.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating a probe program.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// No points were supplied to the emitter.
    #[error("Cannot emit a probe program from an empty point set")]
    EmptyPointSet,

    /// A point has a NaN or infinite coordinate.
    #[error("Point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },

    /// Invalid parameters were provided to a CAM tool.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// I/O error while writing a program.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Errors related to probe-cycle parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter is NaN or infinite.
    #[error("Parameter '{name}' must be finite, got {value}")]
    NotFinite { name: String, value: f64 },

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} ({reason})")]
    OutOfRange {
        name: String,
        value: f64,
        reason: String,
    },
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
