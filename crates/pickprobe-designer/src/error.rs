//! Error types for drawing import and pick sessions.

use pickprobe_camtools::CamToolError;
use pickprobe_core::TransformError;
use std::io;
use thiserror::Error;

/// Errors raised while turning a drawing file into primitives.
#[derive(Error, Debug)]
pub enum DrawingLoadError {
    /// Neither the extension nor the content identifies SVG or DXF.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The file could not be read.
    #[error("Failed to read drawing: {0}")]
    Io(#[from] io::Error),

    /// The DXF reader rejected the file.
    #[error("DXF parse error: {0}")]
    DxfParse(String),

    /// The SVG content is malformed.
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    /// The file parsed but held no line or circle.
    #[error("No drawable entities found in {0}")]
    NoDrawableEntities(String),
}

/// Errors raised by pick-session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A pick or export arrived before any drawing was loaded.
    #[error("No drawing loaded")]
    NoTransformLoaded,

    /// Export was requested with no picks.
    #[error("No points selected")]
    NoPicks,

    /// A pick had a NaN or infinite coordinate.
    #[error("Pick ({x}, {y}) is not a finite display position")]
    NonFinitePick { x: f64, y: f64 },

    /// The drawing could not be fitted to the canvas.
    #[error("Failed to fit drawing: {0}")]
    Transform(#[from] TransformError),

    /// Program generation failed.
    #[error("Failed to generate G-code: {0}")]
    Emit(#[from] CamToolError),
}

/// Result type alias for drawing import.
pub type LoadResult<T> = Result<T, DrawingLoadError>;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SessionError::NoPicks.to_string(), "No points selected");
        assert_eq!(
            SessionError::NoTransformLoaded.to_string(),
            "No drawing loaded"
        );
        assert_eq!(
            SessionError::NonFinitePick {
                x: f64::INFINITY,
                y: 3.0
            }
            .to_string(),
            "Pick (inf, 3) is not a finite display position"
        );
        assert_eq!(
            DrawingLoadError::UnsupportedFormat("png".to_string()).to_string(),
            "Unsupported file format: png"
        );
        assert_eq!(
            DrawingLoadError::NoDrawableEntities("part.dxf".to_string()).to_string(),
            "No drawable entities found in part.dxf"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: SessionError = TransformError::DegenerateBounds {
            width: 0.0,
            height: 1.0,
        }
        .into();
        assert!(matches!(err, SessionError::Transform(_)));

        let err: SessionError = CamToolError::EmptyPointSet.into();
        assert!(matches!(err, SessionError::Emit(_)));

        let err: DrawingLoadError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, DrawingLoadError::Io(_)));
    }
}
