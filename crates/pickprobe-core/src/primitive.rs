//! Drawing primitives handed over by the file loaders.

use crate::point::DrawingPoint;

/// A parsed drawing entity in drawing space.
///
/// Only line segments and circles carry geometry. Loaders report any other
/// entity they come across as [`Primitive::Unsupported`] so callers can log
/// what was skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight segment between two endpoints
    Line {
        start: DrawingPoint,
        end: DrawingPoint,
    },
    /// Full circle
    Circle { center: DrawingPoint, radius: f64 },
    /// Entity kind the loaders do not interpret
    Unsupported { kind: String },
}

impl Primitive {
    pub fn line(start: DrawingPoint, end: DrawingPoint) -> Self {
        Self::Line { start, end }
    }

    pub fn circle(center: DrawingPoint, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// Axis-aligned extent as `(min_x, min_y, max_x, max_y)`, or `None` for
    /// primitives without geometry.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Self::Line { start, end } => Some((
                start.x.min(end.x),
                start.y.min(end.y),
                start.x.max(end.x),
                start.y.max(end.y),
            )),
            Self::Circle { center, radius } => {
                let r = radius.abs();
                Some((center.x - r, center.y - r, center.x + r, center.y + r))
            }
            Self::Unsupported { .. } => None,
        }
    }

    pub fn is_drawable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }

    /// Short entity name used in log output.
    pub fn kind(&self) -> &str {
        match self {
            Self::Line { .. } => "LINE",
            Self::Circle { .. } => "CIRCLE",
            Self::Unsupported { kind } => kind,
        }
    }
}
