//! Display canvas dimensions.

use crate::bounds::BoundingBox;
use crate::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_MARGIN, DEFAULT_CANVAS_WIDTH};
use crate::error::Result;
use crate::transform::CoordinateTransform;
use serde::{Deserialize, Serialize};

/// Size of the surface the drawing is rendered onto, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Clear border kept on every side of the fitted drawing
    pub margin: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            margin: DEFAULT_CANVAS_MARGIN,
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Fits a transform that places `bounds` on this canvas.
    pub fn fit(&self, bounds: BoundingBox) -> Result<CoordinateTransform> {
        CoordinateTransform::fit(bounds, self.width, self.height, self.margin)
    }
}
