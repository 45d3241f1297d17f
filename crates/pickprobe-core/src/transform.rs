//! Fitted transformation between drawing space and display space.
//!
//! A drawing is scaled uniformly so it fits the canvas with a margin on all
//! sides and is centred in the remaining area. Display Y grows downward while
//! drawing Y grows upward, so the Y axis is flipped against the canvas height.
//!
//! Formula:
//! ```text
//! display_x = (x - min_x) * scale + offset_x
//! display_y = height - ((y - min_y) * scale + offset_y)
//!
//! x = (display_x - offset_x) / scale + min_x
//! y = (height - display_y - offset_y) / scale + min_y
//! ```

use crate::bounds::BoundingBox;
use crate::error::{Result, TransformError};
use crate::point::{DisplayPoint, DrawingPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Immutable transform fitted to one loaded drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransform {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    bounds: BoundingBox,
    display_height: f64,
}

impl CoordinateTransform {
    /// Fits `bounds` into a `display_width` x `display_height` canvas,
    /// keeping `margin` pixels clear on every side.
    ///
    /// Uses one scale for both axes so circles stay circular.
    pub fn fit(
        bounds: BoundingBox,
        display_width: f64,
        display_height: f64,
        margin: f64,
    ) -> Result<Self> {
        let width = bounds.width();
        let height = bounds.height();
        let finite = [bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y, width, height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(TransformError::NonFiniteBounds { width, height });
        }
        if width == 0.0 || height == 0.0 {
            return Err(TransformError::DegenerateBounds { width, height });
        }

        let usable_width = display_width - 2.0 * margin;
        let usable_height = display_height - 2.0 * margin;
        let canvas_ok = [display_width, display_height, margin]
            .iter()
            .all(|v| v.is_finite())
            && usable_width > 0.0
            && usable_height > 0.0;
        if !canvas_ok {
            return Err(TransformError::InvalidCanvas {
                width: display_width,
                height: display_height,
                margin,
            });
        }

        let scale = (usable_width / width).min(usable_height / height);
        if !(scale.is_finite() && scale > 0.0) {
            return Err(TransformError::DegenerateBounds { width, height });
        }
        let offset_x = (display_width - width * scale) / 2.0;
        let offset_y = (display_height - height * scale) / 2.0;

        debug!(
            scale,
            offset_x, offset_y, display_width, display_height, "Fitted drawing transform"
        );

        Ok(Self {
            scale,
            offset_x,
            offset_y,
            bounds,
            display_height,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn display_height(&self) -> f64 {
        self.display_height
    }

    /// Maps a drawing-space point onto the display canvas.
    pub fn to_display(&self, p: &DrawingPoint) -> DisplayPoint {
        let dx = (p.x - self.bounds.min_x) * self.scale + self.offset_x;
        let dy = self.display_height - ((p.y - self.bounds.min_y) * self.scale + self.offset_y);
        DisplayPoint::new(dx, dy)
    }

    /// Maps a display-space point back into drawing space.
    pub fn to_drawing(&self, p: &DisplayPoint) -> DrawingPoint {
        let x = (p.x - self.offset_x) / self.scale + self.bounds.min_x;
        let y = (self.display_height - p.y - self.offset_y) / self.scale + self.bounds.min_y;
        DrawingPoint::new(x, y)
    }
}
