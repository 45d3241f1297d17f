//! Shared defaults for the display canvas and exported programs.

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Default margin kept clear on every side of the fitted drawing, in pixels.
pub const DEFAULT_CANVAS_MARGIN: f64 = 20.0;

/// Diameter of the overlay marker drawn for each pick, in pixels.
pub const MARKER_SIZE: f64 = 6.0;

/// File name used when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "output.gcode";
