//! # PickProbe
//!
//! Pick points on a 2D CAD drawing and turn them into a G-code probe program.
//!
//! ## Architecture
//!
//! PickProbe is organized as a workspace with multiple crates:
//!
//! 1. **pickprobe-core** - Points, primitives, bounding boxes and the display/drawing transform
//! 2. **pickprobe-camtools** - Nearest-neighbour ordering and probe-cycle G-code emission
//! 3. **pickprobe-designer** - SVG/DXF import and the pick session
//! 4. **pickprobe-settings** - Canvas, probe and output configuration
//! 5. **pickprobe** - Command line binary that integrates all crates

pub mod cli;
pub mod picks;

pub use pickprobe_core::{
    BoundingBox, BoundingBoxAccumulator, Canvas, CoordinateTransform, DisplayPoint, DrawingPoint,
    Primitive, TransformError,
};

pub use pickprobe_camtools::{
    CamToolError, GCodeEmitter, GCodeProgram, ParameterError, PointOrderer, ProbeCycleParameters,
};

pub use pickprobe_designer::{
    load_drawing, DrawingLoadError, DrawingLoader, DxfLoader, FileFormat, ImportedDrawing,
    PickEvent, PickMarker, PickSession, SessionError, SvgLoader,
};

pub use pickprobe_settings::{Config, SettingsError, SettingsPersistence};

pub use cli::{run, Cli, OutputTarget, RunSummary};
pub use picks::{read_picks, PickParseError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version string shown by `--version`
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays free for G-code
/// - RUST_LOG environment variable support
/// - `info` by default, `debug` when `verbose` is set
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
