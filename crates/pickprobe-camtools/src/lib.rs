//! # PickProbe CAM Tools
//!
//! Turns picked drawing-space points into a G-code probe program.
//!
//! - **Optimizer**: greedy nearest-neighbour ordering to cut travel between probes
//! - **Probe Cycle**: fixed `G21/G90/G0/G38.2/M30` template with configurable depth, feed and retract
//! - **Program**: the emitted, write-once line list

pub mod error;
pub mod optimizer;
pub mod probe_cycle;
pub mod program;

pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use optimizer::PointOrderer;
pub use probe_cycle::{GCodeEmitter, ProbeCycleParameters};
pub use program::GCodeProgram;
