use pickprobe_core::DrawingPoint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
use crate::program::GCodeProgram;

/// Parameters for the probe cycle emitted at every point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeCycleParameters {
    /// Distance below Z0 the probe travels before giving up (mm)
    pub probe_depth: f64,
    /// Feed rate for the probing move (mm/min)
    pub probe_feed: f64,
    /// Z height to retract to after each probe (mm)
    pub retract_height: f64,
}

impl Default for ProbeCycleParameters {
    fn default() -> Self {
        Self {
            probe_depth: 10.0,
            probe_feed: 100.0,
            retract_height: 5.0,
        }
    }
}

impl ProbeCycleParameters {
    /// Checks that every value is finite and physically meaningful.
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("probe_depth", self.probe_depth),
            ("probe_feed", self.probe_feed),
            ("retract_height", self.retract_height),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite {
                    name: name.to_string(),
                    value,
                });
            }
        }
        if self.probe_depth <= 0.0 {
            return Err(ParameterError::OutOfRange {
                name: "probe_depth".to_string(),
                value: self.probe_depth,
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.probe_feed <= 0.0 {
            return Err(ParameterError::OutOfRange {
                name: "probe_feed".to_string(),
                value: self.probe_feed,
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.retract_height < 0.0 {
            return Err(ParameterError::OutOfRange {
                name: "retract_height".to_string(),
                value: self.retract_height,
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// Generator for probe-cycle G-Code
#[derive(Debug, Clone, Default)]
pub struct GCodeEmitter {
    params: ProbeCycleParameters,
}

impl GCodeEmitter {
    /// Create a new emitter with the given probe parameters
    pub fn new(params: ProbeCycleParameters) -> Self {
        Self { params }
    }

    /// Emit a probe program visiting `points` in the given order.
    ///
    /// Points must already be in drawing space. Nothing is produced unless the
    /// whole program can be built.
    pub fn emit(&self, points: &[DrawingPoint]) -> CamToolResult<GCodeProgram> {
        if points.is_empty() {
            return Err(CamToolError::EmptyPointSet);
        }
        if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(CamToolError::NonFinitePoint {
                index,
                x: point.x,
                y: point.y,
            });
        }
        self.params.validate()?;
        let p = &self.params;

        let mut lines = Vec::with_capacity(3 + points.len() * 4);
        lines.push("G21 ; Set units to millimeters".to_string());
        lines.push("G90 ; Use absolute positioning".to_string());

        for (i, point) in points.iter().enumerate() {
            lines.push(format!("; Point {}", i + 1));
            lines.push(format!(
                "G0 X{} Y{} ; Move to point",
                format_coord(point.x),
                format_coord(point.y)
            ));
            lines.push(format!(
                "G38.2 Z{} F{} ; Probe down",
                -p.probe_depth,
                p.probe_feed
            ));
            lines.push(format!("G0 Z{} ; Retract probe", p.retract_height));
        }

        lines.push("M30 ; End of program".to_string());

        debug!(points = points.len(), lines = lines.len(), "Emitted probe program");
        Ok(GCodeProgram::from_lines(lines))
    }
}

/// Fixed-point, three decimals, never `-0.000`.
fn format_coord(value: f64) -> String {
    let text = format!("{:.3}", value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => text,
    }
}
