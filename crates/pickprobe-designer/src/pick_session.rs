//! Pick session: the state between a loaded drawing and an exported program.
//!
//! A session owns at most one fitted transform and the display-space picks
//! made against it, in click order. Loading a new drawing replaces the
//! transform and discards every pick.

use pickprobe_camtools::{GCodeEmitter, GCodeProgram, PointOrderer, ProbeCycleParameters};
use pickprobe_core::constants::MARKER_SIZE;
use pickprobe_core::{Canvas, CoordinateTransform, DisplayPoint, DrawingPoint};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};
use crate::import::ImportedDrawing;

/// A user click on the display canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickEvent {
    pub x: f64,
    pub y: f64,
}

impl PickEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn point(&self) -> DisplayPoint {
        DisplayPoint::new(self.x, self.y)
    }
}

/// Overlay marker for one pick: a numbered dot centred on the click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickMarker {
    /// 1-based pick number shown next to the dot
    pub label: usize,
    pub center: DisplayPoint,
    /// Dot diameter in pixels
    pub size: f64,
}

impl PickMarker {
    /// Where the label text goes: down and right of the dot.
    pub fn label_anchor(&self) -> DisplayPoint {
        DisplayPoint::new(self.center.x + self.size, self.center.y + self.size)
    }
}

/// Mutable session state for one drawing at a time.
#[derive(Debug, Clone, Default)]
pub struct PickSession {
    transform: Option<CoordinateTransform>,
    picks: Vec<DisplayPoint>,
    emitter: GCodeEmitter,
}

impl PickSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that emits with the given probe parameters.
    pub fn with_probe_parameters(params: ProbeCycleParameters) -> Self {
        Self {
            emitter: GCodeEmitter::new(params),
            ..Self::default()
        }
    }

    /// Installs `transform` and clears every pick.
    pub fn load(&mut self, transform: CoordinateTransform) {
        if !self.picks.is_empty() {
            debug!(discarded = self.picks.len(), "Clearing picks for new drawing");
        }
        self.transform = Some(transform);
        self.picks.clear();
    }

    /// Fits `drawing` onto `canvas` and loads the result.
    ///
    /// On failure the session is left untouched.
    pub fn load_drawing(
        &mut self,
        drawing: &ImportedDrawing,
        canvas: &Canvas,
    ) -> SessionResult<CoordinateTransform> {
        let transform = drawing.fit(canvas)?;
        self.load(transform);
        Ok(transform)
    }

    pub fn transform(&self) -> Option<&CoordinateTransform> {
        self.transform.as_ref()
    }

    /// Records a pick and returns where it lands in drawing space.
    ///
    /// Non-finite positions are rejected and not recorded.
    pub fn add_pick(&mut self, display_point: DisplayPoint) -> SessionResult<DrawingPoint> {
        let transform = self.transform.ok_or(SessionError::NoTransformLoaded)?;
        if !display_point.is_finite() {
            return Err(SessionError::NonFinitePick {
                x: display_point.x,
                y: display_point.y,
            });
        }
        let drawing_point = transform.to_drawing(&display_point);
        self.picks.push(display_point);

        if !transform.bounds().contains(&drawing_point) {
            debug!(drawing = %drawing_point, "Pick lies outside the drawing bounds");
        }

        info!(
            index = self.picks.len(),
            screen = %display_point,
            drawing = %drawing_point,
            "Point added"
        );
        Ok(drawing_point)
    }

    /// Processes one pick event. Events must be fed in arrival order.
    pub fn handle_event(&mut self, event: PickEvent) -> SessionResult<DrawingPoint> {
        self.add_pick(event.point())
    }

    /// Picks in click order, in display space.
    pub fn picks(&self) -> &[DisplayPoint] {
        &self.picks
    }

    /// Picks in click order, converted to drawing space.
    pub fn drawing_picks(&self) -> SessionResult<Vec<DrawingPoint>> {
        let transform = self.transform.ok_or(SessionError::NoTransformLoaded)?;
        Ok(self.picks.iter().map(|p| transform.to_drawing(p)).collect())
    }

    /// Overlay markers for every pick, numbered from 1 in click order.
    pub fn markers(&self) -> Vec<PickMarker> {
        self.picks
            .iter()
            .enumerate()
            .map(|(i, &center)| PickMarker {
                label: i + 1,
                center,
                size: MARKER_SIZE,
            })
            .collect()
    }

    /// Converts, orders and emits every pick as a probe program.
    pub fn export(&self) -> SessionResult<GCodeProgram> {
        if self.picks.is_empty() {
            return Err(SessionError::NoPicks);
        }
        let points = self.drawing_picks()?;
        let ordered = PointOrderer::order(&points);

        debug!(
            picked_travel = PointOrderer::path_length(&points),
            ordered_travel = PointOrderer::path_length(&ordered),
            "Ordered probe points"
        );

        Ok(self.emitter.emit(&ordered)?)
    }

    /// Exports into `writer`. Nothing is written if the export fails.
    pub fn export_to<W: Write>(&self, writer: &mut W) -> SessionResult<GCodeProgram> {
        let program = self.export()?;
        program.write_to(writer)?;
        Ok(program)
    }

    /// Exports to the file at `path`. The file is not created if the export fails.
    pub fn export_to_file(&self, path: &Path) -> SessionResult<GCodeProgram> {
        let program = self.export()?;
        program.save(path)?;
        info!(path = %path.display(), points = self.picks.len(), "G-code generated");
        Ok(program)
    }
}
