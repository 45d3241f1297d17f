//! Command line front end.

use anyhow::{bail, Context, Result};
use clap::Parser;
use pickprobe_camtools::GCodeProgram;
use pickprobe_designer::{load_drawing, PickSession};
use pickprobe_settings::{Config, SettingsPersistence};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::picks::read_picks;

/// Pick points on an SVG or DXF drawing and export them as a G-code probe program.
#[derive(Parser, Debug, Clone)]
#[command(name = "pickprobe")]
#[command(version, long_version = crate::LONG_VERSION)]
pub struct Cli {
    /// Drawing to load (.svg or .dxf)
    #[arg(value_name = "DRAWING", value_hint = clap::ValueHint::FilePath)]
    pub drawing: PathBuf,

    /// File of display-space picks, one `x,y` per line. Reads stdin when omitted
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub picks: Option<PathBuf>,

    /// Where to write the program; `-` for stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file (.toml or .json)
    #[arg(short, long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<f64>,

    /// Canvas margin in pixels
    #[arg(long)]
    pub margin: Option<f64>,

    /// Probe travel below Z0 (mm)
    #[arg(long, allow_negative_numbers = true)]
    pub probe_depth: Option<f64>,

    /// Probe feed rate (mm/min)
    #[arg(long, allow_negative_numbers = true)]
    pub probe_feed: Option<f64>,

    /// Retract height after each probe (mm)
    #[arg(long, allow_negative_numbers = true)]
    pub retract_height: Option<f64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies command line overrides on top of `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
        if let Some(margin) = self.margin {
            config.canvas.margin = margin;
        }
        if let Some(depth) = self.probe_depth {
            config.probe.probe_depth = depth;
        }
        if let Some(feed) = self.probe_feed {
            config.probe.probe_feed = feed;
        }
        if let Some(retract) = self.retract_height {
            config.probe.retract_height = retract;
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
    }

    /// Configuration file values with command line overrides applied.
    pub fn effective_config(&self) -> Result<Config> {
        let persistence = SettingsPersistence::load_or_default(self.config.as_deref())
            .context("Failed to load configuration")?;
        let mut config = persistence.into_config();
        self.apply_overrides(&mut config);
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

/// Where the exported program went.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub program: GCodeProgram,
    pub target: OutputTarget,
    pub points: usize,
}

/// Loads the drawing, replays the picks and writes the program.
///
/// `stdin` is only read when no picks file is given; `stdout` only receives
/// the program when the output path is `-`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, stdin: R, stdout: &mut W) -> Result<RunSummary> {
    let config = cli.effective_config()?;
    debug!(?config, "Effective configuration");

    let drawing = load_drawing(&cli.drawing)
        .with_context(|| format!("Failed to load drawing {}", cli.drawing.display()))?;

    let mut session = PickSession::with_probe_parameters(config.probe);
    let transform = session
        .load_drawing(&drawing, &config.canvas)
        .with_context(|| format!("Cannot fit {} onto the canvas", cli.drawing.display()))?;
    info!(
        scale = transform.scale(),
        offset_x = transform.offset_x(),
        offset_y = transform.offset_y(),
        "Drawing fitted to canvas"
    );

    let events = match &cli.picks {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open picks file {}", path.display()))?;
            read_picks(BufReader::new(file))
                .with_context(|| format!("Invalid picks file {}", path.display()))?
        }
        None => read_picks(stdin).context("Invalid picks on stdin")?,
    };
    if events.is_empty() {
        bail!("No points selected");
    }

    for event in events {
        session.handle_event(event)?;
    }

    let target = OutputTarget::from_path(&config.output.path);
    let program = match &target {
        OutputTarget::Stdout => session
            .export_to(stdout)
            .context("Failed to write G-code to stdout")?,
        OutputTarget::File(path) => session
            .export_to_file(path)
            .with_context(|| format!("Failed to write G-code to {}", path.display()))?,
    };

    Ok(RunSummary {
        program,
        target,
        points: session.picks().len(),
    })
}
