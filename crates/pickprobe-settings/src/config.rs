//! Configuration for PickProbe
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas (display size and margin used to fit the drawing)
//! - Probe cycle (depth, feed and retract height)
//! - Output (where the program is written)

use pickprobe_camtools::{ParameterError, ProbeCycleParameters};
use pickprobe_core::constants::DEFAULT_OUTPUT_FILE;
use pickprobe_core::Canvas;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Application directory name under the platform config directory
pub const APP_DIR: &str = "pickprobe";

/// Default configuration file name
pub const CONFIG_FILE: &str = "config.toml";

/// On-disk configuration format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Program file written on export
    pub path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Complete application configuration
///
/// Missing sections and keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Display canvas used to fit the drawing
    pub canvas: Canvas,
    /// Probe cycle emitted at every point
    pub probe: ProbeCycleParameters,
    /// Output file settings
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/pickprobe/config.toml`, if the platform has a config dir.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let canvas = &self.canvas;
        for (key, value) in [
            ("canvas.width", canvas.width),
            ("canvas.height", canvas.height),
            ("canvas.margin", canvas.margin),
        ] {
            if !value.is_finite() {
                return Err(invalid(key, "must be a finite number"));
            }
        }
        if canvas.width <= 0.0 || canvas.height <= 0.0 {
            return Err(invalid("canvas", "width and height must be > 0"));
        }
        if canvas.margin < 0.0 {
            return Err(invalid("canvas.margin", "must not be negative"));
        }
        if canvas.margin * 2.0 >= canvas.width.min(canvas.height) {
            return Err(invalid(
                "canvas.margin",
                "leaves no room for the drawing",
            ));
        }

        self.probe.validate().map_err(|e| match e {
            ParameterError::NotFinite { name, .. } => {
                invalid(&format!("probe.{}", name), "must be a finite number")
            }
            ParameterError::OutOfRange { name, reason, .. } => {
                invalid(&format!("probe.{}", name), &reason)
            }
        })?;

        if self.output.path.as_os_str().is_empty() {
            return Err(invalid("output.path", "must not be empty"));
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.canvas, Canvas::new(800.0, 600.0, 20.0));
        assert_eq!(config.probe, ProbeCycleParameters::default());
        assert_eq!(config.output.path, PathBuf::from("output.gcode"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/config.TOML")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("config.yaml")),
            Err(SettingsError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[probe]\nprobe_depth = 2.5\n").unwrap();
        assert_eq!(config.probe.probe_depth, 2.5);
        assert_eq!(config.probe.probe_feed, 100.0);
        assert_eq!(config.canvas, Canvas::default());
    }

    #[test]
    fn test_validate_margin() {
        let mut config = Config::default();
        config.canvas.margin = 300.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { ref key, .. }) if key == "canvas.margin"
        ));
    }

    #[test]
    fn test_validate_probe_parameters() {
        let mut config = Config::default();
        config.probe.probe_feed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { ref key, .. }) if key == "probe.probe_feed"
        ));
    }
}
