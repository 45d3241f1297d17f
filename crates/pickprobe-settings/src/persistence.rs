//! Settings Persistence
//!
//! Resolves where the configuration lives and loads or saves it there.
//! An explicitly named file must exist; the default location may be absent,
//! in which case built-in defaults are used.

use crate::config::Config;
use crate::error::SettingsResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings persistence layer
#[derive(Debug, Clone, Default)]
pub struct SettingsPersistence {
    config: Config,
    path: Option<PathBuf>,
}

impl SettingsPersistence {
    /// Create new persistence layer with default config and no backing file
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self {
            config,
            path: Some(path.to_path_buf()),
        })
    }

    /// Loads `explicit` if given, otherwise the default location if it exists.
    pub fn load_or_default(explicit: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let path = match Config::default_path() {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "No config directory, using defaults");
                return Ok(Self::new());
            }
        };

        if path.is_file() {
            info!(path = %path.display(), "Using configuration file");
            Self::load_from_file(&path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self {
                config: Config::default(),
                path: Some(path),
            })
        }
    }

    /// Save settings to file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.config.save_to_file(path)
    }

    /// Save settings back to the file they came from, or the default location.
    pub fn save(&self) -> SettingsResult<PathBuf> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        self.save_to_file(&path)?;
        Ok(path)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Backing file, if one is known.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Validate current settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.config.validate()
    }
}
