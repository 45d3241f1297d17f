//! PickProbe Settings Crate
//!
//! Handles the canvas, probe cycle and output configuration and its
//! persistence as JSON or TOML.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, ConfigFormat, OutputSettings};
pub use error::{SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
