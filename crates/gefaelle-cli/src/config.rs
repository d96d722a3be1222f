//! TOML configuration for the CLI.

use anyhow::Result;
use gefaelle_present::{Frame, Language};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gefaelle.toml";

/// Table output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub language: Language,
    pub precision: usize,
    pub show_units: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            language: Language::De,
            precision: 2,
            show_units: true,
        }
    }
}

/// Plot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub stroke_width: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let frame = Frame::default();
        Self {
            width: frame.width,
            height: frame.height,
            margin: frame.margin,
            stroke_width: 2.0,
        }
    }
}

impl PlotConfig {
    pub fn frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub plot: PlotConfig,
}

impl CliConfig {
    /// Load from a TOML file. Missing or malformed files fall back to defaults.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "config file {} is malformed, using defaults: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("saved config to {}", path.display());
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }
}
