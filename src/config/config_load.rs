// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{CanvasConfig, OscConfig, SceneConfig, ViewConfig, WindowConfig};
use crate::utilities::ColorParseError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color in config: {0}")]
    Color(#[from] ColorParseError),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub canvas: CanvasConfig,
    pub scene: SceneConfig,
    pub view: ViewConfig,
    pub osc: OscConfig,
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";

    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(Path::new(Self::FILE_NAME))
    }

    /// Loads the config, or the built-in defaults when no usable file exists.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using default configuration", e);
                Self::default()
            }
        }
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join(Self::FILE_NAME);

        if !config_path.exists() {
            return None;
        }
        match Self::load_from_path(&config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("ignoring {}: {}", config_path.display(), e);
                None
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
