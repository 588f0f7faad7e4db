use crate::error::ConfigError;
use crate::models::selection::{resolve_algorithm, resolve_mode};
use bilevel_dither::{ColorMode, DitherAlgorithm};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "BILEVEL_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that receives `output_<method>_<mode>.png` files
    pub output_dir: PathBuf,

    /// Method used when none is given on the command line
    pub default_method: String,

    /// Mode used when none is given on the command line
    pub default_mode: String,

    /// Dither colour channels in parallel
    pub parallel_channels: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            default_method: DitherAlgorithm::default().name().to_string(),
            default_mode: ColorMode::default().name().to_string(),
            parallel_channels: false,
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration, falling back to defaults.
    ///
    /// With no path, defaults are used silently. A path that cannot be read
    /// or parsed is logged and also yields defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    output_dir = %config.output_dir.display(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Configured default method, with the usual fallback for unknown names.
    pub fn method(&self) -> DitherAlgorithm {
        resolve_algorithm(&self.default_method)
    }

    /// Configured default mode.
    pub fn mode(&self) -> ColorMode {
        resolve_mode(&self.default_mode)
    }
}
