use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calculator::{DisplayOptions, EngineOptions, MAX_ROUNDING_DIGITS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub engine: EngineConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fractional digits kept after computing a result.
    pub rounding_digits: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub group_separator: Option<String>,
}

impl CalcConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// location is tried and any problem there falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        let Some(path) = config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        match Self::read(&path) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("{}, using defaults", err);
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn engine_options(&self) -> EngineOptions {
        let mut options = EngineOptions::default();
        if let Some(digits) = self.engine.rounding_digits {
            if digits > MAX_ROUNDING_DIGITS {
                tracing::warn!(
                    "rounding_digits = {} exceeds {}, clamping",
                    digits,
                    MAX_ROUNDING_DIGITS
                );
            }
            options.rounding_digits = digits.min(MAX_ROUNDING_DIGITS);
        }
        options
    }

    pub fn display_options(&self) -> DisplayOptions {
        let mut options = DisplayOptions::default();
        if let Some(separator) = &self.display.group_separator {
            options.group_separator = separator.clone();
        }
        options
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
}
