//! Application configuration loaded from `logopack.toml`.
//!
//! A missing config file is not an error - every section has full defaults,
//! and the CLI can override the serve binding.

pub mod section;

pub use section::package::PackageConfig;
pub use section::serve::ServeConfig;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub serve: ServeConfig,
    pub package: PackageConfig,
}

impl AppConfig {
    /// Load configuration from the given path. A missing file yields the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.package.modes.is_empty() {
            return Err(ConfigError::Validation(
                "package.modes must name at least one color mode".to_string(),
            ));
        }
        for (field, quality) in [
            ("package.jpeg_quality", self.package.jpeg_quality),
            ("package.webp_quality", self.package.webp_quality),
        ] {
            if quality > 100 {
                return Err(ConfigError::Validation(format!(
                    "{field} must be between 0 and 100, got {quality}"
                )));
            }
        }
        Ok(())
    }
}

/// Parse config from a TOML string (test helper).
#[cfg(test)]
pub fn test_parse_config(raw: &str) -> AppConfig {
    let config: AppConfig = toml::from_str(raw).expect("test config should parse");
    config.validate().expect("test config should validate");
    config
}
