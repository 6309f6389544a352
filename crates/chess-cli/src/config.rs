//! Configuration file loading for the command-line tools.
//!
//! Settings are read from a TOML file (`chess-cli.toml` by default). A
//! missing file is not an error: every field has a default, and command-line
//! flags override whatever the file provides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but cannot be used.
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Settings for sampling games from a PGN collection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Directory searched recursively for game files.
    #[serde(default = "default_pgn_dir")]
    pub pgn_dir: PathBuf,
    /// Maximum number of games kept in the sample.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Seed for the sampler's random number generator.
    /// When absent the generator is seeded from system entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// File extension (without the dot) of game files.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_pgn_dir() -> PathBuf {
    PathBuf::from("pgnfiles")
}

fn default_sample_size() -> usize {
    10_000
}

fn default_extension() -> String {
    "pgn".to_string()
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            pgn_dir: default_pgn_dir(),
            sample_size: default_sample_size(),
            seed: None,
            extension: default_extension(),
        }
    }
}

/// Top-level configuration file layout.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default)]
    pub sampler: SamplerConfig,
}

impl CliConfig {
    /// Default configuration file name, looked up in the working directory.
    pub const DEFAULT_PATH: &'static str = "chess-cli.toml";

    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::InvalidValue`] if a value is unusable.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ext = &self.sampler.extension;
        if ext.is_empty() || ext.contains(['.', '/', '*']) {
            return Err(ConfigError::InvalidValue {
                field: "sampler.extension",
                reason: format!("'{}' is not a bare file extension", ext),
            });
        }
        Ok(())
    }
}
